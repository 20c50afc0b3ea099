//! Composable record predicates.
//!
//! A [`Predicate`] is an AND of clauses, each a fallible test over one record. Dataset filters
//! build their predicate once per query with the builder methods below; a constraint that is
//! absent (`None`, or a blank text needle) adds no clause.
//!
//! Clauses that parse record fields propagate [`crate::QueryError::Parse`] instead of quietly
//! rejecting the row, so one malformed amount fails the whole query.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currency::parse_field_decimal;
use super::normalize::normalize;
use crate::error::{QueryError, QueryResult};

/// Accessor for a text field of a record.
pub type FieldAccessor<R> = fn(&R) -> &str;

type Clause<'a, R> = Box<dyn Fn(&R) -> QueryResult<bool> + 'a>;

/// A conjunction of record tests.
pub struct Predicate<'a, R> {
    clauses: Vec<Clause<'a, R>>,
}

impl<'a, R: 'a> Default for Predicate<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R: 'a> Predicate<'a, R> {
    /// A predicate with no clauses; it accepts every record.
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    /// Number of active clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Add an arbitrary clause.
    pub fn with<F>(mut self, clause: F) -> Self
    where
        F: Fn(&R) -> QueryResult<bool> + 'a,
    {
        self.clauses.push(Box::new(clause));
        self
    }

    /// Require `field` to contain `needle`, ignoring case and accents.
    pub fn text_contains(self, needle: Option<&str>, field: FieldAccessor<R>) -> Self {
        self.any_text_contains(needle, vec![field])
    }

    /// Require at least one of `fields` to contain `needle`, ignoring case and accents.
    pub fn any_text_contains(self, needle: Option<&str>, fields: Vec<FieldAccessor<R>>) -> Self {
        let Some(needle) = active_needle(needle) else {
            return self;
        };
        self.with(move |record| {
            Ok(fields
                .iter()
                .any(|field| normalize(field(record)).contains(&needle)))
        })
    }

    /// Require the decimal in `field` to lie within the inclusive `[min, max]` range.
    pub fn decimal_range(
        self,
        name: &'static str,
        min: Option<Decimal>,
        max: Option<Decimal>,
        field: FieldAccessor<R>,
    ) -> Self {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.with(move |record| {
            let value = parse_field_decimal(name, field(record))?;
            Ok(min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m))
        })
    }

    /// Require the year in `field`, taken as January 1 of that year, to be on or after `bound`.
    pub fn year_on_or_after(
        self,
        name: &'static str,
        bound: Option<NaiveDate>,
        field: FieldAccessor<R>,
    ) -> Self {
        let Some(bound) = bound else {
            return self;
        };
        self.with(move |record| Ok(year_to_date(name, field(record))? >= bound))
    }

    /// Require the year in `field`, taken as January 1 of that year, to be on or before `bound`.
    pub fn year_on_or_before(
        self,
        name: &'static str,
        bound: Option<NaiveDate>,
        field: FieldAccessor<R>,
    ) -> Self {
        let Some(bound) = bound else {
            return self;
        };
        self.with(move |record| Ok(year_to_date(name, field(record))? <= bound))
    }

    /// Require the integer in `field` to equal `expected`.
    pub fn integer_equals(
        self,
        name: &'static str,
        expected: Option<i64>,
        field: FieldAccessor<R>,
    ) -> Self {
        let Some(expected) = expected else {
            return self;
        };
        self.with(move |record| Ok(parse_integer::<i64>(name, field(record))? == expected))
    }

    /// Evaluate every clause against `record`, stopping at the first failing one.
    pub fn matches(&self, record: &R) -> QueryResult<bool> {
        for clause in &self.clauses {
            if !clause(record)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Keep the records that satisfy this predicate, in input order.
    pub fn filter<'r>(&self, records: &'r [R]) -> QueryResult<Vec<&'r R>> {
        let mut out = Vec::new();
        for record in records {
            if self.matches(record)? {
                out.push(record);
            }
        }
        Ok(out)
    }
}

fn active_needle(needle: Option<&str>) -> Option<String> {
    needle
        .filter(|n| !n.trim().is_empty())
        .map(normalize)
}

/// Convert a year string into January 1 of that year.
pub fn year_to_date(field: &str, raw: &str) -> QueryResult<NaiveDate> {
    let year = raw
        .trim()
        .parse::<i32>()
        .map_err(|e| QueryError::parse(field, raw, e.to_string()))?;
    if !(1..=9999).contains(&year) {
        return Err(QueryError::parse(field, raw, "year out of range 1..=9999"));
    }
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| QueryError::parse(field, raw, "invalid calendar year"))
}

/// Parse an integer-valued text field.
pub fn parse_integer<T>(field: &str, raw: &str) -> QueryResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| QueryError::parse(field, raw, e.to_string()))
}
