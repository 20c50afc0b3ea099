//! Exact decimal parsing and currency display formatting.
//!
//! Source datasets write amounts as plain decimals (`150000.50`, optionally grouped as
//! `1,500,000.50`). Responses display them in the local convention used by the datasets'
//! publisher: a `$` marker, `.` for grouping and `,` for decimals (`$ 150.000,50`).
//!
//! Values are held as [`rust_decimal::Decimal`] so range filters and sorting never see binary
//! floating-point rounding. Formatting never drops fractional digits, which makes
//! [`reparse_display`] an exact inverse of [`format_currency`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::error::{QueryError, QueryResult};

/// Separators and currency marker describing one textual number convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
    /// Thousands separator inside the integer digits.
    pub grouping_separator: char,
    /// Marker placed in front of formatted amounts.
    pub currency_marker: &'static str,
}

impl NumberFormat {
    /// Convention used by raw dataset values.
    pub const SOURCE: NumberFormat = NumberFormat {
        decimal_separator: '.',
        grouping_separator: ',',
        currency_marker: "$",
    };

    /// Convention used for amounts shown in responses.
    pub const DISPLAY: NumberFormat = NumberFormat {
        decimal_separator: ',',
        grouping_separator: '.',
        currency_marker: "$",
    };

    /// Minimum number of fractional digits written by [`NumberFormat::format_currency`].
    pub const MIN_FRACTION_DIGITS: u32 = 2;

    /// Parse a plain (unmarked) number written in this convention.
    ///
    /// Values that [`Decimal`] cannot hold exactly are rejected rather than rounded.
    pub fn parse(&self, text: &str) -> Result<Decimal, String> {
        let s = text.trim();
        if s.is_empty() {
            return Err("empty value".to_string());
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let mut parts = unsigned.splitn(2, self.decimal_separator);
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next();

        let mut canonical = String::with_capacity(s.len() + 1);
        if negative {
            canonical.push('-');
        }

        let mut prev_was_digit = false;
        let mut int_digits = 0usize;
        for c in int_part.chars() {
            if c.is_ascii_digit() {
                canonical.push(c);
                int_digits += 1;
                prev_was_digit = true;
            } else if c == self.grouping_separator && prev_was_digit {
                prev_was_digit = false;
            } else {
                return Err(format!("unexpected character '{c}'"));
            }
        }
        if int_digits > 0 && !prev_was_digit {
            return Err("misplaced grouping separator".to_string());
        }

        let mut frac_digits = 0usize;
        let mut significant_frac_digits = 0usize;
        if let Some(frac) = frac_part {
            if int_digits == 0 {
                canonical.push('0');
            }
            let point = canonical.len();
            canonical.push('.');
            for c in frac.chars() {
                if !c.is_ascii_digit() {
                    return Err(format!("unexpected character '{c}' in fraction"));
                }
                canonical.push(c);
                frac_digits += 1;
                if c != '0' {
                    significant_frac_digits = frac_digits;
                }
            }
            // Trailing fractional zeros carry no value.
            if significant_frac_digits == 0 {
                canonical.truncate(point);
            } else {
                canonical.truncate(point + 1 + significant_frac_digits);
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return Err("no digits".to_string());
        }

        let value = Decimal::from_str(&canonical).map_err(|e| e.to_string())?;
        // `from_str` rounds away digits it cannot hold.
        if value.scale() as usize != significant_frac_digits {
            return Err(format!(
                "more digits than an exact amount can hold (max {} significant)",
                Decimal::MAX_SCALE
            ));
        }
        Ok(value)
    }

    /// Render `value` with this convention's marker and separators.
    ///
    /// At least [`Self::MIN_FRACTION_DIGITS`] fractional digits are written; extra precision
    /// carried by `value` is kept rather than rounded.
    pub fn format_currency(&self, value: Decimal) -> String {
        let plain = value.abs().to_string();
        let (int_digits, frac_digits) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 4);
        if value.is_sign_negative() && !value.is_zero() {
            out.push('-');
        }
        out.push_str(self.currency_marker);
        out.push(' ');

        let len = int_digits.len();
        for (i, c) in int_digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(c);
        }
        out.push(self.decimal_separator);
        out.push_str(frac_digits);
        for _ in frac_digits.len()..Self::MIN_FRACTION_DIGITS as usize {
            out.push('0');
        }
        out
    }

    /// Parse text produced by [`Self::format_currency`]: the marker and grouping separators are
    /// stripped and the remainder parsed.
    pub fn parse_currency(&self, text: &str) -> Result<Decimal, String> {
        let s = text.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, s),
        };
        let unmarked = rest.strip_prefix(self.currency_marker).unwrap_or(rest).trim_start();
        let digits: String = unmarked
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .collect();
        let value = self.parse(&digits)?;
        Ok(if negative { -value } else { value })
    }
}

/// Parse a raw dataset amount into an exact decimal.
pub fn parse_decimal(raw: &str) -> QueryResult<Decimal> {
    parse_field_decimal("amount", raw)
}

/// Parse a named raw dataset field into an exact decimal.
pub fn parse_field_decimal(field: &str, raw: &str) -> QueryResult<Decimal> {
    NumberFormat::SOURCE
        .parse(raw)
        .map_err(|message| QueryError::parse(field, raw, message))
}

/// Convert a raw dataset amount into its display form (`"150000.5"` → `"$ 150.000,50"`).
pub fn format_currency(raw: &str) -> QueryResult<String> {
    parse_decimal(raw).map(|value| NumberFormat::DISPLAY.format_currency(value))
}

/// Recover the exact value from a string produced by [`format_currency`].
pub fn reparse_display(display: &str) -> QueryResult<Decimal> {
    NumberFormat::DISPLAY
        .parse_currency(display)
        .map_err(|message| QueryError::parse("amount", display, message))
}

/// A monetary amount: display text carried alongside the exact value it was formatted from.
///
/// Sorting and comparisons use [`Money::value`]; serialization writes [`Money::display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    value: Decimal,
    display: String,
}

impl Money {
    /// Parse a raw dataset field and format it for display.
    pub fn from_raw(field: &str, raw: &str) -> QueryResult<Self> {
        let value = parse_field_decimal(field, raw)?;
        Ok(Self::from_value(value))
    }

    /// Wrap an exact value, formatting it for display.
    pub fn from_value(value: Decimal) -> Self {
        Self {
            value,
            display: NumberFormat::DISPLAY.format_currency(value),
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}
