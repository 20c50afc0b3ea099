//! Government salaries dataset.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QueryResult;
use crate::processing::currency::Money;
use crate::processing::predicate::{Predicate, parse_integer};
use crate::processing::sort::{Comparator, SortKey};
use crate::query::Dataset;
use crate::types::ResponseItem;

/// One row of the salaries dataset, as published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "Nombre")]
    pub first_name: String,
    #[serde(rename = "Apellido")]
    pub last_name: String,
    #[serde(rename = "Asignacion_Mensual")]
    pub monthly_wage: String,
    #[serde(rename = "NumMes")]
    pub month_num: String,
    #[serde(rename = "Mes")]
    pub month: String,
    #[serde(rename = "Ano")]
    pub year: String,
    #[serde(rename = "Cargo")]
    pub position: String,
    #[serde(rename = "Juridiccion")]
    pub section: String,
    #[serde(rename = "NumDocumento")]
    pub document_number: String,
}

/// Optional constraints over [`SalaryRecord`]s. Every `None` field is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Inclusive lower bound on the monthly wage.
    pub min_monthly_wage: Option<Decimal>,
    /// Inclusive upper bound on the monthly wage.
    pub max_monthly_wage: Option<Decimal>,
    /// Exact month number (1–12).
    pub month_num: Option<i64>,
    pub position: Option<String>,
    /// Jurisdiction contains this text.
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryHeader {
    /// `"Last, First"`.
    pub full_name: String,
    pub month: String,
    pub monthly_wage: Money,
    pub section: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryDetail {
    pub document_number: i64,
    pub monthly_wage: Money,
    pub position: String,
    pub month_num: u32,
}

pub type SalaryResponseItem = ResponseItem<SalaryHeader, SalaryDetail>;

impl SalaryResponseItem {
    /// Project a record into its header/detail pair.
    ///
    /// Fails if the wage, year, month number or document number is not numeric.
    pub fn from_record(record: &SalaryRecord) -> QueryResult<Self> {
        let monthly_wage = Money::from_raw("Asignacion_Mensual", &record.monthly_wage)?;
        Ok(Self {
            header: SalaryHeader {
                full_name: format!("{}, {}", record.last_name, record.first_name),
                month: record.month.clone(),
                monthly_wage: monthly_wage.clone(),
                section: record.section.clone(),
                year: parse_integer("Ano", &record.year)?,
            },
            detail: SalaryDetail {
                document_number: parse_integer("NumDocumento", &record.document_number)?,
                monthly_wage,
                position: record.position.clone(),
                month_num: parse_integer("NumMes", &record.month_num)?,
            },
        })
    }
}

/// Sort keys accepted by salary queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SalarySortKey {
    /// Year, then month number.
    #[default]
    Year,
    /// Month number, then year.
    Month,
    MonthlyWage,
    Section,
    /// Full name (`"Last, First"`).
    Name,
}

impl SortKey for SalarySortKey {
    type Item = SalaryResponseItem;

    const ALL: &'static [Self] = &[
        Self::Year,
        Self::Month,
        Self::MonthlyWage,
        Self::Section,
        Self::Name,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::MonthlyWage => "monthlyWage",
            Self::Section => "section",
            Self::Name => "name",
        }
    }

    fn comparator(self) -> Comparator<SalaryResponseItem> {
        match self {
            Self::Year => by_year_then_month,
            Self::Month => by_month_then_year,
            Self::MonthlyWage => by_monthly_wage,
            Self::Section => by_section,
            Self::Name => by_full_name,
        }
    }
}

fn by_year_then_month(a: &SalaryResponseItem, b: &SalaryResponseItem) -> Ordering {
    a.header
        .year
        .cmp(&b.header.year)
        .then_with(|| a.detail.month_num.cmp(&b.detail.month_num))
}

fn by_month_then_year(a: &SalaryResponseItem, b: &SalaryResponseItem) -> Ordering {
    a.detail
        .month_num
        .cmp(&b.detail.month_num)
        .then_with(|| a.header.year.cmp(&b.header.year))
}

fn by_monthly_wage(a: &SalaryResponseItem, b: &SalaryResponseItem) -> Ordering {
    a.header.monthly_wage.value().cmp(&b.header.monthly_wage.value())
}

fn by_section(a: &SalaryResponseItem, b: &SalaryResponseItem) -> Ordering {
    a.header.section.cmp(&b.header.section)
}

fn by_full_name(a: &SalaryResponseItem, b: &SalaryResponseItem) -> Ordering {
    a.header.full_name.cmp(&b.header.full_name)
}

/// The salaries dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Salaries;

impl Dataset for Salaries {
    const NAME: &'static str = "salaries";

    type Record = SalaryRecord;
    type Filter = SalaryFilter;
    type Item = SalaryResponseItem;
    type SortKey = SalarySortKey;

    fn predicate(filter: &SalaryFilter) -> Predicate<'_, SalaryRecord> {
        Predicate::new()
            .text_contains(filter.first_name.as_deref(), first_name)
            .text_contains(filter.last_name.as_deref(), last_name)
            .decimal_range(
                "Asignacion_Mensual",
                filter.min_monthly_wage,
                filter.max_monthly_wage,
                monthly_wage,
            )
            .integer_equals("NumMes", filter.month_num, month_num)
            .text_contains(filter.position.as_deref(), position)
            .text_contains(filter.section.as_deref(), section)
    }

    fn project(record: &SalaryRecord) -> QueryResult<SalaryResponseItem> {
        SalaryResponseItem::from_record(record)
    }
}

fn first_name(r: &SalaryRecord) -> &str {
    &r.first_name
}

fn last_name(r: &SalaryRecord) -> &str {
    &r.last_name
}

fn monthly_wage(r: &SalaryRecord) -> &str {
    &r.monthly_wage
}

fn month_num(r: &SalaryRecord) -> &str {
    &r.month_num
}

fn position(r: &SalaryRecord) -> &str {
    &r.position
}

fn section(r: &SalaryRecord) -> &str {
    &r.section
}
