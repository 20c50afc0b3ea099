//! Public-works projects dataset.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QueryResult;
use crate::processing::currency::Money;
use crate::processing::predicate::Predicate;
use crate::processing::sort::{Comparator, SortKey};
use crate::query::Dataset;
use crate::types::ResponseItem;

/// One row of the projects dataset, as published.
///
/// Numeric and year columns are kept as raw text; the query pipeline parses them when a filter,
/// projection or sort needs the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "NombreObra")]
    pub project_name: String,
    #[serde(rename = "MontoTotal")]
    pub total_amount: String,
    #[serde(rename = "NombreProvincia")]
    pub province: String,
    #[serde(rename = "NombreDepto")]
    pub department: String,
    #[serde(rename = "TipoMoneda")]
    pub currency_type: String,
    #[serde(rename = "DescripicionFisica")]
    pub description: String,
    #[serde(rename = "DuracionObrasDias")]
    pub duration_days: String,
    #[serde(rename = "FechaInicioAnio")]
    pub start_year: String,
    #[serde(rename = "FechaFinAnio")]
    pub end_year: String,
    #[serde(rename = "TipoProyecto")]
    pub project_type: String,
    #[serde(rename = "Url_perfil_obra")]
    pub project_url: String,
    #[serde(rename = "SectorNombre")]
    pub section: String,
    #[serde(rename = "EtapaObra")]
    pub status: String,
}

/// Optional constraints over [`ProjectRecord`]s. Every `None` field is unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectFilter {
    /// Province name contains this text.
    pub province: Option<String>,
    /// Department name contains this text.
    pub department: Option<String>,
    /// Inclusive lower bound on the total amount.
    pub total_amount_min: Option<Decimal>,
    /// Inclusive upper bound on the total amount.
    pub total_amount_max: Option<Decimal>,
    /// Projects starting on or after this date (start year taken as January 1).
    pub from_date: Option<NaiveDate>,
    /// Projects ending on or before this date (end year taken as January 1).
    pub to_date: Option<NaiveDate>,
    /// Physical description or project name contains this text.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHeader {
    pub project_name: String,
    pub total_amount: Money,
    pub province: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub currency_type: String,
    pub description: String,
    pub duration: String,
    pub end_year: String,
    pub project_type: String,
    pub project_url: String,
    pub section: String,
    pub start_year: String,
    pub status: String,
}

pub type ProjectResponseItem = ResponseItem<ProjectHeader, ProjectDetail>;

impl ProjectResponseItem {
    /// Project a record into its header/detail pair.
    pub fn from_record(record: &ProjectRecord) -> QueryResult<Self> {
        Ok(Self {
            header: ProjectHeader {
                project_name: record.project_name.clone(),
                total_amount: Money::from_raw("MontoTotal", &record.total_amount)?,
                province: record.province.clone(),
                department: record.department.clone(),
            },
            detail: ProjectDetail {
                currency_type: record.currency_type.clone(),
                description: record.description.clone(),
                duration: record.duration_days.clone(),
                end_year: record.end_year.clone(),
                project_type: record.project_type.clone(),
                project_url: record.project_url.clone(),
                section: record.section.clone(),
                start_year: record.start_year.clone(),
                status: record.status.clone(),
            },
        })
    }
}

/// Sort keys accepted by project queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectSortKey {
    Project,
    TotalAmount,
    Department,
    #[default]
    Province,
}

impl SortKey for ProjectSortKey {
    type Item = ProjectResponseItem;

    const ALL: &'static [Self] = &[
        Self::Project,
        Self::TotalAmount,
        Self::Department,
        Self::Province,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::TotalAmount => "totalAmount",
            Self::Department => "department",
            Self::Province => "province",
        }
    }

    fn comparator(self) -> Comparator<ProjectResponseItem> {
        match self {
            Self::Project => by_project_name,
            Self::TotalAmount => by_total_amount,
            Self::Department => by_department,
            Self::Province => by_province,
        }
    }
}

fn by_project_name(a: &ProjectResponseItem, b: &ProjectResponseItem) -> Ordering {
    a.header.project_name.cmp(&b.header.project_name)
}

fn by_total_amount(a: &ProjectResponseItem, b: &ProjectResponseItem) -> Ordering {
    a.header.total_amount.value().cmp(&b.header.total_amount.value())
}

fn by_department(a: &ProjectResponseItem, b: &ProjectResponseItem) -> Ordering {
    a.header.department.cmp(&b.header.department)
}

fn by_province(a: &ProjectResponseItem, b: &ProjectResponseItem) -> Ordering {
    a.header.province.cmp(&b.header.province)
}

/// The projects dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projects;

impl Dataset for Projects {
    const NAME: &'static str = "projects";

    type Record = ProjectRecord;
    type Filter = ProjectFilter;
    type Item = ProjectResponseItem;
    type SortKey = ProjectSortKey;

    fn predicate(filter: &ProjectFilter) -> Predicate<'_, ProjectRecord> {
        Predicate::new()
            .text_contains(filter.province.as_deref(), province)
            .text_contains(filter.department.as_deref(), department)
            .decimal_range(
                "MontoTotal",
                filter.total_amount_min,
                filter.total_amount_max,
                total_amount,
            )
            .year_on_or_after("FechaInicioAnio", filter.from_date, start_year)
            .year_on_or_before("FechaFinAnio", filter.to_date, end_year)
            .any_text_contains(filter.description.as_deref(), vec![description, project_name])
    }

    fn project(record: &ProjectRecord) -> QueryResult<ProjectResponseItem> {
        ProjectResponseItem::from_record(record)
    }
}

fn province(r: &ProjectRecord) -> &str {
    &r.province
}

fn department(r: &ProjectRecord) -> &str {
    &r.department
}

fn total_amount(r: &ProjectRecord) -> &str {
    &r.total_amount
}

fn start_year(r: &ProjectRecord) -> &str {
    &r.start_year
}

fn end_year(r: &ProjectRecord) -> &str {
    &r.end_year
}

fn description(r: &ProjectRecord) -> &str {
    &r.description
}

fn project_name(r: &ProjectRecord) -> &str {
    &r.project_name
}
