//! The two published datasets: records, filters, header/detail projections and sort keys.
//!
//! Each dataset is a zero-sized marker type implementing [`crate::query::Dataset`]:
//!
//! - [`projects::Projects`]: public-works projects (default sort: province)
//! - [`salaries::Salaries`]: government salaries (default sort: year, then month)

pub mod projects;
pub mod salaries;

pub use projects::{
    ProjectDetail, ProjectFilter, ProjectHeader, ProjectRecord, ProjectResponseItem, ProjectSortKey, Projects,
};
pub use salaries::{
    Salaries, SalaryDetail, SalaryFilter, SalaryHeader, SalaryRecord, SalaryResponseItem, SalarySortKey,
};
