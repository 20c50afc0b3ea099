//! `public-info-query` answers paged, filtered, sorted queries over two published open-data
//! datasets: public-works **projects** and government **salaries**.
//!
//! A query takes a slice of decoded records, a dataset filter and a [`types::PageRequest`], and
//! returns a [`types::PageResult`]: one page of header/detail response items plus the total page
//! count.
//!
//! ## Pipeline
//!
//! 1. **Filter**: every present constraint of the filter must hold (text constraints ignore case
//!    and accents; amount ranges are inclusive and exact; year ranges compare January 1 of the
//!    record's year).
//! 2. **Project**: each surviving record becomes a header/detail pair; amounts are formatted as
//!    `$ 1.234.567,89` while keeping their exact value for sorting.
//! 3. **Sort**: stable ordering by a closed, per-dataset set of keys; unknown key names fall back
//!    to the dataset default, and anything but `"asc"` sorts descending.
//! 4. **Paginate**: `ceil(matched / page_size)` pages; out-of-range page numbers clamp to the
//!    nearest valid page.
//!
//! ## Quick example
//!
//! ```rust
//! use public_info_query::datasets::{SalaryFilter, SalaryRecord, SalarySortKey};
//! use public_info_query::query::query_salaries;
//! use public_info_query::types::PageRequest;
//!
//! fn salary(last: &str, wage: &str) -> SalaryRecord {
//!     SalaryRecord {
//!         first_name: "Ana".to_string(),
//!         last_name: last.to_string(),
//!         monthly_wage: wage.to_string(),
//!         month_num: "3".to_string(),
//!         month: "Marzo".to_string(),
//!         year: "2023".to_string(),
//!         position: "Analista".to_string(),
//!         section: "Hacienda".to_string(),
//!         document_number: "20111222".to_string(),
//!     }
//! }
//!
//! # fn main() -> Result<(), public_info_query::QueryError> {
//! let records = vec![salary("Perez", "150000.50"), salary("Alvarez", "200000.00")];
//!
//! // Raw transport parameters: page, size, sort key name, direction.
//! let request = PageRequest::<SalarySortKey>::from_params(1, 1, Some("name"), Some("asc"))?;
//! let page = query_salaries(&records, &SalaryFilter::default(), &request)?;
//!
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.items[0].header.full_name, "Alvarez, Ana");
//! assert_eq!(page.items[0].header.monthly_wage.display(), "$ 200.000,00");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`query`]: pipeline entrypoints, [`query::QueryEngine`] and observers
//! - [`datasets`]: project and salary records, filters, projections and sort keys
//! - [`processing`]: dataset-independent stages (normalize, currency, predicate, sort, paginate)
//! - [`ingestion`]: CSV files → typed records
//! - [`types`]: page request/result types
//! - [`error`]: error types used across the crate

pub mod datasets;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod query;
pub mod types;

pub use error::{IngestionError, IngestionResult, QueryError, QueryResult};
