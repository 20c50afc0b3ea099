//! Dataset-independent building blocks of the query pipeline.
//!
//! Every stage is a pure, in-memory transform over borrowed input:
//!
//! - [`normalize`]: case/accent folding for text constraints
//! - [`currency`]: exact decimal parsing and currency display formatting
//! - [`predicate`]: composable record predicates (AND of clauses)
//! - [`sort`]: stable ordering by a closed set of sort keys
//! - [`paginate()`]: page-count and window extraction
//!
//! ## Example: filter → sort → paginate
//!
//! ```rust
//! use public_info_query::processing::predicate::Predicate;
//! use public_info_query::processing::sort::{Comparator, SortDirection, SortKey, sort_items};
//! use public_info_query::processing::paginate;
//!
//! struct City {
//!     name: &'static str,
//! }
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
//! struct ByName;
//!
//! impl SortKey for ByName {
//!     type Item = &'static str;
//!     const ALL: &'static [Self] = &[ByName];
//!     fn name(self) -> &'static str {
//!         "name"
//!     }
//!     fn comparator(self) -> Comparator<&'static str> {
//!         |a, b| a.cmp(b)
//!     }
//! }
//!
//! fn city_name(c: &City) -> &str {
//!     c.name
//! }
//!
//! let cities = [
//!     City { name: "Córdoba" },
//!     City { name: "Rosario" },
//!     City { name: "Villa Carlos Paz" },
//!     City { name: "Corrientes" },
//! ];
//!
//! let predicate = Predicate::new().text_contains(Some("COR"), city_name);
//! let mut names: Vec<&'static str> = predicate
//!     .filter(&cities)
//!     .unwrap()
//!     .into_iter()
//!     .map(|c| c.name)
//!     .collect();
//!
//! sort_items(&mut names, ByName, SortDirection::Asc);
//! let page = paginate(names, 1, 10).unwrap();
//!
//! assert_eq!(page.items, vec!["Corrientes", "Córdoba"]);
//! assert_eq!(page.total_pages, 1);
//! ```

pub mod currency;
pub mod normalize;
pub mod paginate;
pub mod predicate;
pub mod sort;

pub use currency::{Money, NumberFormat, format_currency, parse_decimal, reparse_display};
pub use normalize::normalize;
pub use paginate::{page_count, paginate};
pub use predicate::Predicate;
pub use sort::{SortDirection, SortKey, sort_items};
