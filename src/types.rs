//! Request and response types shared by every dataset.
//!
//! Dataset-specific records, filters and projections live in [`crate::datasets`].

use serde::Serialize;

use crate::error::{QueryError, QueryResult};
use crate::processing::sort::{SortDirection, SortKey};

/// Paging and ordering parameters for one query.
///
/// Build one with [`PageRequest::new`] (already-typed values) or [`PageRequest::from_params`]
/// (raw transport parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<K> {
    /// 1-based page number. Values below 1 behave like 1.
    pub page_number: usize,
    /// Items per page. Must be greater than zero.
    pub page_size: usize,
    pub sort_key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> PageRequest<K> {
    pub fn new(page_number: usize, page_size: usize, sort_key: K, direction: SortDirection) -> Self {
        Self {
            page_number,
            page_size,
            sort_key,
            direction,
        }
    }

    /// Build a request from raw parameters as a transport receives them.
    ///
    /// - `page < 1` becomes page 1.
    /// - `size <= 0` is rejected with [`QueryError::InvalidPageParameters`].
    /// - An unknown or missing `sort_key` name resolves to the dataset's default key.
    /// - `direction` is ascending only for `"asc"`; otherwise descending.
    pub fn from_params(
        page: i64,
        size: i64,
        sort_key: Option<&str>,
        direction: Option<&str>,
    ) -> QueryResult<Self> {
        if size <= 0 {
            return Err(QueryError::InvalidPageParameters {
                message: format!("page size must be greater than zero (got {size})"),
            });
        }
        let page_size = usize::try_from(size).map_err(|_| QueryError::InvalidPageParameters {
            message: format!("page size {size} does not fit in memory"),
        })?;
        let page_number = usize::try_from(page.max(1)).unwrap_or(usize::MAX);

        Ok(Self {
            page_number,
            page_size,
            sort_key: sort_key.map(K::from_name).unwrap_or_default(),
            direction: SortDirection::parse(direction),
        })
    }
}

/// A header/detail projection of one record.
///
/// Both halves are built together from the same record, so they always describe the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem<H, D> {
    pub header: H,
    pub detail: D,
}

/// One page of a query's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    /// Items on the requested page, in sort order (at most `page_size`).
    pub items: Vec<T>,
    /// Number of pages the filtered set spans (0 when nothing matched).
    #[serde(rename = "pages")]
    pub total_pages: usize,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PageRequest, PageResult};
    use crate::datasets::salaries::SalarySortKey;
    use crate::error::QueryError;
    use crate::processing::sort::SortDirection;

    #[test]
    fn from_params_clamps_page_and_resolves_key() {
        let req = PageRequest::<SalarySortKey>::from_params(-3, 20, Some("monthlyWage"), Some("asc"))
            .unwrap();
        assert_eq!(req.page_number, 1);
        assert_eq!(req.page_size, 20);
        assert_eq!(req.sort_key, SalarySortKey::MonthlyWage);
        assert_eq!(req.direction, SortDirection::Asc);
    }

    #[test]
    fn from_params_defaults_unknown_key_and_direction() {
        let req = PageRequest::<SalarySortKey>::from_params(2, 5, Some("wage??"), Some("up")).unwrap();
        assert_eq!(req.sort_key, SalarySortKey::Year);
        assert_eq!(req.direction, SortDirection::Desc);

        let req = PageRequest::<SalarySortKey>::from_params(2, 5, None, None).unwrap();
        assert_eq!(req.sort_key, SalarySortKey::Year);
        assert_eq!(req.direction, SortDirection::Desc);
    }

    #[test]
    fn from_params_requires_exact_key_and_direction() {
        let req = PageRequest::<SalarySortKey>::from_params(1, 5, Some(" name"), Some("ASC")).unwrap();
        assert_eq!(req.sort_key, SalarySortKey::Year);
        assert_eq!(req.direction, SortDirection::Desc);

        let req = PageRequest::<SalarySortKey>::from_params(1, 5, Some("name"), Some(" asc")).unwrap();
        assert_eq!(req.sort_key, SalarySortKey::Name);
        assert_eq!(req.direction, SortDirection::Desc);
    }

    #[test]
    fn from_params_rejects_non_positive_size() {
        for size in [0, -1] {
            let err = PageRequest::<SalarySortKey>::from_params(1, size, None, None).unwrap_err();
            assert!(matches!(err, QueryError::InvalidPageParameters { .. }));
        }
    }

    #[test]
    fn page_result_serializes_pages_field() {
        let page = PageResult {
            items: vec![1, 2],
            total_pages: 4,
        };
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"items":[1,2],"pages":4}"#
        );
    }
}
