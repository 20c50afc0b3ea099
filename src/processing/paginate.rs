//! Page-window extraction.

use crate::error::{QueryError, QueryResult};
use crate::types::PageResult;

/// Number of pages needed to show `count` items, `page_size` per page (0 items → 0 pages).
///
/// # Panics
///
/// Panics if `page_size == 0`; [`paginate`] rejects that case before calling this.
pub fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Extract one page from an ordered sequence.
///
/// - `page_number` is 1-based. Values below 1 are treated as 1; values past the last page are
///   clamped to the last page, so a non-empty sequence never yields an empty window.
/// - `page_size == 0` is rejected with [`QueryError::InvalidPageParameters`].
pub fn paginate<T>(items: Vec<T>, page_number: usize, page_size: usize) -> QueryResult<PageResult<T>> {
    if page_size == 0 {
        return Err(QueryError::InvalidPageParameters {
            message: "page size must be greater than zero".to_string(),
        });
    }

    let total_pages = page_count(items.len(), page_size);
    let effective_page = if total_pages == 0 {
        1
    } else {
        page_number.clamp(1, total_pages)
    };
    let skip = (effective_page - 1) * page_size;

    let items = items.into_iter().skip(skip).take(page_size).collect();
    Ok(PageResult { items, total_pages })
}

#[cfg(test)]
mod tests {
    use super::{page_count, paginate};
    use crate::error::QueryError;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(7, 1), 7);
    }

    #[test]
    fn extracts_requested_window() {
        let page = paginate((1..=10).collect::<Vec<i32>>(), 2, 4).unwrap();
        assert_eq!(page.items, vec![5, 6, 7, 8]);
        assert_eq!(page.total_pages, 3);

        let last = paginate((1..=10).collect::<Vec<i32>>(), 3, 4).unwrap();
        assert_eq!(last.items, vec![9, 10]);
    }

    #[test]
    fn empty_input_has_zero_pages_and_no_items() {
        let page = paginate(Vec::<u8>::new(), 1, 5).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);

        let far = paginate(Vec::<u8>::new(), 42, 5).unwrap();
        assert!(far.items.is_empty());
        assert_eq!(far.total_pages, 0);
    }

    #[test]
    fn page_past_the_end_clamps_to_last_page() {
        let page = paginate((1..=10).collect::<Vec<i32>>(), 1_000, 4).unwrap();
        assert_eq!(page.items, vec![9, 10]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn page_zero_clamps_to_first_page() {
        let page = paginate((1..=10).collect::<Vec<i32>>(), 0, 4).unwrap();
        assert_eq!(page.items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = paginate(vec![1, 2, 3], 1, 0).unwrap_err();
        assert!(matches!(err, QueryError::InvalidPageParameters { .. }));
    }

    #[test]
    fn all_pages_cover_the_sequence_exactly_once() {
        let source: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let total = paginate(source.clone(), 1, size).unwrap().total_pages;
            let mut seen = Vec::new();
            for page in 1..=total {
                let window = paginate(source.clone(), page, size).unwrap();
                assert!(window.items.len() <= size);
                seen.extend(window.items);
            }
            assert_eq!(seen, source, "page size {size}");
        }
    }
}
