//! The query pipeline: filter → project → sort → paginate.
//!
//! Most callers use [`query_projects`] / [`query_salaries`], or a [`QueryEngine`] when query
//! outcomes should be reported to a [`QueryObserver`].
//!
//! A query is a pure function of `(records, filter, request)`. Records are borrowed and never
//! modified, so one decoded dataset can serve concurrent queries. The pipeline is
//! all-or-nothing: the first parse failure aborts the query and no partial page is returned.

mod observability;

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::datasets::{
    ProjectFilter, ProjectRecord, ProjectResponseItem, ProjectSortKey, Projects, Salaries, SalaryFilter,
    SalaryRecord, SalaryResponseItem, SalarySortKey,
};
use crate::error::{QueryError, QueryResult};
use crate::processing::paginate::paginate;
use crate::processing::predicate::Predicate;
use crate::processing::sort::{SortKey, sort_items};
use crate::types::{PageRequest, PageResult};

pub use observability::{
    CompositeObserver, FileObserver, QueryContext, QueryEvent, QueryObserver, QueryOutcome, QuerySeverity,
    QueryStats, StdErrObserver,
};

/// A queryable dataset: its record, filter and projected item types, and how they connect.
pub trait Dataset {
    /// Name used in observer reports.
    const NAME: &'static str;

    type Record: 'static;
    type Filter;
    type Item;
    type SortKey: SortKey<Item = Self::Item>;

    /// Build the predicate for `filter`. Absent constraints contribute no clause.
    fn predicate(filter: &Self::Filter) -> Predicate<'_, Self::Record>;

    /// Project a surviving record into a response item.
    fn project(record: &Self::Record) -> QueryResult<Self::Item>;
}

/// Run one query over `records` without observation.
pub fn run_query<D: Dataset>(
    records: &[D::Record],
    filter: &D::Filter,
    request: &PageRequest<D::SortKey>,
) -> QueryResult<PageResult<D::Item>> {
    execute::<D>(records, filter, request).map(|(page, _)| page)
}

/// Query the projects dataset.
///
/// # Examples
///
/// ```rust
/// use public_info_query::datasets::{ProjectFilter, ProjectRecord, ProjectSortKey};
/// use public_info_query::processing::SortDirection;
/// use public_info_query::query::query_projects;
/// use public_info_query::types::PageRequest;
///
/// let records = vec![
///     ProjectRecord {
///         project_name: "Acueducto".to_string(),
///         total_amount: "1500000".to_string(),
///         province: "Santa Fe".to_string(),
///         ..Default::default()
///     },
///     ProjectRecord {
///         project_name: "Escuela 5".to_string(),
///         total_amount: "320000.75".to_string(),
///         province: "Jujuy".to_string(),
///         ..Default::default()
///     },
/// ];
///
/// let request = PageRequest::new(1, 10, ProjectSortKey::TotalAmount, SortDirection::Asc);
/// let page = query_projects(&records, &ProjectFilter::default(), &request).unwrap();
///
/// assert_eq!(page.total_pages, 1);
/// assert_eq!(page.items[0].header.total_amount.display(), "$ 320.000,75");
/// ```
pub fn query_projects(
    records: &[ProjectRecord],
    filter: &ProjectFilter,
    request: &PageRequest<ProjectSortKey>,
) -> QueryResult<PageResult<ProjectResponseItem>> {
    run_query::<Projects>(records, filter, request)
}

/// Query the salaries dataset.
pub fn query_salaries(
    records: &[SalaryRecord],
    filter: &SalaryFilter,
    request: &PageRequest<SalarySortKey>,
) -> QueryResult<PageResult<SalaryResponseItem>> {
    run_query::<Salaries>(records, filter, request)
}

/// Options controlling [`QueryEngine`] reporting.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct QueryOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn QueryObserver>>,
    /// Failures at or above this severity are reported as alerts.
    pub alert_at_or_above: QuerySeverity,
}

impl fmt::Debug for QueryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: QuerySeverity::Error,
        }
    }
}

/// Runs queries and reports each outcome to the configured observer.
///
/// When an observer is configured, every query produces one [`QueryEvent`]: completed with
/// [`QueryStats`], or failed with a [`QuerySeverity`] derived from the error and flagged as an
/// alert when that severity is >= [`QueryOptions::alert_at_or_above`].
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    opts: QueryOptions,
}

impl QueryEngine {
    pub fn new(opts: QueryOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.opts
    }

    /// Run one query against dataset `D`.
    pub fn run<D: Dataset>(
        &self,
        records: &[D::Record],
        filter: &D::Filter,
        request: &PageRequest<D::SortKey>,
    ) -> QueryResult<PageResult<D::Item>> {
        let result = execute::<D>(records, filter, request);
        if let Some(obs) = &self.opts.observer {
            let ctx = QueryContext {
                dataset: D::NAME,
                sort_key: request.sort_key.name(),
                direction: request.direction,
                page_number: request.page_number,
                page_size: request.page_size,
            };
            let outcome = match &result {
                Ok((_, stats)) => QueryOutcome::Completed(*stats),
                Err(error) => {
                    let severity = QuerySeverity::of(error);
                    QueryOutcome::Failed {
                        severity,
                        error,
                        alert: severity >= self.opts.alert_at_or_above,
                    }
                }
            };
            obs.observe(&QueryEvent { ctx: &ctx, outcome });
        }
        result.map(|(page, _)| page)
    }

    pub fn projects(
        &self,
        records: &[ProjectRecord],
        filter: &ProjectFilter,
        request: &PageRequest<ProjectSortKey>,
    ) -> QueryResult<PageResult<ProjectResponseItem>> {
        self.run::<Projects>(records, filter, request)
    }

    pub fn salaries(
        &self,
        records: &[SalaryRecord],
        filter: &SalaryFilter,
        request: &PageRequest<SalarySortKey>,
    ) -> QueryResult<PageResult<SalaryResponseItem>> {
        self.run::<Salaries>(records, filter, request)
    }
}

fn execute<D: Dataset>(
    records: &[D::Record],
    filter: &D::Filter,
    request: &PageRequest<D::SortKey>,
) -> QueryResult<(PageResult<D::Item>, QueryStats)> {
    let start = Instant::now();
    if request.page_size == 0 {
        return Err(QueryError::InvalidPageParameters {
            message: "page size must be greater than zero".to_string(),
        });
    }

    let matched = D::predicate(filter).filter(records)?;
    let records_matched = matched.len();

    let mut items = matched
        .into_iter()
        .map(D::project)
        .collect::<QueryResult<Vec<_>>>()?;
    sort_items(&mut items, request.sort_key, request.direction);

    let page = paginate(items, request.page_number, request.page_size)?;
    let stats = QueryStats {
        records_scanned: records.len(),
        records_matched,
        total_pages: page.total_pages,
        items_returned: page.items.len(),
        elapsed: start.elapsed(),
    };
    Ok((page, stats))
}
