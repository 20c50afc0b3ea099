//! Query outcome reporting.
//!
//! [`QueryEngine`](super::QueryEngine) emits exactly one [`QueryEvent`] per query. The event's
//! `Display` form is the log line written by every built-in observer, e.g.
//!
//! ```text
//! ok dataset=salaries sort=name dir=asc page=1/2 size=1 scanned=2 matched=2 returned=1 elapsed=41µs
//! alert severity=error dataset=projects sort=totalAmount dir=desc page=1 size=2 err=failed to parse ...
//! ```

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use crate::error::QueryError;
use crate::processing::sort::SortDirection;

/// How bad a failed query is. Ordered, so it can serve as an alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuerySeverity {
    /// The request could not describe a page (e.g. page size 0).
    Warning,
    /// The data could not be read (e.g. an unparsable amount or year).
    Error,
}

impl QuerySeverity {
    pub fn of(error: &QueryError) -> Self {
        match error {
            QueryError::InvalidPageParameters { .. } => Self::Warning,
            QueryError::Parse { .. } => Self::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for QuerySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What was asked: dataset and resolved page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    /// Dataset name (`"projects"`, `"salaries"`).
    pub dataset: &'static str,
    /// Resolved sort key name.
    pub sort_key: &'static str,
    pub direction: SortDirection,
    pub page_number: usize,
    pub page_size: usize,
}

/// Counters for a completed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    /// Records the predicate was evaluated against.
    pub records_scanned: usize,
    /// Records that satisfied the filter.
    pub records_matched: usize,
    pub total_pages: usize,
    /// Items on the returned page.
    pub items_returned: usize,
    pub elapsed: Duration,
}

/// How a query ended.
#[derive(Debug, Clone, Copy)]
pub enum QueryOutcome<'a> {
    Completed(QueryStats),
    Failed {
        severity: QuerySeverity,
        error: &'a QueryError,
        /// `severity` met the engine's alert threshold.
        alert: bool,
    },
}

/// One finished query, as reported to a [`QueryObserver`].
#[derive(Debug, Clone, Copy)]
pub struct QueryEvent<'a> {
    pub ctx: &'a QueryContext,
    pub outcome: QueryOutcome<'a>,
}

impl QueryEvent<'_> {
    pub fn is_alert(&self) -> bool {
        matches!(self.outcome, QueryOutcome::Failed { alert: true, .. })
    }
}

impl fmt::Display for QueryEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.ctx;
        match self.outcome {
            QueryOutcome::Completed(stats) => write!(
                f,
                "ok dataset={} sort={} dir={} page={}/{} size={} scanned={} matched={} returned={} elapsed={:?}",
                ctx.dataset,
                ctx.sort_key,
                ctx.direction,
                ctx.page_number,
                stats.total_pages,
                ctx.page_size,
                stats.records_scanned,
                stats.records_matched,
                stats.items_returned,
                stats.elapsed
            ),
            QueryOutcome::Failed {
                severity,
                error,
                alert,
            } => write!(
                f,
                "{} severity={} dataset={} sort={} dir={} page={} size={} err={}",
                if alert { "alert" } else { "fail" },
                severity,
                ctx.dataset,
                ctx.sort_key,
                ctx.direction,
                ctx.page_number,
                ctx.page_size,
                error
            ),
        }
    }
}

/// Receives one event per query run through a [`QueryEngine`](super::QueryEngine).
pub trait QueryObserver: Send + Sync {
    fn observe(&self, event: &QueryEvent<'_>);
}

/// Forwards each event to several observers, in order.
#[derive(Default)]
pub struct CompositeObserver(Vec<Arc<dyn QueryObserver>>);

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn QueryObserver>>) -> Self {
        Self(observers)
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompositeObserver").field(&self.0.len()).finish()
    }
}

impl QueryObserver for CompositeObserver {
    fn observe(&self, event: &QueryEvent<'_>) {
        self.0.iter().for_each(|o| o.observe(event));
    }
}

/// Writes `[query] <event>` lines to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl QueryObserver for StdErrObserver {
    fn observe(&self, event: &QueryEvent<'_>) {
        eprintln!("[query] {event}");
    }
}

/// Appends `<rfc3339 timestamp> <event>` lines to a log file.
#[derive(Debug)]
pub struct FileObserver {
    file: Mutex<File>,
}

impl FileObserver {
    /// Open `path` for appending, creating it if needed.
    ///
    /// Only opening can fail; later write errors are dropped so logging never fails a query.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl QueryObserver for FileObserver {
    fn observe(&self, event: &QueryEvent<'_>) {
        let line = format!(
            "{} {event}\n",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        );
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
        }
    }
}
