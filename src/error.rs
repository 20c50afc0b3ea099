use thiserror::Error;

/// Convenience result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by the query pipeline.
///
/// A query either fully succeeds or fails with one of these; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A numeric or year field could not be parsed while filtering, projecting or sorting.
    #[error("failed to parse field '{field}': {message} (raw='{raw}')")]
    Parse {
        field: String,
        raw: String,
        message: String,
    },

    /// The page parameters cannot describe a window (page size must be > 0).
    #[error("invalid page parameters: {message}")]
    InvalidPageParameters { message: String },
}

impl QueryError {
    pub(crate) fn parse(field: &str, raw: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            field: field.to_owned(),
            raw: raw.to_owned(),
            message: message.into(),
        }
    }
}

/// Error type returned by the CSV ingestion adapter.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV, or a row that cannot be deserialized into a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a column the record type requires.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
