//! Reading published dataset files into typed records.
//!
//! Only already-decoded UTF-8 text is accepted; character-set detection is the caller's concern.
//!
//! - [`csv::ingest_csv_from_path`]: headed CSV file → `Vec<ProjectRecord>` / `Vec<SalaryRecord>`
//! - [`csv::ingest_csv_from_reader`]: same, from a caller-configured `csv::Reader`

pub mod csv;

pub use self::csv::{CsvOptions, CsvRecord, ingest_csv_from_path, ingest_csv_from_reader};
