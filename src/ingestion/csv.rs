//! CSV ingestion into typed dataset records.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::datasets::{ProjectRecord, SalaryRecord};
use crate::error::{IngestionError, IngestionResult};

/// A record type that can be read from a headed CSV file.
pub trait CsvRecord: DeserializeOwned {
    /// Header names that must be present (order can differ, extra columns are ignored).
    const COLUMNS: &'static [&'static str];
}

impl CsvRecord for ProjectRecord {
    const COLUMNS: &'static [&'static str] = &[
        "NombreObra",
        "MontoTotal",
        "NombreProvincia",
        "NombreDepto",
        "TipoMoneda",
        "DescripicionFisica",
        "DuracionObrasDias",
        "FechaInicioAnio",
        "FechaFinAnio",
        "TipoProyecto",
        "Url_perfil_obra",
        "SectorNombre",
        "EtapaObra",
    ];
}

impl CsvRecord for SalaryRecord {
    const COLUMNS: &'static [&'static str] = &[
        "Nombre",
        "Apellido",
        "Asignacion_Mensual",
        "NumMes",
        "Mes",
        "Ano",
        "Cargo",
        "Juridiccion",
        "NumDocumento",
    ];
}

/// Options for reading delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Trim surrounding whitespace from headers and values.
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvOptions {
    /// A reader builder configured with these options (headers required).
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(true).delimiter(self.delimiter);
        if self.trim {
            builder.trim(csv::Trim::All);
        }
        builder
    }
}

/// Ingest a UTF-8 CSV file into records.
///
/// Rules:
///
/// - The file must have a header row.
/// - Headers must contain every column in [`CsvRecord::COLUMNS`] (order can differ).
/// - Values are kept as text; numeric columns are validated later, by the queries that use them.
pub fn ingest_csv_from_path<T: CsvRecord>(
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> IngestionResult<Vec<T>> {
    let mut rdr = options.reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest records from an existing CSV reader.
pub fn ingest_csv_from_reader<T: CsvRecord, R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<T>> {
    let headers = rdr.headers()?.clone();

    let missing: Vec<&str> = T::COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if let Some(first) = missing.first() {
        return Err(IngestionError::SchemaMismatch {
            message: format!(
                "missing required column '{first}' ({} missing in total). headers={:?}",
                missing.len(),
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<T>() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{CsvOptions, CsvRecord, ingest_csv_from_reader};
    use crate::datasets::SalaryRecord;
    use crate::error::IngestionError;

    fn reader(input: &str, options: CsvOptions) -> csv::Reader<&[u8]> {
        options.reader_builder().from_reader(input.as_bytes())
    }

    #[test]
    fn reads_semicolon_delimited_salaries() {
        let input = "Apellido;Nombre;Asignacion_Mensual;NumMes;Mes;Ano;Cargo;Juridiccion;NumDocumento\n\
                     Pérez ; Ana ;150000.50;3;Marzo;2023;Directora;Economía;20123456\n";
        let opts = CsvOptions {
            delimiter: b';',
            ..Default::default()
        };
        let records: Vec<SalaryRecord> = ingest_csv_from_reader(&mut reader(input, opts)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].last_name, "Pérez");
        assert_eq!(records[0].first_name, "Ana");
        assert_eq!(records[0].monthly_wage, "150000.50");
        assert_eq!(records[0].section, "Economía");
    }

    #[test]
    fn lists_the_first_missing_column() {
        let input = "Nombre,Apellido\nAna,Paz\n";
        let err = ingest_csv_from_reader::<SalaryRecord, _>(&mut reader(input, CsvOptions::default()))
            .unwrap_err();
        match err {
            IngestionError::SchemaMismatch { message } => {
                assert!(message.contains("missing required column 'Asignacion_Mensual'"));
                assert!(message.contains(&format!("({} missing", SalaryRecord::COLUMNS.len() - 2)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_rows_are_csv_errors() {
        let input = "Nombre,Apellido,Asignacion_Mensual,NumMes,Mes,Ano,Cargo,Juridiccion,NumDocumento\n\
                     Ana,Paz,1\n";
        let err = ingest_csv_from_reader::<SalaryRecord, _>(&mut reader(input, CsvOptions::default()))
            .unwrap_err();
        assert!(matches!(err, IngestionError::Csv(_)));
    }
}
