//! CSV import.
//!
//! Reads files produced by CsvExporter back into rows.

use super::exporter::CSV_HEADER;
use super::models::ExportRow;
use chrono::NaiveDate;
use spendlog_core::{SpendlogError, SpendlogResult};

pub struct CsvImporter;

impl CsvImporter {
    /// Parse CSV text with the export header into rows.
    ///
    /// An empty description cell is read as no description.
    pub fn decode(text: &str) -> SpendlogResult<Vec<ExportRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(csv_error)?;
        let expected: Vec<&str> = CSV_HEADER.split(',').collect();
        if headers.iter().collect::<Vec<_>>() != expected {
            return Err(SpendlogError::Serialization(format!(
                "unexpected CSV header, expected '{}'",
                CSV_HEADER
            )));
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(csv_error)?;
            // header is line 1
            let line = index + 2;
            rows.push(Self::decode_record(&record, line)?);
        }

        tracing::debug!("Decoded {} CSV rows", rows.len());
        Ok(rows)
    }

    fn decode_record(record: &csv::StringRecord, line: usize) -> SpendlogResult<ExportRow> {
        let field = |i: usize| record.get(i).unwrap_or_default();

        let date = NaiveDate::parse_from_str(field(0), "%Y-%m-%d").map_err(|e| {
            SpendlogError::Serialization(format!("line {}: invalid date '{}': {}", line, field(0), e))
        })?;
        let amount: f64 = field(2).parse().map_err(|e| {
            SpendlogError::Serialization(format!(
                "line {}: invalid amount '{}': {}",
                line,
                field(2),
                e
            ))
        })?;
        let description = Some(field(3).to_string()).filter(|d| !d.is_empty());

        Ok(ExportRow {
            date,
            category: field(1).to_string(),
            amount,
            description,
        })
    }
}

pub(super) fn csv_error(e: csv::Error) -> SpendlogError {
    SpendlogError::Serialization(e.to_string())
}
