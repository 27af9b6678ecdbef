//! CSV export.
//!
//! Row layout is `date,category,amount,"description"`. The description is
//! always quoted; the other fields only when they need to be.

use super::importer::csv_error;
use super::models::ExportRow;
use crate::Expense;
use chrono::NaiveDate;
use csv::QuoteStyle;
use spendlog_core::{SpendlogError, SpendlogResult};
use std::path::Path;

pub const CSV_HEADER: &str = "Date,Category,Amount,Description";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Download name for an export made on `date`, e.g. `expenses-2024-03-01.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}

pub struct CsvExporter;

impl CsvExporter {
    /// Render expenses as CSV text, rows in input order, no trailing newline.
    pub fn encode(expenses: &[Expense]) -> SpendlogResult<String> {
        let rows: Vec<ExportRow> = expenses.iter().map(ExportRow::from).collect();
        Self::encode_rows(&rows)
    }

    pub fn encode_rows(rows: &[ExportRow]) -> SpendlogResult<String> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for row in rows {
            lines.push(Self::encode_row(row)?);
        }
        Ok(lines.join("\n"))
    }

    fn encode_row(row: &ExportRow) -> SpendlogResult<String> {
        let date = row.date.format("%Y-%m-%d").to_string();
        let amount = row.amount.to_string();
        let leading = write_record(
            &[date.as_str(), row.category.as_str(), amount.as_str()],
            QuoteStyle::Necessary,
        )?;
        let description = write_record(
            &[row.description.as_deref().unwrap_or("")],
            QuoteStyle::Always,
        )?;
        Ok(format!("{},{}", leading, description))
    }

    /// Write the export to `path`, returning the number of rows written.
    pub fn export_to_file(expenses: &[Expense], path: &Path) -> SpendlogResult<usize> {
        std::fs::write(path, Self::encode(expenses)?)?;
        tracing::info!("Exported {} expenses to {}", expenses.len(), path.display());
        Ok(expenses.len())
    }
}

/// One CSV record without its line terminator.
fn write_record(fields: &[&str], style: QuoteStyle) -> SpendlogResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(fields).map_err(csv_error)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    let mut record =
        String::from_utf8(bytes).map_err(|e| SpendlogError::Serialization(e.to_string()))?;
    record.pop();
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CsvImporter;
    use crate::{ExpenseId, NewExpense};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(amount: f64, category: &str, on: &str, description: Option<&str>) -> Expense {
        let mut input = NewExpense::new(amount, category, date(on));
        input.description = description.map(str::to_string);
        input.into_expense(ExpenseId::generate())
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(CsvExporter::encode(&[]).unwrap(), CSV_HEADER);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let expenses = vec![
            expense(50.5, "Groceries", "2024-03-01", Some("Weekly shop")),
            expense(20.0, "Food & Dining", "2024-02-14", None),
        ];
        let csv = CsvExporter::encode(&expenses).unwrap();

        assert_eq!(
            csv,
            "Date,Category,Amount,Description\n\
             2024-03-01,Groceries,50.5,\"Weekly shop\"\n\
             2024-02-14,Food & Dining,20,\"\""
        );
    }

    #[test]
    fn test_embedded_quotes_and_commas_are_escaped() {
        let expenses = vec![expense(12.0, "Other", "2024-03-01", Some("He said \"hi\", ok"))];
        let csv = CsvExporter::encode(&expenses).unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "2024-03-01,Other,12,\"He said \"\"hi\"\", ok\"");

        let decoded = CsvImporter::decode(&csv).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].description.as_deref(), Some("He said \"hi\", ok"));
    }

    #[test]
    fn test_category_with_comma_is_quoted() {
        let expenses = vec![expense(3.0, "Books, Magazines", "2024-03-01", None)];
        let csv = CsvExporter::encode(&expenses).unwrap();
        assert!(csv.ends_with("2024-03-01,\"Books, Magazines\",3,\"\""));
    }

    #[test]
    fn test_multiline_description_stays_one_field() {
        let expenses = vec![expense(7.0, "Other", "2024-03-01", Some("first\nsecond"))];
        let csv = CsvExporter::encode(&expenses).unwrap();
        assert!(csv.ends_with("2024-03-01,Other,7,\"first\nsecond\""));
    }

    #[test]
    fn test_round_trip() {
        let expenses = vec![
            expense(50.5, "Groceries", "2024-03-01", None),
            expense(0.1, "Bills & Utilities", "2023-11-30", Some("line one\nline two")),
            expense(1234.56, "Odd \"label\"", "2024-01-09", Some("commas, \"quotes\"")),
        ];
        let expected: Vec<ExportRow> = expenses.iter().map(ExportRow::from).collect();

        let decoded = CsvImporter::decode(&CsvExporter::encode(&expenses).unwrap()).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(date("2024-03-01")), "expenses-2024-03-01.csv");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let expenses = vec![expense(9.99, "Shopping", "2024-07-04", Some("Socks"))];

        let written = CsvExporter::export_to_file(&expenses, &path).unwrap();
        assert_eq!(written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(CSV_HEADER));
        assert!(content.contains("Socks"));
    }
}
