//! CSV import/export functionality.
//!
//! Turns an expense list into the spreadsheet-friendly CSV download and reads
//! such files back.

pub mod exporter;
pub mod importer;
pub mod models;

pub use exporter::{export_filename, CsvExporter, CSV_HEADER, CSV_MIME_TYPE};
pub use importer::CsvImporter;
pub use models::ExportRow;
