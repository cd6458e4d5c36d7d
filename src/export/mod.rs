//! Dataset export.
//!
//! Writes generated numbers to a spreadsheet as a single labeled text column.

pub mod xlsx;

pub use xlsx::XlsxExporter;

/// Column header for the exported numbers.
pub const COLUMN_HEADER: &str = "Mobile_Number";

/// Worksheet holding the exported numbers.
pub const SHEET_NAME: &str = "Mobile Numbers";
