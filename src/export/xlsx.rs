//! XLSX workbook exporter.

use std::fs;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::info;

use super::{COLUMN_HEADER, SHEET_NAME};
use crate::error::{AppError, Result};

/// Data rows available below the header in one worksheet.
pub const MAX_DATA_ROWS: usize = 1_048_575;

const COLUMN_WIDTH: f64 = 15.0;
/// Excel "Text" number format; keeps leading zeros.
const TEXT_FORMAT: &str = "@";

/// Exporter writing numbers to an `.xlsx` workbook.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    /// Destination workbook path.
    path: PathBuf,
}

impl XlsxExporter {
    /// Create an exporter writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `numbers` under the header, one per row, as text cells.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `ExportFailure` if the numbers do not fit one worksheet or the
    /// file cannot be written.
    pub fn export(&self, numbers: &[String]) -> Result<PathBuf> {
        info!(count = numbers.len(), path = %self.path.display(), "Saving numbers to workbook");

        let mut workbook = build_workbook(numbers)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        workbook.save(&self.path)?;

        info!(path = %self.path.display(), "Workbook saved");
        Ok(self.path.clone())
    }
}

fn build_workbook(numbers: &[String]) -> Result<Workbook> {
    if numbers.len() > MAX_DATA_ROWS {
        return Err(AppError::ExportFailure(format!(
            "{} numbers exceed the worksheet limit of {MAX_DATA_ROWS} rows",
            numbers.len()
        )));
    }

    let header_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(12)
        .set_bold()
        .set_num_format(TEXT_FORMAT);
    let cell_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(11)
        .set_align(FormatAlign::Left)
        .set_num_format(TEXT_FORMAT);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_column_width(0, COLUMN_WIDTH)?;
    worksheet.set_column_format(0, &cell_format)?;
    worksheet.write_string_with_format(0, 0, COLUMN_HEADER, &header_format)?;

    for (row, number) in (1_u32..).zip(numbers) {
        worksheet.write_string_with_format(row, 0, number, &cell_format)?;
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::path::Path;

    use regex::Regex;
    use tempfile::TempDir;
    use zip::ZipArchive;

    use super::*;

    fn read_part(path: &Path, name: &str) -> String {
        let mut archive = ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
        let mut part = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut part)
            .unwrap();
        part
    }

    /// Shared-string text of the cell at `cell_ref`, failing if it is not a string cell.
    fn string_cell(sheet: &str, strings: &[String], cell_ref: &str) -> String {
        let cell = Regex::new(&format!(r#"<c r="{cell_ref}"([^>]*)>\s*<v>(\d+)</v>"#)).unwrap();
        let caps = cell
            .captures(sheet)
            .unwrap_or_else(|| panic!("cell {cell_ref} missing"));
        assert!(caps[1].contains(r#"t="s""#), "cell {cell_ref} is not text");
        let index: usize = caps[2].parse().unwrap();
        strings[index].clone()
    }

    #[test]
    fn test_export_reads_back_as_text_column() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.xlsx");
        let numbers = vec!["01900000001".to_string(), "00000000042".to_string()];

        XlsxExporter::new(&path).export(&numbers).unwrap();

        let workbook = read_part(&path, "xl/workbook.xml");
        assert!(workbook.contains(&format!(r#"name="{SHEET_NAME}""#)));

        let shared = read_part(&path, "xl/sharedStrings.xml");
        let strings: Vec<String> = Regex::new(r"<t[^>]*>([^<]*)</t>")
            .unwrap()
            .captures_iter(&shared)
            .map(|c| c[1].to_string())
            .collect();

        let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
        assert_eq!(string_cell(&sheet, &strings, "A1"), COLUMN_HEADER);
        assert_eq!(string_cell(&sheet, &strings, "A2"), "01900000001");
        assert_eq!(string_cell(&sheet, &strings, "A3"), "00000000042");
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("numbers.xlsx");
        let numbers = vec!["01900000001".to_string(), "01912345678".to_string()];

        let written = XlsxExporter::new(&path).export(&numbers).unwrap();
        assert_eq!(written, path);

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_export_empty_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        XlsxExporter::new(&path).export(&[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_into_missing_parent_fails_when_parent_is_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = XlsxExporter::new(blocker.join("numbers.xlsx"))
            .export(&["01900000001".to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::ExportFailure(_)));
    }
}
