//! Tabular input and output.
//!
//! Voucher sheets arrive as CSV or as Excel workbooks; the format is picked
//! from the file extension. Inputs are read whole into a [`Table`]. Outputs
//! are streamed through a [`TableWriter`] into a temporary file next to the
//! destination, which replaces the destination only when
//! [`TableWriter::finish`] succeeds. A writer dropped before `finish`
//! leaves nothing behind.
//!
//! - [`delimited`] - CSV text
//! - [`workbook`] - first worksheet of an Excel workbook

pub mod delimited;
pub mod workbook;

use std::fmt;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, VoucherError};

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values
    Csv,
    /// Excel Open XML workbook
    Xlsx,
}

impl TableFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") => Ok(Self::Xlsx),
            _ => Err(VoucherError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Xlsx => write!(f, "XLSX"),
        }
    }
}

/// A table read into memory: a header row and the data rows below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Row sink for an output table.
pub trait TableWriter {
    /// Append one row. Cells must follow the header given at creation.
    fn write_row(&mut self, cells: &[&str]) -> Result<()>;

    /// Flush everything and move the finished file into place.
    fn finish(self: Box<Self>) -> Result<()>;
}

/// Read the table at `path`, choosing the reader by extension.
pub fn read_table(path: &Path) -> Result<Table> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => delimited::read_csv(path),
        TableFormat::Xlsx => workbook::read_xlsx(path),
    }
}

/// Create a writer for `path` and write `header` as its first row.
pub fn create_writer(path: &Path, header: &[String]) -> Result<Box<dyn TableWriter>> {
    let mut writer: Box<dyn TableWriter> = match TableFormat::from_path(path)? {
        TableFormat::Csv => Box::new(delimited::CsvTableWriter::create(path)?),
        TableFormat::Xlsx => Box::new(workbook::XlsxTableWriter::create(path)?),
    };
    let cells: Vec<&str> = header.iter().map(String::as_str).collect();
    writer.write_row(&cells)?;
    Ok(writer)
}

/// Create a temporary file in the directory that will hold `target`.
pub(crate) fn staging_file(target: &Path) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tempfile::Builder::new()
        .prefix(".voucherkit-")
        .suffix(".tmp")
        .tempfile_in(&dir)
        .map_err(|e| write_error(target, e))
}

/// Atomically move a finished temporary file over `target`.
pub(crate) fn persist(staged: NamedTempFile, target: &Path) -> Result<()> {
    staged
        .persist(target)
        .map(|_| ())
        .map_err(|e| write_error(target, e.error))
}

pub(crate) fn read_error(path: &Path, err: impl fmt::Display) -> VoucherError {
    VoucherError::TableRead {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

pub(crate) fn write_error(path: &Path, err: impl fmt::Display) -> VoucherError {
    VoucherError::TableWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(TableFormat::from_path(Path::new("a.csv")).unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path(Path::new("dir/A.XLSX")).unwrap(), TableFormat::Xlsx);
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["a.xls", "a.ods", "a", "a.csv.bak"] {
            let err = TableFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, VoucherError::UnsupportedFormat { .. }), "{}", name);
        }
    }

    #[test]
    fn dotted_file_names_use_last_extension() {
        let path = Path::new("vouchers.2024.final.csv");
        assert_eq!(TableFormat::from_path(path).unwrap(), TableFormat::Csv);
    }

    #[test]
    fn format_display() {
        assert_eq!(TableFormat::Csv.to_string(), "CSV");
        assert_eq!(TableFormat::Xlsx.to_string(), "XLSX");
    }

    #[test]
    fn dropped_writer_leaves_no_output() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.csv");
        {
            let mut writer = create_writer(&target, &["a".to_string()]).unwrap();
            writer.write_row(&["1"]).unwrap();
        }
        assert!(!target.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn csv_round_trip_through_writer() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.csv");
        let header = vec!["a".to_string(), "b".to_string()];

        let mut writer = create_writer(&target, &header).unwrap();
        writer.write_row(&["1", "x, y"]).unwrap();
        writer.finish().unwrap();

        let table = read_table(&target).unwrap();
        assert_eq!(table.header, header);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "x, y".to_string()]]);
    }
}
