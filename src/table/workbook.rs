//! Excel workbook reading and writing.
//!
//! Only the first worksheet is read. Every cell is turned into text the way
//! it would appear in a CSV export: integral numbers lose their `.0`, empty
//! cells become `""` and date cells become ISO dates.

use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, ExcelDateTime, Reader, Xlsx};
use chrono::Timelike;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::Result;

use super::{persist, read_error, staging_file, write_error, Table, TableWriter};

/// Read the first worksheet of an `.xlsx` workbook.
pub fn read_xlsx(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| read_error(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| read_error(path, "workbook has no worksheets"))?
        .map_err(|e| read_error(path, e))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());

    let mut header = rows
        .next()
        .ok_or_else(|| read_error(path, "no header row"))?;
    // Formatted-but-empty cells to the right of the header widen the range.
    while header.last().is_some_and(|name| name.is_empty()) {
        header.pop();
    }

    let rows: Vec<Vec<String>> = rows.collect();
    tracing::debug!("Read {} data rows from {}", rows.len(), path.display());
    Ok(Table { header, rows })
}

/// Render one cell as text.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTime(dt) => date_text(dt),
        Data::DateTimeIso(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `%Y-%m-%d`, with the time of day appended when it is not midnight.
fn date_text(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.to_string(),
    }
}

/// Collects rows into a worksheet and saves the workbook on finish.
pub struct XlsxTableWriter {
    worksheet: Worksheet,
    next_row: u32,
    target: PathBuf,
}

impl XlsxTableWriter {
    /// Start a workbook that will replace `target` on finish.
    pub fn create(target: &Path) -> Result<Self> {
        Ok(Self {
            worksheet: Worksheet::new(),
            next_row: 0,
            target: target.to_path_buf(),
        })
    }
}

impl TableWriter for XlsxTableWriter {
    fn write_row(&mut self, cells: &[&str]) -> Result<()> {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            let col = u16::try_from(col)
                .map_err(|_| write_error(&self.target, "too many columns for a worksheet"))?;
            self.worksheet
                .write_string(self.next_row, col, *cell)
                .map_err(|e| write_error(&self.target, e))?;
        }
        self.next_row += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let Self {
            worksheet, target, ..
        } = *self;

        let mut workbook = Workbook::new();
        workbook.push_worksheet(worksheet);

        let staged = staging_file(&target)?;
        workbook
            .save(staged.path())
            .map_err(|e| write_error(&target, e))?;
        persist(staged, &target)?;
        tracing::debug!("Wrote {}", target.display());
        Ok(())
    }
}
