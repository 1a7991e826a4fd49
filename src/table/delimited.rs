//! CSV reading and writing.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use tempfile::NamedTempFile;

use crate::error::Result;

use super::{persist, read_error, staging_file, write_error, Table, TableWriter};

/// Byte order mark Excel puts at the start of "CSV UTF-8" exports.
const BOM: char = '\u{feff}';

/// Read a CSV file whose first record is the header.
///
/// Records may have differing lengths; the pipeline pads or truncates them
/// against the header. Fields that are not valid UTF-8 are decoded as
/// Windows-1252, the encoding of Excel's plain "CSV" export.
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let mut records = reader.byte_records();
    let header = match records.next() {
        Some(record) => {
            let record = record.map_err(|e| read_error(path, e))?;
            decode_record(path, &record)
                .into_iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == 0 {
                        cell.trim_start_matches(BOM).to_string()
                    } else {
                        cell
                    }
                })
                .collect()
        }
        None => return Err(read_error(path, "no header row")),
    };

    let rows = records
        .map(|record| {
            record
                .map(|r| decode_record(path, &r))
                .map_err(|e| read_error(path, e))
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    tracing::debug!("Read {} data rows from {}", rows.len(), path.display());
    Ok(Table { header, rows })
}

fn decode_record(path: &Path, record: &ByteRecord) -> Vec<String> {
    let mut legacy = false;
    let cells: Vec<String> = record
        .iter()
        .map(|field| match std::str::from_utf8(field) {
            Ok(text) => text.to_string(),
            Err(_) => {
                legacy = true;
                WINDOWS_1252
                    .decode_without_bom_handling(field)
                    .0
                    .into_owned()
            }
        })
        .collect();

    if legacy {
        let line = record.position().map_or(0, |pos| pos.line());
        tracing::warn!(
            "{} line {}: not valid UTF-8, read as Windows-1252",
            path.display(),
            line
        );
    }
    cells
}

/// Streams rows into a staged CSV file.
pub struct CsvTableWriter {
    writer: csv::Writer<File>,
    staged: NamedTempFile,
    target: PathBuf,
}

impl CsvTableWriter {
    /// Stage a new CSV file that will replace `target` on finish.
    pub fn create(target: &Path) -> Result<Self> {
        let staged = staging_file(target)?;
        let file = staged.reopen().map_err(|e| write_error(target, e))?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
            staged,
            target: target.to_path_buf(),
        })
    }
}

impl TableWriter for CsvTableWriter {
    fn write_row(&mut self, cells: &[&str]) -> Result<()> {
        self.writer
            .write_record(cells)
            .map_err(|e| write_error(&self.target, e))
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let Self {
            writer,
            staged,
            target,
        } = *self;

        let file = writer
            .into_inner()
            .map_err(|e| write_error(&target, e.error()))?;
        file.sync_all().map_err(|e| write_error(&target, e))?;
        drop(file);

        persist(staged, &target)?;
        tracing::debug!("Wrote {}", target.display());
        Ok(())
    }
}
