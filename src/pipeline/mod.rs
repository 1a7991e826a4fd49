//! Sheet processing pipeline.
//!
//! A run reads the input table, checks its header, drops the template's
//! example row, then for every remaining row runs the optional web lookups
//! followed by the field derivations and writes the row out. The output file
//! only appears once every row has been written.

pub mod summary;

pub use summary::{RowFailure, RunSummary};

use std::path::Path;

use indicatif::ProgressBar;

use crate::columns;
use crate::config::VoucherConfig;
use crate::derive::derive_all;
use crate::enrich::Enricher;
use crate::error::{Result, VoucherError};
use crate::record::Record;
use crate::table::{self, Table, TableFormat};

/// Processes one voucher sheet into a Darwin Core ready sheet.
#[derive(Debug, Clone)]
pub struct Pipeline {
    enricher: Option<Enricher>,
    skip_example_row: bool,
}

impl Pipeline {
    /// Build a pipeline from configuration.
    ///
    /// The HTTP client is only created when enrichment is enabled.
    pub fn new(config: &VoucherConfig) -> Result<Self> {
        let enricher = if config.enrich {
            Some(Enricher::from_config(config)?)
        } else {
            None
        };
        Ok(Self::with_enricher(enricher, config.skip_example_row))
    }

    /// Build a pipeline around an existing enricher (or none).
    pub fn with_enricher(enricher: Option<Enricher>, skip_example_row: bool) -> Self {
        Self {
            enricher,
            skip_example_row,
        }
    }

    /// Whether rows will be sent to the web services.
    pub fn enriches(&self) -> bool {
        self.enricher.is_some()
    }

    /// Read `input` and check that its header has every column this run needs.
    pub fn load(&self, input: &Path) -> Result<Table> {
        let table = table::read_table(input)?;
        let missing = columns::missing_columns(&table.header, self.enriches());
        if !missing.is_empty() {
            return Err(VoucherError::MissingColumns { missing });
        }
        Ok(table)
    }

    /// Number of rows [`Pipeline::process`] will write for `table`.
    pub fn rows_to_process(&self, table: &Table) -> usize {
        table.rows.len().saturating_sub(self.example_rows(table))
    }

    /// Reject an output path with an unsupported extension.
    ///
    /// Called before any row reaches the web services.
    pub fn check_output(&self, output: &Path) -> Result<TableFormat> {
        TableFormat::from_path(output)
    }

    /// Run the whole pipeline from `input` to `output`.
    pub fn run(&self, input: &Path, output: &Path, progress: &ProgressBar) -> Result<RunSummary> {
        self.check_output(output)?;
        let table = self.load(input)?;
        progress.set_length(self.rows_to_process(&table) as u64);
        self.process(table, output, progress)
    }

    /// Process an already loaded table into `output`.
    pub fn process(&self, table: Table, output: &Path, progress: &ProgressBar) -> Result<RunSummary> {
        let Table { header, rows } = table;
        let out_header = columns::output_header(&header, self.enriches());
        let mut writer = table::create_writer(output, &out_header)?;

        let mut summary = RunSummary {
            rows_read: rows.len(),
            example_rows_skipped: self.example_rows_in(rows.len()),
            enriched: self.enriches(),
            ..RunSummary::default()
        };
        if summary.example_rows_skipped > 0 {
            tracing::debug!("Skipping example row");
        }

        for (index, cells) in rows.into_iter().enumerate().skip(summary.example_rows_skipped) {
            // Header is line 1, so data row 0 is line 2.
            let line = index + 2;
            let mut record = Record::from_row(&header, cells);
            tracing::debug!("Processing row {} ({})", line, record.get(columns::CATALOG_NUMBER));

            if let Some(enricher) = &self.enricher {
                for err in enricher.enrich(&mut record)? {
                    let failure = RowFailure::new(line, record.get(columns::CATALOG_NUMBER), &err);
                    tracing::warn!(
                        "Row {} ({}): {}",
                        failure.row,
                        failure.catalog_number,
                        err
                    );
                    summary.failures.push(failure);
                }
            }

            derive_all(&mut record);
            writer.write_row(&record.project(&out_header))?;
            summary.rows_written += 1;
            progress.inc(1);
        }

        writer.finish()?;
        tracing::info!(
            "Wrote {} rows to {} ({} lookup failures)",
            summary.rows_written,
            output.display(),
            summary.failures.len()
        );
        Ok(summary)
    }

    fn example_rows(&self, table: &Table) -> usize {
        self.example_rows_in(table.rows.len())
    }

    fn example_rows_in(&self, rows: usize) -> usize {
        usize::from(self.skip_example_row && rows > 0)
    }
}
