//! Process command implementation.
//!
//! The `voucherkit process` command turns a voucher sheet into a Darwin Core
//! ready sheet, optionally enriching every row from the web services.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::args::ProcessArgs;
use crate::config::{load_config, FailurePolicy, VoucherConfig};
use crate::error::{Result, VoucherError};
use crate::pipeline::{Pipeline, RunSummary};
use crate::ui::{format_duration, UserInterface};

use super::dispatcher::{Command, CommandResult, EXIT_LOOKUP_FAILURES, EXIT_MISSING_COLUMNS};

/// The process command implementation.
pub struct ProcessCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: ProcessArgs,
}

impl ProcessCommand {
    /// Create a new process command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: ProcessArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProcessArgs {
        &self.args
    }

    /// Load the config file and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<VoucherConfig> {
        let mut config = load_config(&self.working_dir, self.config_path.as_deref())?;
        apply_overrides(&self.args, &mut config);
        Ok(config)
    }

    fn resolve_path(
        &self,
        arg: Option<&PathBuf>,
        configured: Option<&PathBuf>,
        which: &'static str,
    ) -> Result<PathBuf> {
        let path = arg
            .or(configured)
            .ok_or(VoucherError::MissingPath { which })?;
        Ok(self.working_dir.join(path))
    }

    fn report(&self, ui: &mut dyn UserInterface, summary: &RunSummary, output: &Path, started: Instant) {
        let row_label = if summary.rows_written == 1 { "row" } else { "rows" };
        ui.success(&format!(
            "Wrote {} {} to {} in {}",
            summary.rows_written,
            row_label,
            output.display(),
            format_duration(started.elapsed())
        ));

        if summary.example_rows_skipped > 0 && ui.output_mode().shows_details() {
            ui.message("Skipped the template's example row");
        }
        if !summary.enriched {
            ui.show_hint("Run with --enrich to add elevation and verified names");
        }
    }
}

/// Apply command-line flags over values from the config file.
pub fn apply_overrides(args: &ProcessArgs, config: &mut VoucherConfig) {
    if let Some(enrich) = args.enrich_override() {
        config.enrich = enrich;
    }
    if args.fail_fast {
        config.on_lookup_failure = FailurePolicy::FailFast;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(url) = &args.elevation_url {
        config.elevation.url = url.clone();
    }
    if let Some(url) = &args.names_url {
        config.names.url = url.clone();
    }
    if !args.data_sources.is_empty() {
        config.names.data_sources = args.data_sources.clone();
    }
    if args.keep_example_row {
        config.skip_example_row = false;
    }
}

/// Print the missing columns and return the matching exit status.
pub(super) fn report_missing_columns(ui: &mut dyn UserInterface, missing: &[String]) -> CommandResult {
    ui.error("Input is missing required columns:");
    for column in missing {
        ui.message(&format!("  - {}", column));
    }
    CommandResult::failure(EXIT_MISSING_COLUMNS)
}

impl Command for ProcessCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.resolve_config()?;
        let input = self.resolve_path(self.args.input.as_ref(), config.input.as_ref(), "input")?;
        let output = self.resolve_path(self.args.output.as_ref(), config.output.as_ref(), "output")?;

        let pipeline = Pipeline::new(&config)?;
        pipeline.check_output(&output)?;

        ui.show_header(&format!("{} → {}", input.display(), output.display()));
        tracing::info!(
            "Processing {} (enrich: {}, on lookup failure: {:?})",
            input.display(),
            config.enrich,
            config.on_lookup_failure
        );

        let started = Instant::now();
        let table = match pipeline.load(&input) {
            Ok(table) => table,
            Err(VoucherError::MissingColumns { missing }) => {
                return Ok(report_missing_columns(ui, &missing));
            }
            Err(e) => return Err(e),
        };

        let label = if pipeline.enriches() { "Enriching" } else { "Processing" };
        let progress = ui.start_progress(pipeline.rows_to_process(&table) as u64, label);
        let result = pipeline.process(table, &output, &progress);
        progress.finish_and_clear();
        let summary = result?;

        self.report(ui, &summary, &output, started);

        if summary.is_clean() {
            return Ok(CommandResult::success());
        }

        ui.warning(&format!(
            "{} of {} rows had lookup failures; their enrichment fields are empty",
            summary.failed_rows(),
            summary.rows_written
        ));
        if ui.output_mode().shows_details() {
            for failure in &summary.failures {
                ui.message(&format!(
                    "  row {} ({}): {} lookup failed: {}",
                    failure.row, failure.catalog_number, failure.service, failure.message
                ));
            }
        } else {
            ui.show_hint("Run with --verbose to list them, or --fail-fast to stop at the first one");
        }
        Ok(CommandResult::failure(EXIT_LOOKUP_FAILURES))
    }
}
