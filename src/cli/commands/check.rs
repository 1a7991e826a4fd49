//! Check command implementation.
//!
//! The `voucherkit check` command validates a sheet's header without
//! touching the web services or writing anything.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::columns;
use crate::config::load_config;
use crate::error::Result;
use crate::table;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::process::report_missing_columns;

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.working_dir, self.config_path.as_deref())?;
        let enrich = self.args.enrich || config.enrich;
        let input = self.working_dir.join(&self.args.input);

        let table = table::read_table(&input)?;
        let missing = columns::missing_columns(&table.header, enrich);
        if !missing.is_empty() {
            return Ok(report_missing_columns(ui, &missing));
        }

        let example_rows = usize::from(config.skip_example_row && !table.rows.is_empty());
        ui.success(&format!(
            "{}: all {} required columns present",
            input.display(),
            columns::required_columns(enrich).len()
        ));
        ui.message(&format!(
            "{} data rows, {} to process",
            table.rows.len(),
            table.rows.len() - example_rows
        ));

        if ui.output_mode().shows_details() {
            ui.message("Output columns:");
            for column in columns::output_header(&table.header, enrich) {
                ui.message(&format!("  {}", column));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn full_header(enrich: bool) -> String {
        columns::required_columns(enrich).join(",")
    }

    #[test]
    fn complete_header_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("in.csv"),
            format!("{}\nexample\nrow\n", full_header(false)),
        )
        .unwrap();
        let args = CheckArgs {
            input: PathBuf::from("in.csv"),
            enrich: false,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("all 18 required columns present"));
        assert!(ui.has_message("2 data rows, 1 to process"));
        assert!(ui.has_message("  otherCatalogNumbers"));
        assert!(!ui.has_message("GNVmatchType"));
    }

    #[test]
    fn enrich_requires_source_columns() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("in.csv"), format!("{}\n", full_header(false))).unwrap();
        let args = CheckArgs {
            input: PathBuf::from("in.csv"),
            enrich: true,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_message("decimalLongitude"));
        assert!(ui.has_message("scientificName"));
    }

    #[test]
    fn config_can_enable_enrichment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("in.csv"), format!("{}\n", full_header(false))).unwrap();
        fs::write(temp.path().join("voucherkit.yml"), "enrich: true\n").unwrap();
        let args = CheckArgs {
            input: PathBuf::from("in.csv"),
            enrich: false,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        assert_eq!(cmd.execute(&mut ui).unwrap().exit_code, 2);
    }

    #[test]
    fn unreadable_input_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            input: PathBuf::from("absent.csv"),
            enrich: false,
        };
        let cmd = CheckCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
