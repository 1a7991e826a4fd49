//! Columns command implementation.
//!
//! The `voucherkit columns` command lists the columns an input sheet must
//! carry and the columns a run appends.

use serde::Serialize;

use crate::cli::args::ColumnsArgs;
use crate::columns;
use crate::error::{Result, VoucherError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Column listing as printed with `--json`.
#[derive(Debug, Serialize)]
struct ColumnListing {
    required: Vec<&'static str>,
    appended: Vec<&'static str>,
}

/// The columns command implementation.
pub struct ColumnsCommand {
    args: ColumnsArgs,
}

impl ColumnsCommand {
    /// Create a new columns command.
    pub fn new(args: ColumnsArgs) -> Self {
        Self { args }
    }
}

impl Command for ColumnsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let listing = ColumnListing {
            required: columns::required_columns(self.args.enrich),
            appended: columns::appended_columns(self.args.enrich),
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&listing).map_err(|e| VoucherError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.message("Required input columns:");
        for column in &listing.required {
            ui.message(&format!("  {}", column));
        }
        ui.message("");
        ui.message("Appended output columns:");
        for column in &listing.appended {
            ui.message(&format!("  {}", column));
        }

        Ok(CommandResult::success())
    }
}
