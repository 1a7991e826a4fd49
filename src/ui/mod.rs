//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, CI and other headless use
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use voucherkit::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("vouchers.csv");
//! ui.success("Wrote 12 rows");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::{format_duration, row_progress};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VoucherTheme};

use indicatif::ProgressBar;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a hint about what to do next.
    fn show_hint(&mut self, hint: &str);

    /// Start a row progress bar. Returns a hidden bar when progress is not shown.
    fn start_progress(&mut self, total: u64, message: &str) -> ProgressBar;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
