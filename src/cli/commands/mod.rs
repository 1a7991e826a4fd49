//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands them the working
//! directory and any `--config` override.

pub mod check;
pub mod columns;
pub mod completions;
pub mod dispatcher;
pub mod process;

pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, EXIT_LOOKUP_FAILURES, EXIT_MISSING_COLUMNS,
};
