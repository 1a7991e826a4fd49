//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Voucherkit - Darwin Core enrichment for fungarium voucher sheets.
#[derive(Debug, Parser)]
#[command(name = "voucherkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./voucherkit.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive Darwin Core fields for every row of a voucher sheet
    Process(ProcessArgs),

    /// Validate a voucher sheet's header without writing anything
    Check(CheckArgs),

    /// List the required input columns and the columns added on output
    Columns(ColumnsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `process` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProcessArgs {
    /// Voucher sheet to read (.csv or .xlsx)
    pub input: Option<PathBuf>,

    /// Where to write the processed sheet (.csv or .xlsx)
    pub output: Option<PathBuf>,

    /// Look up elevation and verify scientific names for every row
    #[arg(long, conflicts_with = "no_enrich")]
    pub enrich: bool,

    /// Skip web lookups even if the config enables them
    #[arg(long)]
    pub no_enrich: bool,

    /// Abort on the first failed lookup instead of recording it
    #[arg(long)]
    pub fail_fast: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Point-elevation query endpoint
    #[arg(long, value_name = "URL", env = "VOUCHERKIT_ELEVATION_URL")]
    pub elevation_url: Option<String>,

    /// Name verification endpoint
    #[arg(long, value_name = "URL", env = "VOUCHERKIT_NAMES_URL")]
    pub names_url: Option<String>,

    /// Name verification data source ID (repeatable)
    #[arg(long = "data-source", value_name = "ID", value_delimiter = ',')]
    pub data_sources: Vec<u32>,

    /// Keep the first data row instead of discarding it as the template example
    #[arg(long)]
    pub keep_example_row: bool,
}

impl ProcessArgs {
    /// The enrichment choice made on the command line, if any.
    pub fn enrich_override(&self) -> Option<bool> {
        if self.no_enrich {
            Some(false)
        } else if self.enrich {
            Some(true)
        } else {
            None
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Voucher sheet to check (.csv or .xlsx)
    pub input: PathBuf,

    /// Also require the columns web enrichment reads
    #[arg(long)]
    pub enrich: bool,
}

/// Arguments for the `columns` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ColumnsArgs {
    /// Include the enrichment columns
    #[arg(long)]
    pub enrich: bool,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
