//! Configuration loading and parsing for voucherkit.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use voucherkit::config::{load_config, FailurePolicy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("voucherkit.yml"), "enrich: true").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(config.enrich);
//! assert_eq!(config.on_lookup_failure, FailurePolicy::Continue);
//! ```
//!
//! Command-line flags are applied on top of the loaded file by the
//! `process` and `check` commands.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    ElevationSettings, FailurePolicy, NamesSettings, VoucherConfig, DEFAULT_ELEVATION_URL,
    DEFAULT_NAMES_URL,
};
