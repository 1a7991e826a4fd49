//! Voucherkit - Darwin Core enrichment for fungarium voucher sheets.
//!
//! Voucherkit reads a collection sheet (CSV or Excel), composes the Darwin
//! Core text fields a fungarium portal expects from the raw collector
//! columns, optionally looks up each specimen's elevation and verifies its
//! scientific name, and writes the enriched sheet back out.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`columns`] - Input and output column names
//! - [`config`] - Configuration loading and parsing
//! - [`derive`] - Field derivations for one record
//! - [`enrich`] - Elevation and name verification web clients
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Whole-sheet processing
//! - [`record`] - One voucher row as ordered column/value pairs
//! - [`table`] - CSV and XLSX reading and atomic writing
//! - [`ui`] - Terminal output and progress
//!
//! # Example
//!
//! ```
//! use voucherkit::derive::derive_all;
//! use voucherkit::record::Record;
//!
//! let mut record = Record::from_pairs([
//!     ("catalogNumber", "DBG001234"),
//!     ("Landowner", "Jones"),
//!     ("host", "Quercus"),
//! ]);
//! derive_all(&mut record);
//!
//! assert_eq!(record.get("locationRemarks"), "Landowner: Jones.");
//! assert_eq!(record.get("associatedTaxa"), "host: Quercus");
//! assert_eq!(record.get("otherCatalogNumbers"), "1234");
//! ```

pub mod cli;
pub mod columns;
pub mod config;
pub mod derive;
pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod table;
pub mod ui;

pub use error::{Result, VoucherError};
