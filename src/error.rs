//! Error types for voucherkit operations.
//!
//! This module defines [`VoucherError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing optional values are never errors; they only omit clauses
//! - Malformed input and output failures are fatal and abort the run
//! - Web service failures surface as [`VoucherError::Enrichment`] so the
//!   pipeline can decide whether to record them per row or abort
//! - Use `anyhow::Error` (via `VoucherError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for voucherkit operations.
#[derive(Debug, Error)]
pub enum VoucherError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The file extension is not one we can read or write.
    #[error("Unsupported table format for {path} (expected .csv or .xlsx)")]
    UnsupportedFormat { path: PathBuf },

    /// Neither the command line nor the config names a required path.
    #[error("No {which} table given (pass it as an argument or set `{which}` in voucherkit.yml)")]
    MissingPath { which: &'static str },

    /// The input header lacks columns the derivations depend on.
    #[error("Input is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// The input table could not be read.
    #[error("Failed to read {path}: {message}")]
    TableRead { path: PathBuf, message: String },

    /// The output table could not be written.
    #[error("Failed to write {path}: {message}")]
    TableWrite { path: PathBuf, message: String },

    /// A web lookup failed (network, timeout, status or malformed body).
    #[error("{service} lookup failed: {message}")]
    Enrichment { service: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VoucherError {
    /// Build an enrichment error for the named service.
    pub fn enrichment(service: &str, message: impl Into<String>) -> Self {
        Self::Enrichment {
            service: service.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for voucherkit operations.
pub type Result<T> = std::result::Result<T, VoucherError>;
