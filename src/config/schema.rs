//! Configuration schema definitions for voucherkit.
//!
//! This module contains the struct definitions that map to the
//! `voucherkit.yml` file format. Every field has a default, so an empty
//! file (or no file at all) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default point-elevation query endpoint.
pub const DEFAULT_ELEVATION_URL: &str = "https://epqs.nationalmap.gov/v1/json";

/// Default name verification endpoint.
pub const DEFAULT_NAMES_URL: &str = "https://verifier.globalnames.org/api/v1/verifications";

/// Root configuration structure for voucherkit.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoucherConfig {
    /// Input table used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Output table used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Query the elevation and name services for every row
    #[serde(default, skip_serializing_if = "is_false")]
    pub enrich: bool,

    /// What to do when a web lookup fails for one row
    pub on_lookup_failure: FailurePolicy,

    /// Discard the first data row (the template's example row)
    #[serde(default = "default_true")]
    pub skip_example_row: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Elevation service settings
    pub elevation: ElevationSettings,

    /// Name verification service settings
    pub names: NamesSettings,
}

impl Default for VoucherConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            enrich: false,
            on_lookup_failure: FailurePolicy::default(),
            skip_example_row: true,
            timeout_secs: default_timeout_secs(),
            elevation: ElevationSettings::default(),
            names: NamesSettings::default(),
        }
    }
}

impl VoucherConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Handling of a failed web lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the row, leave its enrichment fields empty and keep going
    #[default]
    Continue,
    /// Abort the whole run on the first failure
    FailFast,
}

/// Point-elevation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationSettings {
    /// Query endpoint
    pub url: String,
}

impl Default for ElevationSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_ELEVATION_URL.to_string(),
        }
    }
}

/// Name verification service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesSettings {
    /// Verification endpoint
    pub url: String,

    /// Data source identifiers to match against (1 = Catalogue of Life)
    pub data_sources: Vec<u32>,

    /// Capitalize the first letter of the name before matching
    #[serde(default, skip_serializing_if = "is_false")]
    pub capitalize: bool,

    /// Allow fuzzy matching of single-word names
    #[serde(default, skip_serializing_if = "is_false")]
    pub fuzzy_uninomial: bool,
}

impl Default for NamesSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_NAMES_URL.to_string(),
            data_sources: vec![1],
            capitalize: false,
            fuzzy_uninomial: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: VoucherConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, VoucherConfig::default());
        assert!(!config.enrich);
        assert!(config.skip_example_row);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.on_lookup_failure, FailurePolicy::Continue);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
input: data/vouchers.xlsx
output: data/enriched.csv
enrich: true
on_lookup_failure: fail_fast
skip_example_row: false
timeout_secs: 5
elevation:
  url: http://localhost:8080/epqs
names:
  url: http://localhost:8080/verify
  data_sources: [5, 11]
  fuzzy_uninomial: true
"#;
        let config: VoucherConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("data/vouchers.xlsx")));
        assert!(config.enrich);
        assert_eq!(config.on_lookup_failure, FailurePolicy::FailFast);
        assert!(!config.skip_example_row);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.elevation.url, "http://localhost:8080/epqs");
        assert_eq!(config.names.data_sources, vec![5, 11]);
        assert!(config.names.fuzzy_uninomial);
        assert!(!config.names.capitalize);
    }

    #[test]
    fn partial_service_settings_keep_defaults() {
        let yaml = "names:\n  capitalize: true\n";
        let config: VoucherConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.names.url, DEFAULT_NAMES_URL);
        assert_eq!(config.names.data_sources, vec![1]);
        assert!(config.names.capitalize);
        assert_eq!(config.elevation.url, DEFAULT_ELEVATION_URL);
    }

    #[test]
    fn rejects_unknown_failure_policy() {
        let result: Result<VoucherConfig, _> = serde_yaml::from_str("on_lookup_failure: retry");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_without_default_flags() {
        let yaml = serde_yaml::to_string(&VoucherConfig::default()).unwrap();
        assert!(!yaml.contains("enrich:"));
        assert!(yaml.contains("on_lookup_failure: continue"));
    }
}
