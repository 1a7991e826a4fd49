//! Configuration file discovery and loading.
//!
//! voucherkit reads at most one YAML file: the path given with `--config`,
//! or `voucherkit.yml` in the working directory when it exists. Without
//! either, the built-in defaults apply.

use crate::config::schema::VoucherConfig;
use crate::error::{Result, VoucherError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "voucherkit.yml";

/// Find `voucherkit.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`VoucherConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VoucherConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VoucherError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VoucherError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`VoucherConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<VoucherConfig> {
    // An empty file deserializes as YAML null, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(VoucherConfig::default());
    }

    let config: VoucherConfig =
        serde_yaml::from_str(content).map_err(|e| VoucherError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if config.timeout_secs == 0 {
        return Err(VoucherError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: "timeout_secs must be at least 1".to_string(),
        });
    }
    Ok(config)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `voucherkit.yml` in `working_dir` is used when present, and the defaults
/// when it is not.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<VoucherConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_config(working_dir) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(VoucherConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::FailurePolicy;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_working_dir() {
        let temp = TempDir::new().unwrap();
        assert!(find_config(temp.path()).is_none());

        fs::write(temp.path().join(CONFIG_FILE_NAME), "enrich: true").unwrap();
        assert!(find_config(temp.path()).is_some());
    }

    #[test]
    fn load_config_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, VoucherConfig::default());
    }

    #[test]
    fn load_config_reads_discovered_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "enrich: true\non_lookup_failure: fail_fast\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert!(config.enrich);
        assert_eq!(config.on_lookup_failure, FailurePolicy::FailFast);
    }

    #[test]
    fn override_takes_precedence() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "enrich: true").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "timeout_secs: 7").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert!(!config.enrich);
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(VoucherError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "timeout_secs: [not a number").unwrap();

        let result = load_config_file(&path);
        match result {
            Err(VoucherError::ConfigParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = parse_config("timeout_secs: 0\n", Path::new("voucherkit.yml"));
        match result {
            Err(VoucherError::ConfigParseError { message, .. }) => {
                assert!(message.contains("timeout_secs"), "{}", message);
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("  \n", Path::new("voucherkit.yml")).unwrap();
        assert_eq!(config, VoucherConfig::default());
    }
}
