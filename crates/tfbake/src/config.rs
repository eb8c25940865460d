//! # Bake Configuration
//!
//! Loaded from TOML. Every field is optional:
//!
//! ```toml
//! output_dir = "assets"
//! scenarios = ["basic"]
//! parallel_scenarios = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{BakeError, BakeResult};

/// Configuration path used when `TFBAKE_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "tfbake.toml";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "TFBAKE_CONFIG";

/// Bake run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BakeConfig {
    /// Directory receiving save files and asset files.
    pub output_dir: PathBuf,
    /// Scenarios to bake. `None` bakes the whole catalog.
    pub scenarios: Option<Vec<String>>,
    /// Bake scenarios on scoped threads sharing one pool.
    pub parallel_scenarios: bool,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets"),
            scenarios: None,
            parallel_scenarios: false,
        }
    }
}

impl BakeConfig {
    /// Parses configuration text. `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `BakeError::Config` if the text is not a valid configuration.
    pub fn from_toml_str(text: &str, origin: &Path) -> BakeResult<Self> {
        toml::from_str(text).map_err(|source| BakeError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// - `BakeError::Io` if the file exists but cannot be read
    /// - `BakeError::Config` if the file is malformed
    pub fn load(path: &Path) -> BakeResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(BakeError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = BakeConfig::from_toml_str("", Path::new("x.toml")).unwrap();
        assert_eq!(config, BakeConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_full_file() {
        let text = r#"
            output_dir = "out"
            scenarios = ["basic"]
            parallel_scenarios = true
        "#;
        let config = BakeConfig::from_toml_str(text, Path::new("x.toml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.scenarios, Some(vec!["basic".to_string()]));
        assert!(config.parallel_scenarios);
    }

    #[test]
    fn test_malformed_file_rejected() {
        let err = BakeConfig::from_toml_str("parallel_scenarios = \"yes\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, BakeError::Config { .. }));

        let err = BakeConfig::from_toml_str("colour = 1", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, BakeError::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = BakeConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, BakeConfig::default());
    }
}
