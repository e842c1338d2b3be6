use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CascError, CascResult};
use crate::types::DEFAULT_EXTRA_KEYS;

/// Top-level configuration (loaded from casc.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CascConfig {
    pub keyring: KeyringConfig,
    pub log: LogConfig,
}

impl CascConfig {
    /// Parse a configuration from TOML text. Missing sections take their defaults.
    pub fn from_toml_str(content: &str) -> CascResult<Self> {
        toml::from_str(content).map_err(|e| CascError::Config(e.to_string()))
    }

    /// Load a configuration file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> CascResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| CascError::Config(format!("parsing {}: {e}", path.display())))
        } else {
            tracing::warn!(
                "config file not found: {}  (using defaults)",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

/// Key registry configuration for a storage session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    /// Number of keys that may be registered at runtime (default: 128)
    pub extra_key_capacity: usize,
    /// Seed the registry with the compiled key catalog (default: true)
    pub builtin_catalog: bool,
    /// Plain-text key lists imported when the session opens
    pub key_files: Vec<PathBuf>,
}

impl Default for KeyringConfig {
    fn default() -> Self {
        Self {
            extra_key_capacity: DEFAULT_EXTRA_KEYS,
            builtin_catalog: true,
            key_files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (default: info)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[keyring]
extra_key_capacity = 16
builtin_catalog = false
key_files = ["/etc/casc/tactkeys.txt", "/home/user/extra.txt"]

[log]
level = "debug"
format = "json"
"#;
        let config = CascConfig::from_toml_str(toml_str).unwrap();

        assert_eq!(config.keyring.extra_key_capacity, 16);
        assert!(!config.keyring.builtin_catalog);
        assert_eq!(config.keyring.key_files.len(), 2);
        assert_eq!(
            config.keyring.key_files[0],
            PathBuf::from("/etc/casc/tactkeys.txt")
        );
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_parse_defaults() {
        let config = CascConfig::from_toml_str("").unwrap();

        assert_eq!(config.keyring.extra_key_capacity, 128);
        assert!(config.keyring.builtin_catalog);
        assert!(config.keyring.key_files.is_empty());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[keyring]
extra_key_capacity = 4
"#;
        let config = CascConfig::from_toml_str(toml_str).unwrap();

        // Overridden
        assert_eq!(config.keyring.extra_key_capacity, 4);
        // Defaults
        assert!(config.keyring.builtin_catalog);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CascConfig::from_toml_str("[keyring\nextra_key_capacity = ").unwrap_err();
        assert!(matches!(err, CascError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = CascConfig::load(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.keyring.extra_key_capacity, 128);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("casc.toml");
        std::fs::write(&path, "[log]\nlevel = \"trace\"\n").unwrap();

        let config = CascConfig::load(&path).unwrap();
        assert_eq!(config.log.level, "trace");
        assert_eq!(config.keyring.extra_key_capacity, 128);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = CascConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = CascConfig::from_toml_str(&toml_str).unwrap();

        assert_eq!(
            config.keyring.extra_key_capacity,
            parsed.keyring.extra_key_capacity
        );
        assert_eq!(config.log.format, parsed.log.format);
    }
}
