// Configuration resolution for the adb executable handle.
// Callers supply a partial options mapping; resolution fills every
// recognized field with a default and never rejects input.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the `adb` executable, resolved through `PATH`.
pub const DEFAULT_ADB_PATH: &str = "adb";

/// Caller-supplied options. Every field is optional; unknown keys in a
/// deserialized mapping are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdbOptions {
    /// Overrides the default location of the `adb` executable.
    pub path: Option<PathBuf>,
}

/// Fully-resolved configuration record. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdbConfig {
    pub path: PathBuf,
}

impl AdbConfig {
    /// Resolve partial options into a complete configuration,
    /// defaulting every unset field.
    pub fn resolve(options: AdbOptions) -> Self {
        Self {
            path: options
                .path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ADB_PATH)),
        }
    }
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self::resolve(AdbOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_non_empty() {
        let config = AdbConfig::default();
        assert!(!config.path.as_os_str().is_empty());
        assert_eq!(config.path, PathBuf::from(DEFAULT_ADB_PATH));
    }

    #[test]
    fn resolve_keeps_supplied_path() {
        let config = AdbConfig::resolve(AdbOptions {
            path: Some(PathBuf::from("foo")),
        });
        assert_eq!(config.path, PathBuf::from("foo"));
    }

    #[test]
    fn resolve_defaults_omitted_path() {
        let config = AdbConfig::resolve(AdbOptions { path: None });
        assert_eq!(config.path, PathBuf::from(DEFAULT_ADB_PATH));
    }

    #[test]
    fn options_deserialize_with_partial_mapping() {
        let options: AdbOptions = serde_json::from_str(r#"{"path": "foo"}"#).unwrap();
        assert_eq!(options.path, Some(PathBuf::from("foo")));

        let empty: AdbOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.path, None);
    }

    #[test]
    fn options_deserialize_ignores_unknown_keys() {
        let options: AdbOptions =
            serde_json::from_str(r#"{"path": "foo", "retries": 3}"#).unwrap();
        assert_eq!(AdbConfig::resolve(options).path, PathBuf::from("foo"));
    }
}
