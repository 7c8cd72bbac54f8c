//! Settings for the keypad shell.
//!
//! Settings start from defaults, are overlaid with an optional TOML file,
//! then with `CALCPAD_*` environment variables.

use crate::core::NumberFormat;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "calcpad.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay before Compute runs, covering the "calculating" animation.
    pub compute_delay_ms: u64,
    /// Thousands separator used on the display.
    pub group_separator: String,
    /// Phase transitions kept for diagnostics.
    pub history_limit: usize,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compute_delay_ms: 500,
            group_separator: ",".into(),
            history_limit: 256,
            log_filter: "warn".into(),
        }
    }
}

impl Settings {
    /// Settings suited to scripted runs and tests: no compute delay.
    pub fn immediate() -> Self {
        Self {
            compute_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn compute_delay(&self) -> Duration {
        Duration::from_millis(self.compute_delay_ms)
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::with_group_separator(self.group_separator.clone())
    }

    /// Load settings from `path` (or `calcpad.toml` if present) and the
    /// environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw, path.to_path_buf())
    }

    fn from_toml_str(raw: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Overlay values from environment-style lookups.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CALCPAD_COMPUTE_DELAY_MS") {
            self.compute_delay_ms = v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "CALCPAD_COMPUTE_DELAY_MS",
                message: format!("expected milliseconds, got '{v}'"),
            })?;
        }
        if let Some(v) = lookup("CALCPAD_GROUP_SEPARATOR") {
            self.group_separator = v;
        }
        if let Some(v) = lookup("CALCPAD_HISTORY_LIMIT") {
            self.history_limit = v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "CALCPAD_HISTORY_LIMIT",
                message: format!("expected a count, got '{v}'"),
            })?;
        }
        if let Some(v) = lookup("CALCPAD_LOG") {
            self.log_filter = v;
        }
        Ok(())
    }

    /// Reject values that would make the display ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .group_separator
            .chars()
            .any(|c| c.is_ascii_digit() || c == '.')
        {
            return Err(ConfigError::Invalid {
                key: "group_separator",
                message: format!(
                    "'{}' must not contain digits or '.'",
                    self.group_separator
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_keypad_behaviour() {
        let settings = Settings::default();
        assert_eq!(settings.compute_delay(), Duration::from_millis(500));
        assert_eq!(settings.group_separator, ",");
        assert_eq!(settings.history_limit, 256);
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(Settings::immediate().compute_delay(), Duration::ZERO);
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let settings = Settings::from_toml_str(
            "compute_delay_ms = 50\ngroup_separator = \" \"\n",
            PathBuf::from("calcpad.toml"),
        )
        .unwrap();

        assert_eq!(settings.compute_delay_ms, 50);
        assert_eq!(settings.group_separator, " ");
        assert_eq!(settings.history_limit, 256);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Settings::from_toml_str("compute_delay_ms = \"soon\"", PathBuf::from("x.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut settings = Settings::default();
        settings
            .apply_env(env(&[
                ("CALCPAD_COMPUTE_DELAY_MS", "0"),
                ("CALCPAD_HISTORY_LIMIT", "4"),
                ("CALCPAD_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(settings.compute_delay_ms, 0);
        assert_eq!(settings.history_limit, 4);
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn env_rejects_bad_numbers() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(env(&[("CALCPAD_COMPUTE_DELAY_MS", "fast")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "CALCPAD_COMPUTE_DELAY_MS",
                ..
            }
        ));
    }

    #[test]
    fn separator_with_digits_is_invalid() {
        let settings = Settings {
            group_separator: ".".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/calcpad.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn number_format_uses_separator() {
        let settings = Settings {
            group_separator: "'".into(),
            ..Settings::default()
        };
        assert_eq!(settings.number_format().format("1000000"), "1'000'000");
    }
}
