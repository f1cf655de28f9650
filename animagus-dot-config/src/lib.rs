//! Shared configuration loader for animagus-dot.
//!
//! `defaults/animagus-dot.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`DotConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/animagus-dot.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "animagus-dot.toml";

/// Top-level configuration consumed by animagus-dot applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DotConfig {
    pub output: OutputConfig,
    pub dot: DotFormatConfig,
    pub treeviz: TreevizConfig,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_format: String,
}

/// Mirrors the knobs exposed by the DOT format.
#[derive(Debug, Clone, Deserialize)]
pub struct DotFormatConfig {
    pub escape_labels: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub show_ids: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

impl DotConfig {
    /// Format parameters for `format`, as understood by its
    /// `write_with_options`. Formats without knobs get an empty map.
    pub fn format_params(&self, format: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();
        match format {
            "dot" => {
                params.insert(
                    "escape-labels".to_string(),
                    self.dot.escape_labels.to_string(),
                );
            }
            "treeviz" => {
                params.insert("show-ids".to_string(), self.treeviz.show_ids.to_string());
            }
            "json" => {
                params.insert("pretty".to_string(), self.json.pretty.to_string());
            }
            _ => {}
        }
        params
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DotConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DotConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use animagus_dot::FormatRegistry;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.output.default_format, "dot");
        assert!(!config.dot.escape_labels);
        assert!(!config.treeviz.show_ids);
        assert!(config.json.pretty);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("dot.escape_labels", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.dot.escape_labels);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[treeviz]\nshow_ids = true\n").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert!(config.treeviz.show_ids);
        assert!(config.json.pretty);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/no/such/animagus-dot.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/no/such/animagus-dot.toml")
            .build()
            .expect("optional file to be skipped");
        assert_eq!(config.output.default_format, "dot");
    }

    #[test]
    fn default_format_is_registered() {
        let config = load_defaults().unwrap();
        assert!(FormatRegistry::default().has(&config.output.default_format));
    }

    #[test]
    fn format_params_match_format_knobs() {
        let config = load_defaults().unwrap();
        assert_eq!(
            config.format_params("dot").get("escape-labels"),
            Some(&"false".to_string())
        );
        assert_eq!(
            config.format_params("treeviz").get("show-ids"),
            Some(&"false".to_string())
        );
        assert_eq!(
            config.format_params("json").get("pretty"),
            Some(&"true".to_string())
        );
        assert!(config.format_params("unknown").is_empty());
    }
}
