//! Configuration loading, validation, and management for promptwright.
//!
//! Loads configuration from `~/.promptwright/config.toml` with environment
//! variable overrides. Validates all settings at startup.

pub use promptwright_core::DEFAULT_TARGET;
use promptwright_core::ModelProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output formats the CLI can emit.
pub const OUTPUT_FORMATS: [&str; 2] = ["markdown", "json"];

/// The root configuration structure.
///
/// Maps directly to `~/.promptwright/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target model identifier used when none is given on the command line
    #[serde(default = "default_target")]
    pub default_target: String,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Additional or replacement target profiles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileConfig>,
}

fn default_target() -> String {
    DEFAULT_TARGET.into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// "markdown" prints the composed prompt; "json" prints the export document
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "markdown".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// A target profile declared in config.
///
/// ```toml
/// [[profiles]]
/// id = "local-llama"
/// extra_constraints = ["Answer in plain text only"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub id: String,

    #[serde(default)]
    pub extra_constraints: Vec<String>,
}

impl From<ProfileConfig> for ModelProfile {
    fn from(config: ProfileConfig) -> Self {
        ModelProfile {
            id: config.id,
            extra_constraints: config.extra_constraints,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.promptwright/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `PROMPTWRIGHT_TARGET` replaces `default_target`
    /// - `PROMPTWRIGHT_FORMAT` replaces `output.format`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(target) = std::env::var("PROMPTWRIGHT_TARGET") {
            config.default_target = target;
        }

        if let Ok(format) = std::env::var("PROMPTWRIGHT_FORMAT") {
            config.output.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".promptwright")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.output.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be one of {}, got '{}'",
                OUTPUT_FORMATS.join(", "),
                self.output.format
            )));
        }

        for (i, profile) in self.profiles.iter().enumerate() {
            if profile.id.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "profile id must not be empty".into(),
                ));
            }
            if self.profiles[..i].iter().any(|p| p.id == profile.id) {
                return Err(ConfigError::ValidationError(format!(
                    "profile '{}' is declared more than once",
                    profile.id
                )));
            }
        }

        Ok(())
    }

    /// Config-declared profiles as domain values, in declaration order.
    pub fn model_profiles(&self) -> Vec<ModelProfile> {
        self.profiles.iter().cloned().map(ModelProfile::from).collect()
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_target: default_target(),
            output: OutputConfig::default(),
            profiles: vec![],
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
