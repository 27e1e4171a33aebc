//! Profile configuration files
//!
//! A [`ProfileConfig`] can be written in TOML, JSON or YAML. The format is
//! picked from the file extension:
//!
//! ```toml
//! profile = "bootstrap"
//! default_col = "span6"
//! aliases = [
//!     ['\b(\d+):(\d+)\b', 'span\1 offset\2'],
//!     ['\b(\d+)\b', 'span\1'],
//! ]
//! ```
//!
//! Unknown keys are rejected so that typos surface as errors instead of
//! silently falling back to the base profile.

use std::path::Path;

use crate::features::profiles::ProfileConfig;
use crate::utils::error::{GridError, GridResult};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }
}

/// Parse a profile config from text
pub fn parse_profile_config(text: &str, format: ConfigFormat) -> GridResult<ProfileConfig> {
    let parsed: Result<ProfileConfig, String> = match format {
        ConfigFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| {
        GridError::config(format!("invalid {} profile config: {}", format.name(), e))
    })
}

/// Read and parse a profile config file
pub fn load_profile_config(path: impl AsRef<Path>) -> GridResult<ProfileConfig> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        GridError::config(format!(
            "unsupported config file '{}' (expected .toml, .json, .yaml or .yml)",
            path.display()
        ))
    })?;

    let text = std::fs::read_to_string(path)?;
    parse_profile_config(&text, format)
}
