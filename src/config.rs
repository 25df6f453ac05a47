//! Phone entry configuration
//!
//! Stored as YAML, by default in `~/.config/phone-mask/config.yaml`:
//!
//! ```yaml
//! label: Mobile
//! template: "(___) ___-____"
//! numbers_only: true
//! required: true
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mask::{Template, TemplateError, DEFAULT_MARKER, DEFAULT_PHONE_TEMPLATE};

/// Settings for one phone entry control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneEntryConfig {
    /// Label shown above the input
    pub label: String,
    /// Mask pattern; marker characters are editable
    pub template: String,
    /// Placeholder character for empty slots
    pub marker: char,
    /// Prefix for generated name/id attributes
    pub prefix: String,
    pub required: bool,
    /// Logical value is digits only instead of the formatted buffer
    pub numbers_only: bool,
    /// Show errors on form submit/reset events rather than on every status change
    pub use_form_service: bool,
    /// Apply the incomplete-number validation
    pub use_default_validations: bool,
    /// Form root this control belongs to, matched against form events
    pub form: Option<String>,
}

impl Default for PhoneEntryConfig {
    fn default() -> Self {
        Self {
            label: "Phone Number".to_string(),
            template: DEFAULT_PHONE_TEMPLATE.to_string(),
            marker: DEFAULT_MARKER,
            prefix: String::new(),
            required: false,
            numbers_only: false,
            use_form_service: false,
            use_default_validations: true,
            form: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Template(TemplateError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Template(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<TemplateError> for ConfigError {
    fn from(e: TemplateError) -> Self {
        ConfigError::Template(e)
    }
}

impl PhoneEntryConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.build_template()?;
        Ok(config)
    }

    /// Load from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(target: "config", "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the default location, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!(target: "config", "No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                target: "config",
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(target: "config", "Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Build the mask template described by this config
    pub fn build_template(&self) -> Result<Template, TemplateError> {
        Template::with_marker(&self.template, self.marker)
    }
}
