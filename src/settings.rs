//! Settings for the command-line validator
//!
//! Supports loading settings from:
//! - Default values
//! - Settings file (yaml-schema-validator.toml)
//! - Environment variables (YSV_*)
//!
//! ## Example settings file (yaml-schema-validator.toml):
//! ```toml
//! [validation]
//! allow_extra_keys = false
//!
//! [output]
//! format = "json"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings for the validator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// Validation behaviour
    #[serde(default)]
    pub validation: ValidationSettings,

    /// Report output
    #[serde(default)]
    pub output: OutputSettings,
}

/// Validation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Allow configuration keys not defined in the schema
    #[serde(default = "default_true")]
    pub allow_extra_keys: bool,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}

fn default_true() -> bool {
    true
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            allow_extra_keys: true,
        }
    }
}

impl ValidatorSettings {
    /// Load settings from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load settings, layering an explicit file over the default locations
    pub fn load_from(settings_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let locations = [
            "yaml-schema-validator.toml",
            ".yaml-schema-validator.toml",
            "config/yaml-schema-validator.toml",
        ];

        for location in locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        let project_dirs =
            directories::ProjectDirs::from("dev", "familiar", "yaml-schema-validator");
        if let Some(dirs) = project_dirs {
            let xdg_settings = dirs.config_dir().join("settings.toml");
            if xdg_settings.exists() {
                builder = builder.add_source(File::from(xdg_settings).required(false));
            }
        }

        if let Some(path) = settings_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // YSV_VALIDATION__ALLOW_EXTRA_KEYS=false
        builder = builder.add_source(
            Environment::with_prefix("YSV")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Save settings to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
