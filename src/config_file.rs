//! Configuration file support
//!
//! Loads extractor defaults from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ExtractorConfig, LogFormat};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "mkv-sub-extractor.toml";

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Output settings
    pub output: Option<OutputSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory for extracted scripts
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Self {
            output: Some(OutputSettings { dir: None }),
            logging: Some(LoggingSettings {
                level: "warn".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to ExtractorConfig
    pub fn into_extractor_config(self) -> ExtractorConfig {
        let defaults = ExtractorConfig::default();
        let (log_level, log_format) = match self.logging {
            Some(l) => (
                l.level,
                l.format
                    .as_deref()
                    .and_then(LogFormat::parse)
                    .unwrap_or(defaults.log_format),
            ),
            None => (defaults.log_level, defaults.log_format),
        };

        ExtractorConfig {
            output_dir: self.output.and_then(|o| o.dir),
            log_level,
            log_format,
            quiet: false,
        }
    }
}

/// Result of looking for a configuration file
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ExtractorConfig,
    /// Set when a file was found but could not be used; reported once logging is up
    pub warning: Option<String>,
}

/// Load the configuration from `explicit`, or from [`DEFAULT_CONFIG_PATH`] if
/// it exists. Unreadable or malformed files fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> LoadedConfig {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !p.exists() {
                return LoadedConfig {
                    config: ExtractorConfig::default(),
                    warning: None,
                };
            }
            p
        }
    };

    match ConfigFile::from_file(&path) {
        Ok(cf) => LoadedConfig {
            config: cf.into_extractor_config(),
            warning: None,
        },
        Err(e) => LoadedConfig {
            config: ExtractorConfig::default(),
            warning: Some(format!(
                "Failed to load config file {}: {}. Using defaults.",
                path.display(),
                e
            )),
        },
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
