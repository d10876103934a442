use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("table directive keyword must not be empty")]
    EmptyDirective,

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `config_path`, or from the default location.
    ///
    /// An explicit path must exist. When no path is given and the default
    /// file is absent, built-in defaults are returned.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        Self::from_toml_str(&s, &path)
    }

    /// Parse and resolve configuration text; `origin` is used for messages
    /// and recorded as the config source.
    pub fn from_toml_str(s: &str, origin: &Path) -> Result<ResolvedConfig, ConfigError> {
        let cf: ConfigFile = toml::from_str(s)
            .map_err(|e| ConfigError::ParseError(origin.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.tables.directive.trim().is_empty() {
            return Err(ConfigError::EmptyDirective);
        }

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            source: Some(origin.to_path_buf()),
            logging,
            markers: cf.markers,
            tables: cf.tables,
            output: cf.output,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("pyreport").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("pyreport").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
