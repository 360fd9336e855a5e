//! Configuration loading and resolution
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`FYYUR_*`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error: the service logs a warning and
//! starts on defaults. A config file that exists but does not parse is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ENV_BIND: &str = "FYYUR_BIND";
pub const ENV_PORT: &str = "FYYUR_PORT";
pub const ENV_DATABASE: &str = "FYYUR_DATABASE";
pub const ENV_LOG_LEVEL: &str = "FYYUR_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "FYYUR_LOG_FILE";

/// Compiled defaults used when no other tier supplies a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub bind: String,
    pub port: u16,
    pub database: PathBuf,
    pub max_connections: u32,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
            database: default_database_path(),
            max_connections: 5,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// `<local data dir>/fyyur/fyyur.db`, or `./fyyur.db` where the platform has
/// no data directory
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur").join("fyyur.db"))
        .unwrap_or_else(|| PathBuf::from("fyyur.db"))
}

/// Default config file location: `~/.config/fyyur/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// `[logging]` table of the TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

/// Contents of the TOML config file (all fields optional)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlConfig {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub max_connections: Option<u32>,
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Load the config file at `path`, or at the default location when `None`
    ///
    /// Missing file → defaults with a warning. Unreadable or malformed file →
    /// `Error::Config`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(p) => p,
            None => {
                warn!("Could not determine config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            warn!("Config file not found: {} (using defaults)", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        let config = Self::parse(&content)?;
        info!("Loaded config file: {}", path.display());
        Ok(config)
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind: String,
    pub port: u16,
    pub database: PathBuf,
    pub max_connections: u32,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl ServiceConfig {
    /// Resolve each setting CLI → ENV → TOML → compiled default
    pub fn resolve(cli: &ConfigOverrides, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();

        let env_port = match env_value(ENV_PORT) {
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
                Error::Config(format!("{} is not a valid port: {}", ENV_PORT, raw))
            })?),
            None => None,
        };

        let config = Self {
            bind: cli
                .bind
                .clone()
                .or_else(|| env_value(ENV_BIND))
                .or_else(|| toml.bind.clone())
                .unwrap_or(defaults.bind),
            port: cli.port.or(env_port).or(toml.port).unwrap_or(defaults.port),
            database: cli
                .database
                .clone()
                .or_else(|| env_value(ENV_DATABASE).map(PathBuf::from))
                .or_else(|| toml.database.clone())
                .unwrap_or(defaults.database),
            max_connections: toml.max_connections.unwrap_or(defaults.max_connections),
            log_level: cli
                .log_level
                .clone()
                .or_else(|| env_value(ENV_LOG_LEVEL))
                .or_else(|| toml.logging.level.clone())
                .unwrap_or(defaults.log_level),
            log_file: cli
                .log_file
                .clone()
                .or_else(|| env_value(ENV_LOG_FILE).map(PathBuf::from))
                .or_else(|| toml.logging.file.clone())
                .or(defaults.log_file),
        };

        if config.max_connections == 0 {
            return Err(Error::Config("max_connections must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Environment variable, ignoring unset and blank values
fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_parse_full() {
        let config = TomlConfig::parse(
            r#"
            bind = "0.0.0.0"
            port = 8080
            database = "/srv/fyyur/fyyur.db"
            max_connections = 8

            [logging]
            level = "debug"
            file = "error.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.max_connections, Some(8));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, Some(PathBuf::from("error.log")));
    }

    #[test]
    fn test_toml_parse_empty_is_default() {
        assert_eq!(TomlConfig::parse("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_toml_parse_error() {
        let err = TomlConfig::parse("port = \"not a number\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = TomlConfig::load(Some(Path::new("/nonexistent/fyyur/config.toml"))).unwrap();
        assert_eq!(config, TomlConfig::default());
    }
}
