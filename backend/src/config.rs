//! Server configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! environment variables:
//!
//! | Variable           | Meaning                                   | Default          |
//! |--------------------|-------------------------------------------|------------------|
//! | `ACADEMY_CONFIG`   | Path of the TOML file                     | `academy.toml`   |
//! | `ACADEMY_HOST`     | Interface to bind                         | `127.0.0.1`      |
//! | `ACADEMY_PORT`     | Port to bind                              | `8080`           |
//! | `ACADEMY_DATABASE` | SQLite database file                      | `academy.sqlite` |
//!
//! A missing file is not an error; the defaults apply.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_PATH_VAR: &str = "ACADEMY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "academy.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Upper bound for JSON request bodies, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("academy.sqlite"),
            json_limit: 1024 * 1024,
        }
    }
}

impl Config {
    /// Loads the file named by `ACADEMY_CONFIG` and applies the environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(Path::new(&path))?.with_overrides(|var| std::env::var(var).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Applies `ACADEMY_*` overrides resolved through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ACADEMY_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("ACADEMY_PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ACADEMY_PORT",
                value: port,
            })?;
        }
        if let Some(path) = lookup("ACADEMY_DATABASE") {
            self.database_path = PathBuf::from(path);
        }
        Ok(self)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn file_values_override_defaults() {
        let config = Config::from_toml_str("port = 9000\ndatabase_path = \"/tmp/a.sqlite\"\n")
            .expect("valid toml");
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.database_path, PathBuf::from("/tmp/a.sqlite"));
    }

    #[test]
    fn environment_overrides_file() {
        let env = HashMap::from([
            ("ACADEMY_HOST", "0.0.0.0"),
            ("ACADEMY_PORT", "3000"),
        ]);
        let config = Config::default()
            .with_overrides(|var| env.get(var).map(|v| v.to_string()))
            .expect("valid overrides");
        assert_eq!(config.url(), "http://0.0.0.0:3000");
    }

    #[test]
    fn invalid_port_is_reported() {
        let result = Config::default().with_overrides(|var| {
            (var == "ACADEMY_PORT").then(|| "eighty".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { var: "ACADEMY_PORT", .. })
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::from_file(Path::new("/nonexistent/academy.toml")).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        assert!(matches!(
            Config::from_toml_str("port = \"not a number\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
