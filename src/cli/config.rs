//! Configuration file and environment overrides
//!
//! Precedence, lowest first: built-in defaults, JSON config file,
//! environment (`CSV_FILE_PATH`, `PORT`, `CORS_ORIGIN`), command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::config::{default_host, default_port};
use crate::http_server::HttpServerConfig;
use crate::observability::Severity;
use crate::pipeline::split_list;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the sales CSV (default "./data/sales_data.csv")
    #[serde(default = "default_data_path")]
    pub data_path: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// One of trace, info, warn, error, fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_path() -> String {
    "./data/sales_data.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// Loads the file if given, then applies process environment overrides
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CSV_FILE_PATH") {
            self.data_path = path;
        }

        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }

        if let Some(origins) = lookup("CORS_ORIGIN") {
            self.cors_origins = split_list(Some(origins.as_str())).into_iter().collect();
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if self.data_path.trim().is_empty() {
            return Err(CliError::config_error("data_path must not be empty"));
        }

        self.log_severity()?;

        Ok(())
    }

    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Get data file as Path
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path)
    }

    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_path, "./data/sales_data.csv");
        assert_eq!(config.port, 5000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_path": "/srv/sales.csv", "log_level": "warn"}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_path, "/srv/sales.csv");
        assert_eq!(config.log_severity().unwrap(), Severity::Warn);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("CSV_FILE_PATH", "/data/other.csv"),
            ("PORT", "8081"),
            ("CORS_ORIGIN", "http://a.test, http://b.test"),
        ]);
        let mut config = Config::default();
        config.apply_env(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.data_path, "/data/other.csv");
        assert_eq!(config.port, 8081);
        assert_eq!(config.cors_origins, ["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_port_override() {
        let vars = env(&[("PORT", "eighty")]);
        let mut config = Config::default();
        assert!(config.apply_env(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn test_validation() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            data_path: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
