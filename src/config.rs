//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the pokedex home
//! directory and covers the remote endpoint and request timeout. A missing
//! file yields the defaults; the catalog works out of the box.

use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PokedexError, Result};
use crate::paths::config_path;

/// Default index endpoint. Detail locators are derived from it.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the remote species index
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Persist the configuration to its YAML file.
    pub fn save(&self) -> Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api_base_url" => Ok(self.api_base_url.clone()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            _ => Err(PokedexError::Config(format!("unknown key '{}'", key))),
        }
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_base_url" => {
                if value.is_empty() {
                    return Err(PokedexError::Config("api_base_url cannot be empty".to_string()));
                }
                self.api_base_url = value.trim_end_matches('/').to_string();
                Ok(())
            }
            "request_timeout" => {
                let seconds: u64 = value.parse().map_err(|_| {
                    PokedexError::Config(format!("invalid timeout '{}', expected seconds", value))
                })?;
                self.request_timeout = seconds;
                Ok(())
            }
            _ => Err(PokedexError::Config(format!("unknown key '{}'", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = Config::default();
        config.set("request_timeout", "10").unwrap();
        assert_eq!(config.get("request_timeout").unwrap(), "10");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_set_strips_trailing_slash() {
        let mut config = Config::default();
        config.set("api_base_url", "http://localhost:9000/pokemon/").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/pokemon");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(config.get("nope").is_err());
        assert!(config.set("nope", "x").is_err());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let mut config = Config::default();
        assert!(config.set("request_timeout", "soon").is_err());
    }

    #[test]
    #[serial]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: #[serial] ensures single-threaded access to the env
        unsafe { std::env::set_var("POKEDEX_HOME", dir.path()) };
        let config = Config::load().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        unsafe { std::env::remove_var("POKEDEX_HOME") };
    }

    #[test]
    #[serial]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        // SAFETY: #[serial] ensures single-threaded access to the env
        unsafe { std::env::set_var("POKEDEX_HOME", dir.path()) };
        let mut config = Config::default();
        config.set("api_base_url", "http://localhost:9000/pokemon").unwrap();
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:9000/pokemon");
        unsafe { std::env::remove_var("POKEDEX_HOME") };
    }
}
