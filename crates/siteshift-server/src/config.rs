//! Server configuration
//!
//! A small TOML file, every field optional; command-line flags override
//! whatever the file sets.
//!
//! ```toml
//! bind = "0.0.0.0:8080"
//! data = "/var/lib/siteshift/checklist.json"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Configuration failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("config file could not be read: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML
    #[error("config file failed to parse: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime configuration of the server binary
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Store file path; `None` keeps the checklist in memory only
    #[serde(default)]
    pub data: Option<PathBuf>,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            data: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_bind_locally_in_memory() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.data, None);
    }

    #[test]
    fn loads_a_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bind = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "data = \"/tmp/checklist.json\"").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.data, Some(PathBuf::from("/tmp/checklist.json")));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.bind, DEFAULT_BIND);
        assert_eq!(config.data, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = 8080").unwrap();
        assert!(matches!(
            ServerConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
