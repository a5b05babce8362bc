//! Configuration via `rackstore.toml`
//!
//! The file lives at the repository root next to `data/`. Every field has a
//! default, so a missing file (or an empty one) means "all defaults". Command
//! line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name placed in the repository root.
pub const CONFIG_FILE_NAME: &str = "rackstore.toml";

/// Failure reading or writing `rackstore.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `[web]` section: where the inventory UI listens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl WebConfig {
    /// `host:port`, ready for a socket bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Repository configuration loaded from `rackstore.toml`.
///
/// # Example
///
/// ```toml
/// log = "info"
///
/// [web]
/// host = "0.0.0.0"
/// port = 8000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackConfig {
    /// Default tracing filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log")]
    pub log: String,
    #[serde(default)]
    pub web: WebConfig,
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for RackConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            web: WebConfig::default(),
        }
    }
}

impl RackConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Rackstore configuration
#
# Tracing filter used when RUST_LOG is not set
# ("error", "warn", "info", "debug", or directives like "rackstore::store=debug")
log = "info"

[web]
# Address the inventory UI listens on
host = "0.0.0.0"
port = 8000
"#
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<root>/rackstore.toml` if present, defaults otherwise.
    ///
    /// A file that exists but does not parse is an error, not a fallback.
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}
