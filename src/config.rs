//! Server configuration
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (see [`crate::paths`] for the lookup order)
//! 3. `TODOAPP_*` environment variables
//! 4. Command-line flags (applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;
use crate::service::DEFAULT_PAGE_SIZE;

/// Environment variable overriding the bind address
pub const ENV_BIND: &str = "TODOAPP_BIND";
/// Environment variable overriding the port
pub const ENV_PORT: &str = "TODOAPP_PORT";
/// Environment variable overriding the worker count
pub const ENV_WORKERS: &str = "TODOAPP_WORKERS";
/// Environment variable overriding the page size
pub const ENV_PAGE_SIZE: &str = "TODOAPP_PAGE_SIZE";
/// Environment variable overriding the CORS origin
pub const ENV_CORS_ORIGIN: &str = "TODOAPP_CORS_ORIGIN";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// List endpoint settings
    #[serde(default)]
    pub list: ListConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub bind: String,
    /// Port to listen on
    pub port: u16,
    /// Number of request worker threads
    pub workers: usize,
    /// Value of `Access-Control-Allow-Origin`; empty disables CORS headers
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
            cors_origin: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// `bind:port`, as accepted by the listener
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// CORS origin to advertise, if any
    #[must_use]
    pub fn cors_origin(&self) -> Option<&str> {
        Some(self.cors_origin.as_str()).filter(|origin| !origin.is_empty())
    }
}

/// List endpoint settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Tasks per page
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file and the environment.
    ///
    /// With `explicit` set, that file must exist. Otherwise the first existing
    /// file from [`paths::config_candidates`] is used, or the defaults if none
    /// exists.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match Self::locate(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        paths::config_candidates().into_iter().find(|path| path.is_file())
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse TOML; missing sections and keys take their defaults
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply `TODOAPP_*` overrides from the process environment
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `TODOAPP_*` overrides from an arbitrary lookup.
    ///
    /// Unset and empty variables are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(bind) = get(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(raw) = get(ENV_PORT) {
            self.server.port = parse_env(ENV_PORT, &raw)?;
        }
        if let Some(raw) = get(ENV_WORKERS) {
            self.server.workers = parse_env(ENV_WORKERS, &raw)?;
        }
        if let Some(raw) = get(ENV_PAGE_SIZE) {
            self.list.page_size = parse_env(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(origin) = lookup(ENV_CORS_ORIGIN) {
            // An explicitly empty origin disables CORS.
            self.server.cors_origin = origin;
        }
        Ok(())
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.list.page_size == 0 {
            anyhow::bail!("list.page_size must be at least 1");
        }
        if self.server.workers == 0 {
            anyhow::bail!("server.workers must be at least 1");
        }
        if self.server.bind.trim().is_empty() {
            anyhow::bail!("server.bind must not be empty");
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> anyhow::Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {key}: '{raw}'"))
}
