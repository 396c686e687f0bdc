//! Configuration management for the todo server, client and local CLI
//!
//! Sensible defaults, overridable from the environment; command-line flags
//! override the environment in the binaries.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default storage file for the local CLI
pub const DEFAULT_TODO_FILE: &str = "todo.json";

/// Default API base URL for the client
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Config file name looked up in the home directory by the client
pub const CLIENT_CONFIG_FILE: &str = ".todo_client.yaml";

/// Storage path for the local CLI (`TODO_FILE_NAME` overrides the default)
pub fn todo_file_from_env() -> PathBuf {
    match env::var("TODO_FILE_NAME") {
        Ok(val) if !val.is_empty() => PathBuf::from(val),
        _ => PathBuf::from(DEFAULT_TODO_FILE),
    }
}

/// Server configuration loaded from environment with defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: localhost)
    pub host: String,

    /// Server port (default: 8080)
    pub port: u16,

    /// JSON file backing the list (default: todo_server.json)
    pub storage_path: PathBuf,

    /// Request timeout in seconds (default: 10)
    /// Requests exceeding this duration are terminated with 408 status
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            storage_path: PathBuf::from("todo_server.json"),
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults
    #[allow(clippy::field_reassign_with_default)]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("TODO_SERVER_HOST") {
            config.host = val;
        }

        if let Ok(val) = env::var("TODO_SERVER_PORT") {
            if let Ok(port) = val.parse() {
                config.port = port;
            }
        }

        if let Ok(val) = env::var("TODO_SERVER_FILE") {
            config.storage_path = PathBuf::from(val);
        }

        if let Ok(val) = env::var("TODO_REQUEST_TIMEOUT") {
            if let Ok(n) = val.parse::<u64>() {
                config.request_timeout_secs = n.max(1);
            }
        }

        config
    }

    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log the current configuration
    pub fn log(&self) {
        info!("Configuration:");
        info!("   Host: {}", self.host);
        info!("   Port: {}", self.port);
        info!("   Storage: {:?}", self.storage_path);
        info!("   Request timeout: {}s", self.request_timeout_secs);
    }
}

/// On-disk client settings (YAML)
#[derive(Debug, Default, Deserialize)]
pub struct ClientFileConfig {
    #[serde(rename = "api-url")]
    pub api_url: Option<String>,
}

impl ClientFileConfig {
    /// Read a config file; a missing file yields empty settings
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => Ok(Self::default()),
            Ok(text) => serde_yaml::from_str(&text)
                .map_err(|e| anyhow::anyhow!("invalid config file {}: {e}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(anyhow::anyhow!(
                "failed to read config file {}: {e}",
                path.display()
            )),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    /// Resolve the API URL.
    ///
    /// `explicit` carries the flag or `TODO_API_URL` value (clap merges the
    /// two); otherwise the config file is consulted, then the default.
    pub fn resolve(explicit: Option<String>, config_file: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(url) = explicit.filter(|u| !u.is_empty()) {
            return Ok(Self::new(url));
        }

        let path = match config_file {
            Some(p) => Some(p.to_path_buf()),
            None => default_client_config_path(),
        };
        if let Some(path) = path {
            if let Some(url) = ClientFileConfig::load(&path)?.api_url {
                return Ok(Self::new(url));
            }
        }

        Ok(Self::new(DEFAULT_API_URL))
    }

    fn new(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            api_url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// `$HOME/.todo_client.yaml`, if a home directory is known
pub fn default_client_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CLIENT_CONFIG_FILE))
}
