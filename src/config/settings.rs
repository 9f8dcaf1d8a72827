// Configuration structs

use serde::Deserialize;

/// Connection settings for the wallet daemon
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonSettings {
    /// Daemon address as host:port (e.g., "82.165.218.56:17081")
    #[serde(default = "default_address")]
    pub address: String,

    /// Connect over HTTPS instead of HTTP
    #[serde(default)]
    pub ssl: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_address() -> String {
    "82.165.218.56:17081".to_string()
}

impl Default for DaemonSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            ssl: false,
            timeout_seconds: None,
        }
    }
}

impl DaemonSettings {
    /// Base URL for daemon requests, scheme chosen by the ssl flag
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}", scheme, self.address)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Daemon connection settings
    #[serde(default)]
    pub daemon: DaemonSettings,
}
