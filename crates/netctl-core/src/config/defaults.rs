//! Default implementations for configuration types.

use crate::config::types::{Config, NetctlConfig};
use std::path::PathBuf;

/// Environment variable overriding the netctl data directory.
pub const NETCTL_HOME_ENV: &str = "NETCTL_HOME";

/// Resolve the netctl base directory from an optional `NETCTL_HOME` value.
///
/// Empty values are ignored. Without a home directory the temp dir is used.
pub fn resolve_netctl_dir(home_override: Option<String>) -> PathBuf {
    if let Some(dir) = home_override.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".netctl"),
        None => {
            eprintln!(
                "Warning: Could not find home directory. Set HOME or {} environment variable. \
                Using fallback directory.",
                NETCTL_HOME_ENV
            );
            std::env::temp_dir().join(".netctl")
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            netctl_dir: resolve_netctl_dir(std::env::var(NETCTL_HOME_ENV).ok()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn networks_dir(&self) -> PathBuf {
        self.netctl_dir.join("networks")
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.netctl_dir.join("config.toml")
    }
}

impl NetctlConfig {
    /// Directory holding network records, honoring `[store] networks_dir`.
    pub fn networks_dir(&self, runtime: &Config) -> PathBuf {
        self.store
            .networks_dir
            .clone()
            .unwrap_or_else(|| runtime.networks_dir())
    }

    /// Whether prompts are answered "no" without reading stdin.
    pub fn assume_no(&self) -> bool {
        self.prompt.assume_no.unwrap_or(false)
    }
}
