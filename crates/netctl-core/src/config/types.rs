//! Configuration type definitions for netctl.
//!
//! # Example Configuration
//!
//! ```toml
//! [store]
//! networks_dir = "/var/lib/netctl/networks"
//!
//! [prompt]
//! assume_no = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration derived from environment variables and system
/// defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all netctl data (default: ~/.netctl, or $NETCTL_HOME)
    pub netctl_dir: PathBuf,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from the user config (`~/.netctl/config.toml`) and then the project
/// config (`./.netctl/config.toml`). Project values override user values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NetctlConfig {
    /// Network record storage
    #[serde(default)]
    pub store: StoreConfig,

    /// Interactive confirmation behavior
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Where network records are stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoreConfig {
    /// Directory holding one JSON record per network.
    /// Default: `<netctl_dir>/networks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks_dir: Option<PathBuf>,
}

/// Confirmation prompt settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PromptConfig {
    /// Decline every confirmation without reading stdin. Default: false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_no: Option<bool>,
}
