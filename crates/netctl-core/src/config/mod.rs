//! # Configuration System
//!
//! Hierarchical TOML configuration for netctl.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.netctl/config.toml` (global user preferences)
//! 3. **Project config** - `./.netctl/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! The user config lives under `$NETCTL_HOME` when that variable is set.
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use netctl_core::config::{Config, NetctlConfig};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let runtime = Config::new();
//!     let config = NetctlConfig::load_hierarchy(&runtime)?;
//!     let networks_dir = config.networks_dir(&runtime);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use defaults::NETCTL_HOME_ENV;
pub use loading::validate_config;
pub use types::{Config, NetctlConfig, PromptConfig, StoreConfig};

impl NetctlConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy(runtime: &Config) -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy(runtime)
    }
}
