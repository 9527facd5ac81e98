//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.netctl/config.toml` (or `$NETCTL_HOME/config.toml`)
//! 3. **Project config** - `./.netctl/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{Config, NetctlConfig, PromptConfig, StoreConfig};
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if validation fails. Missing config files are not errors.
pub fn load_hierarchy(runtime: &Config) -> Result<NetctlConfig, ConfigError> {
    let project_path = std::env::current_dir()
        .map_err(|e| ConfigError::ConfigReadError {
            path: ".".to_string(),
            source: e,
        })?
        .join(".netctl")
        .join("config.toml");

    load_hierarchy_from(&runtime.user_config_path(), &project_path)
}

/// Load and merge the user and project config files at the given paths.
pub fn load_hierarchy_from(
    user_path: &Path,
    project_path: &Path,
) -> Result<NetctlConfig, ConfigError> {
    let mut config = NetctlConfig::default();

    for path in [user_path, project_path] {
        match load_config_file(path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<NetctlConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ConfigReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
pub fn merge_configs(base: NetctlConfig, override_config: NetctlConfig) -> NetctlConfig {
    NetctlConfig {
        store: StoreConfig {
            networks_dir: override_config
                .store
                .networks_dir
                .or(base.store.networks_dir),
        },
        prompt: PromptConfig {
            assume_no: override_config.prompt.assume_no.or(base.prompt.assume_no),
        },
    }
}

pub fn validate_config(config: &NetctlConfig) -> Result<(), ConfigError> {
    if let Some(dir) = &config.store.networks_dir
        && dir.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "store.networks_dir cannot be empty".to_string(),
        });
    }
    Ok(())
}
