//! netctl-core: Core library for inspecting and removing local network resources
//!
//! # Main Entry Points
//!
//! - [`networks`] - Network records, the gateway trait, batch removal and prune
//! - [`prompt`] - Interactive yes/no confirmation
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod networks;
pub mod prompt;

// Re-export commonly used types at crate root for convenience
pub use config::{Config, NetctlConfig};
pub use errors::{ConfigError, NetctlError, NetctlResult};
pub use networks::{
    BatchError, LocalNetworkStore, NetworkError, NetworkGateway, NetworkResource,
};
pub use prompt::{AssumeNo, ConfirmationPrompt, StreamPrompt};

// Re-export the operations module as the primary API
pub use networks as network_ops;

// Re-export logging initialization
pub use logging::init_logging;
