pub mod errors;
pub mod gateway;
pub mod inspect;
pub mod prune;
pub mod remove;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod fakes;

pub use errors::{BatchError, FailedOperation, NetworkError};
pub use gateway::NetworkGateway;
pub use inspect::{inspect_networks, list_networks};
pub use prune::{PRUNE_WARNING, PruneReport, prune_networks};
pub use remove::{INGRESS_WARNING, remove_networks};
pub use store::LocalNetworkStore;
pub use types::{NetworkResource, RemovalOutcome};
