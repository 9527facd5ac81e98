//! Network gateway trait definition.

use super::errors::NetworkError;
use super::types::NetworkResource;

/// Boundary over which network lookups and removals are issued.
///
/// The CLI uses the file-backed [`LocalNetworkStore`](super::store::LocalNetworkStore);
/// any other backend (a daemon client, a test fake) plugs in by implementing
/// this trait.
pub trait NetworkGateway {
    /// Resolve an identifier (id, name or unique id prefix) to its metadata.
    fn inspect(&self, name: &str) -> Result<NetworkResource, NetworkError>;

    /// Delete the network the identifier resolves to.
    fn remove(&self, name: &str) -> Result<(), NetworkError>;

    /// Every known network, in no particular order.
    fn list(&self) -> Result<Vec<NetworkResource>, NetworkError>;
}

impl<G: NetworkGateway + ?Sized> NetworkGateway for &G {
    fn inspect(&self, name: &str) -> Result<NetworkResource, NetworkError> {
        (**self).inspect(name)
    }

    fn remove(&self, name: &str) -> Result<(), NetworkError> {
        (**self).remove(name)
    }

    fn list(&self) -> Result<Vec<NetworkResource>, NetworkError> {
        (**self).list()
    }
}
