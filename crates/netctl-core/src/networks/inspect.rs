use tracing::warn;

use super::errors::FailedOperation;
use super::gateway::NetworkGateway;
use super::types::NetworkResource;

/// Look up every identifier, keeping going past failures.
///
/// Returns the resolved networks in input order alongside the failures.
pub fn inspect_networks<G>(
    gateway: &G,
    names: &[String],
) -> (Vec<NetworkResource>, Vec<FailedOperation>)
where
    G: NetworkGateway + ?Sized,
{
    let mut networks = Vec::new();
    let mut failures = Vec::new();

    for name in names {
        match gateway.inspect(name) {
            Ok(network) => networks.push(network),
            Err(error) => {
                warn!(
                    event = "core.network.inspect_failed",
                    name = name.as_str(),
                    error = %error
                );
                failures.push(FailedOperation {
                    name: name.clone(),
                    error,
                });
            }
        }
    }

    (networks, failures)
}

/// Every network sorted by name.
pub fn list_networks<G>(gateway: &G) -> Result<Vec<NetworkResource>, super::NetworkError>
where
    G: NetworkGateway + ?Sized,
{
    let mut networks = gateway.list()?;
    networks.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Ok(networks)
}
