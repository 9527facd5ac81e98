//! Removal of every unused, unprotected network.

use tracing::{info, warn};

use super::errors::{FailedOperation, NetworkError};
use super::gateway::NetworkGateway;
use super::inspect::list_networks;
use crate::prompt::ConfirmationPrompt;

pub const PRUNE_WARNING: &str = "WARNING! This will remove all custom networks not used by at least one container.\nAre you sure you want to continue?";

#[derive(Debug, Default)]
pub struct PruneReport {
    /// Names of removed networks, sorted.
    pub deleted: Vec<String>,
    pub failures: Vec<FailedOperation>,
}

/// Remove every network that is neither protected nor in use.
///
/// Unless `force` is set, `prompt` must consent first; a decline returns
/// `Ok(None)` without touching anything.
///
/// # Errors
///
/// Fails only when the network list cannot be read. Per-network removal
/// failures are collected in the report.
pub fn prune_networks<G, P>(
    gateway: &G,
    prompt: &mut P,
    force: bool,
) -> Result<Option<PruneReport>, NetworkError>
where
    G: NetworkGateway + ?Sized,
    P: ConfirmationPrompt + ?Sized,
{
    if !force && !prompt.confirm(PRUNE_WARNING) {
        info!(event = "core.network.prune_aborted");
        return Ok(None);
    }

    let mut report = PruneReport::default();

    for network in list_networks(gateway)? {
        if network.is_protected() || network.is_in_use() {
            continue;
        }

        match gateway.remove(&network.id) {
            Ok(()) => report.deleted.push(network.name),
            Err(error) => {
                warn!(
                    event = "core.network.prune_remove_failed",
                    network_id = %network.id,
                    error = %error
                );
                report.failures.push(FailedOperation {
                    name: network.name,
                    error,
                });
            }
        }
    }

    info!(
        event = "core.network.prune_completed",
        deleted = report.deleted.len(),
        failed = report.failures.len()
    );

    Ok(Some(report))
}
