//! Batch network removal.
//!
//! Identifiers are handled one at a time, in order. A failure on one
//! identifier is recorded and the batch moves on; the caller gets every
//! failure at the end as a single [`BatchError`].

use std::io::Write;

use tracing::{info, warn};

use super::errors::{BatchError, FailedOperation};
use super::gateway::NetworkGateway;
use super::types::RemovalOutcome;
use crate::prompt::ConfirmationPrompt;

pub const INGRESS_WARNING: &str = "WARNING! Before removing the routing-mesh network, \
    make sure all the nodes in your swarm run the same docker engine version. \
    Otherwise, removal may not be effective and functionality of newly create \
    ingress networks will be impaired.\nAre you sure you want to continue?";

/// Remove every network in `names`.
///
/// Protected (ingress) networks are only removed after `prompt` consents;
/// a declined prompt skips the network silently. Each removed identifier is
/// written to `out` on its own line, as given.
///
/// # Errors
///
/// Returns a [`BatchError`] holding every lookup and removal failure, in the
/// order they occurred, once all identifiers have been processed.
pub fn remove_networks<G, P, W>(
    gateway: &G,
    prompt: &mut P,
    out: &mut W,
    names: &[String],
) -> Result<(), BatchError>
where
    G: NetworkGateway + ?Sized,
    P: ConfirmationPrompt + ?Sized,
    W: Write + ?Sized,
{
    info!(event = "core.network.remove_batch_started", count = names.len());

    let mut failures: Vec<FailedOperation> = Vec::new();
    let mut removed = 0usize;
    let mut skipped = 0usize;

    for name in names {
        match remove_one(gateway, prompt, name) {
            RemovalOutcome::Removed => {
                removed += 1;
                if let Err(e) = writeln!(out, "{}", name) {
                    warn!(
                        event = "core.network.remove_output_failed",
                        name = name.as_str(),
                        error = %e
                    );
                }
            }
            RemovalOutcome::Skipped => {
                skipped += 1;
                info!(event = "core.network.remove_skipped", name = name.as_str());
            }
            RemovalOutcome::Failed(error) => {
                warn!(
                    event = "core.network.remove_failed",
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

    info!(
        event = "core.network.remove_batch_completed",
        removed = removed,
        skipped = skipped,
        failed = failures.len()
    );

    BatchError::from_failures(failures)
}

fn remove_one<G, P>(gateway: &G, prompt: &mut P, name: &str) -> RemovalOutcome
where
    G: NetworkGateway + ?Sized,
    P: ConfirmationPrompt + ?Sized,
{
    let network = match gateway.inspect(name) {
        Ok(network) => network,
        Err(e) => return RemovalOutcome::Failed(e),
    };

    if network.is_protected() && !prompt.confirm(INGRESS_WARNING) {
        return RemovalOutcome::Skipped;
    }

    match gateway.remove(name) {
        Ok(()) => RemovalOutcome::Removed,
        Err(e) => RemovalOutcome::Failed(e),
    }
}
