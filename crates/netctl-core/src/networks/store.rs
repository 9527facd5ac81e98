//! Network record persistence
//!
//! One JSON file per network under the networks directory, written atomically.

use crate::networks::errors::NetworkError;
use crate::networks::gateway::NetworkGateway;
use crate::networks::types::NetworkResource;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed [`NetworkGateway`].
#[derive(Debug, Clone)]
pub struct LocalNetworkStore {
    networks_dir: PathBuf,
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.network.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after operation error"
        );
    }
}

fn record_file_name(id: &str) -> String {
    format!("{}.json", id.replace(['/', '\\'], "_"))
}

impl LocalNetworkStore {
    pub fn new(networks_dir: impl Into<PathBuf>) -> Self {
        Self {
            networks_dir: networks_dir.into(),
        }
    }

    pub fn networks_dir(&self) -> &Path {
        &self.networks_dir
    }

    /// Write a network record, replacing any record with the same id.
    pub fn save(&self, network: &NetworkResource) -> Result<(), NetworkError> {
        fs::create_dir_all(&self.networks_dir)?;

        let record_file = self.networks_dir.join(record_file_name(&network.id));
        let json = serde_json::to_string_pretty(network).map_err(|e| {
            tracing::error!(
                event = "core.network.serialization_failed",
                network_id = %network.id,
                error = %e,
                message = "Failed to serialize network to JSON"
            );
            NetworkError::IoError {
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
        })?;

        let temp_file = record_file.with_extension("json.tmp");

        if let Err(e) = fs::write(&temp_file, &json) {
            cleanup_temp_file(&temp_file, &e);
            return Err(NetworkError::IoError { source: e });
        }

        if let Err(e) = fs::rename(&temp_file, &record_file) {
            cleanup_temp_file(&temp_file, &e);
            return Err(NetworkError::IoError { source: e });
        }

        Ok(())
    }

    /// Load every readable record. Unreadable or malformed files are skipped
    /// and counted.
    pub fn load_all(&self) -> Result<(Vec<NetworkResource>, usize), NetworkError> {
        let mut networks = Vec::new();
        let mut skipped_count = 0;

        if !self.networks_dir.exists() {
            return Ok((networks, skipped_count));
        }

        for entry in fs::read_dir(&self.networks_dir)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!(
                        event = "core.network.load_read_error",
                        file = %path.display(),
                        error = %e,
                        message = "Failed to read network file, skipping"
                    );
                    continue;
                }
            };

            match serde_json::from_str::<NetworkResource>(&content) {
                Ok(network) => networks.push(network),
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!(
                        event = "core.network.load_invalid_json",
                        file = %path.display(),
                        error = %e,
                        message = "Failed to parse network JSON, skipping"
                    );
                }
            }
        }

        Ok((networks, skipped_count))
    }

    /// Resolve by exact id, then exact name, then unique id prefix.
    fn resolve(&self, name: &str) -> Result<NetworkResource, NetworkError> {
        let (networks, _) = self.load_all()?;

        if let Some(network) = networks.iter().find(|n| n.id == name) {
            return Ok(network.clone());
        }
        if let Some(network) = networks.iter().find(|n| n.name == name) {
            return Ok(network.clone());
        }

        let mut by_prefix: Vec<NetworkResource> = networks
            .into_iter()
            .filter(|n| !name.is_empty() && n.id.starts_with(name))
            .collect();

        match by_prefix.len() {
            0 => Err(NetworkError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(by_prefix.remove(0)),
            matches => Err(NetworkError::Ambiguous {
                name: name.to_string(),
                matches,
            }),
        }
    }
}

impl NetworkGateway for LocalNetworkStore {
    fn inspect(&self, name: &str) -> Result<NetworkResource, NetworkError> {
        let network = self.resolve(name)?;
        tracing::debug!(
            event = "core.network.inspect_completed",
            name = name,
            network_id = %network.id
        );
        Ok(network)
    }

    fn remove(&self, name: &str) -> Result<(), NetworkError> {
        let network = self.resolve(name)?;

        if network.is_in_use() {
            return Err(NetworkError::InUse {
                name: name.to_string(),
                endpoints: network.endpoints.join(", "),
            });
        }

        let record_file = self.networks_dir.join(record_file_name(&network.id));
        match fs::remove_file(&record_file) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    event = "core.network.remove_nonexistent_file",
                    network_id = %network.id,
                    file = %record_file.display(),
                    message = "Network record vanished before removal"
                );
                return Err(NetworkError::NotFound {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(NetworkError::IoError { source: e }),
        }

        tracing::info!(
            event = "core.network.remove_completed",
            name = name,
            network_id = %network.id
        );
        Ok(())
    }

    fn list(&self) -> Result<Vec<NetworkResource>, NetworkError> {
        let (networks, skipped) = self.load_all()?;
        if skipped > 0 {
            tracing::warn!(
                event = "core.network.list_skipped_records",
                skipped = skipped,
                dir = %self.networks_dir.display()
            );
        }
        Ok(networks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(networks: &[NetworkResource]) -> (tempfile::TempDir, LocalNetworkStore) {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalNetworkStore::new(temp.path().join("networks"));
        for network in networks {
            store.save(network).unwrap();
        }
        (temp, store)
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalNetworkStore::new(temp.path().join("absent"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_record_and_no_temp_file() {
        let (_temp, store) = store_with(&[NetworkResource::new("abc123", "foo")]);

        assert!(store.networks_dir().join("abc123.json").exists());
        assert!(!store.networks_dir().join("abc123.json.tmp").exists());
    }

    #[test]
    fn test_save_temp_file_cleanup_on_failure() {
        let temp = tempfile::tempdir().unwrap();
        let store = LocalNetworkStore::new(temp.path());

        // A directory where the record should go forces the rename to fail
        fs::create_dir_all(temp.path().join("abc.json")).unwrap();

        let result = store.save(&NetworkResource::new("abc", "foo"));
        assert!(result.is_err());
        assert!(!temp.path().join("abc.json.tmp").exists());
    }

    #[test]
    fn test_inspect_by_id_name_and_prefix() {
        let (_temp, store) = store_with(&[
            NetworkResource::new("0123456789ab", "foo"),
            NetworkResource::new("fedcba987654", "bar"),
        ]);

        assert_eq!(store.inspect("0123456789ab").unwrap().name, "foo");
        assert_eq!(store.inspect("bar").unwrap().id, "fedcba987654");
        assert_eq!(store.inspect("fed").unwrap().name, "bar");
    }

    #[test]
    fn test_inspect_prefers_name_over_prefix() {
        let (_temp, store) = store_with(&[
            NetworkResource::new("abc111", "first"),
            NetworkResource::new("def222", "abc"),
        ]);

        assert_eq!(store.inspect("abc").unwrap().id, "def222");
    }

    #[test]
    fn test_inspect_not_found() {
        let (_temp, store) = store_with(&[]);
        let err = store.inspect("foo").unwrap_err();
        assert!(matches!(err, NetworkError::NotFound { ref name } if name == "foo"));
    }

    #[test]
    fn test_inspect_ambiguous_prefix() {
        let (_temp, store) = store_with(&[
            NetworkResource::new("aa11", "one"),
            NetworkResource::new("aa22", "two"),
        ]);

        let err = store.inspect("aa").unwrap_err();
        assert!(matches!(err, NetworkError::Ambiguous { matches: 2, .. }));
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let (_temp, store) = store_with(&[NetworkResource::new("abc", "foo")]);
        fs::write(store.networks_dir().join("broken.json"), "not json").unwrap();
        fs::write(store.networks_dir().join("notes.txt"), "ignored").unwrap();

        let (networks, skipped) = store.load_all().unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_remove_deletes_record() {
        let (_temp, store) = store_with(&[NetworkResource::new("abc", "foo")]);

        store.remove("foo").unwrap();
        assert!(!store.networks_dir().join("abc.json").exists());
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let (_temp, store) = store_with(&[NetworkResource::new("abc", "foo")]);

        store.remove("foo").unwrap();
        let err = store.remove("foo").unwrap_err();
        assert!(matches!(err, NetworkError::NotFound { .. }));
    }

    #[test]
    fn test_remove_refuses_network_in_use() {
        let (_temp, store) = store_with(&[NetworkResource::new("abc", "foo")
            .with_endpoint("web-1")
            .with_endpoint("db-1")]);

        let err = store.remove("foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error while removing network foo: network has active endpoints (web-1, db-1)"
        );
        assert!(store.networks_dir().join("abc.json").exists());
    }
}
