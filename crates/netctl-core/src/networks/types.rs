use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::NetworkError;

/// Metadata recorded for one network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkResource {
    pub id: String,
    pub name: String,

    #[serde(default = "default_driver")]
    pub driver: String,

    #[serde(default = "default_scope")]
    pub scope: String,

    /// Routing-mesh network shared by every node of the cluster.
    #[serde(default)]
    pub ingress: bool,

    #[serde(default)]
    pub internal: bool,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Containers currently attached to the network.
    #[serde(default)]
    pub endpoints: Vec<String>,

    pub created: DateTime<Utc>,
}

fn default_driver() -> String {
    "bridge".to_string()
}

fn default_scope() -> String {
    "local".to_string()
}

impl NetworkResource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            driver: default_driver(),
            scope: default_scope(),
            ingress: false,
            internal: false,
            labels: BTreeMap::new(),
            endpoints: Vec::new(),
            created: Utc::now(),
        }
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    pub fn with_ingress(mut self, ingress: bool) -> Self {
        self.ingress = ingress;
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_endpoint(mut self, container: impl Into<String>) -> Self {
        self.endpoints.push(container.into());
        self
    }

    /// Removing a protected network affects every node of the cluster and
    /// needs explicit operator consent.
    pub fn is_protected(&self) -> bool {
        self.ingress
    }

    pub fn is_in_use(&self) -> bool {
        !self.endpoints.is_empty()
    }

    /// First 12 characters of the id, as shown in listings.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(12) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// What happened to one identifier during a batch removal.
#[derive(Debug)]
pub enum RemovalOutcome {
    Removed,
    /// The operator declined the confirmation prompt.
    Skipped,
    Failed(NetworkError),
}
