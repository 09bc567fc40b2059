//! inventory snapshot backend
//!
//! stands in for a live host: a json file holds the host's login, whether its
//! certificate is trusted, and the inventory graph keyed by managed object id.
//! connect checks the login the same way a host would and hands out a session
//! that answers inventory calls from the graph.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::client::{HostClient, Inventory};
use crate::config::Credentials;
use crate::error::{ConnectFailure, EsxiError, Result};
use crate::inventory::{Datacenter, InventoryNode, NodeRef};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    pub host: String,
    pub username: String,
    pub password: String,
    #[serde(default = "trusted_by_default")]
    pub trusted_certificate: bool,
    #[serde(default)]
    pub datacenters: Vec<Datacenter>,
    #[serde(default)]
    pub nodes: HashMap<String, InventoryNode>,
}

fn trusted_by_default() -> bool {
    true
}

/// client backed by a snapshot file
pub struct SnapshotClient {
    snapshot: Arc<Snapshot>,
}

/// session handed out by [`SnapshotClient::connect`]
pub struct SnapshotSession {
    snapshot: Arc<Snapshot>,
}

impl SnapshotClient {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| EsxiError::Snapshot {
            path: PathBuf::from(path),
            msg: e.to_string(),
        })?;
        let snapshot = serde_json::from_str(&text).map_err(|e| EsxiError::Snapshot {
            path: PathBuf::from(path),
            msg: e.to_string(),
        })?;
        debug!("opened inventory snapshot {}", path.display());
        Ok(Self::new(snapshot))
    }
}

impl HostClient for SnapshotClient {
    type Session = SnapshotSession;

    fn connect(&self, credentials: &Credentials, secure: bool) -> Result<SnapshotSession> {
        let snap = &self.snapshot;
        let refuse = |reason| EsxiError::Connection {
            host: credentials.host.clone(),
            reason,
        };

        if !credentials.host.eq_ignore_ascii_case(&snap.host) {
            return Err(refuse(ConnectFailure::Network));
        }
        if secure && !snap.trusted_certificate {
            return Err(refuse(ConnectFailure::Certificate));
        }
        if credentials.username != snap.username || credentials.password != snap.password {
            return Err(refuse(ConnectFailure::Authentication));
        }

        Ok(SnapshotSession {
            snapshot: snap.clone(),
        })
    }

    fn disconnect(&self, _session: SnapshotSession) -> Result<()> {
        Ok(())
    }
}

impl Inventory for SnapshotSession {
    fn datacenters(&self) -> Result<Vec<Datacenter>> {
        Ok(self.snapshot.datacenters.clone())
    }

    fn resolve(&self, node: &NodeRef) -> Result<InventoryNode> {
        self.snapshot
            .nodes
            .get(node.as_str())
            .cloned()
            .ok_or_else(|| EsxiError::NodeNotFound(node.to_string()))
    }
}
