//! in-memory host used by the unit tests

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::client::{HostClient, Inventory};
use crate::config::Credentials;
use crate::error::{ConnectFailure, EsxiError, Result};
use crate::inventory::{Datacenter, InventoryNode, NodeRef, PowerState, VmSummary};

pub fn credentials() -> Credentials {
    Credentials {
        host: "esxi01.lab".into(),
        username: "root".into(),
        password: "hunter2".into(),
    }
}

pub fn vm(name: &str, uuid: &str) -> VmSummary {
    VmSummary {
        name: name.into(),
        path: format!("[datastore1] {name}/{name}.vmx"),
        guest_os: "Ubuntu Linux (64-bit)".into(),
        uuid: uuid.into(),
        annotation: None,
        power_state: PowerState::PoweredOn,
        ip_address: None,
        question: None,
    }
}

/// inventory graph built by hand; ids are free-form
#[derive(Clone, Default)]
pub struct Tree {
    datacenters: Vec<Datacenter>,
    nodes: HashMap<String, InventoryNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn datacenter(mut self, name: &str, vm_folder: Option<&str>) -> Self {
        self.datacenters.push(Datacenter {
            name: name.into(),
            vm_folder: vm_folder.map(NodeRef::new),
        });
        self
    }

    pub fn folder(mut self, id: &str, children: &[&str]) -> Self {
        self.nodes.insert(
            id.into(),
            InventoryNode::Folder {
                name: id.into(),
                children: children.iter().copied().map(NodeRef::new).collect(),
            },
        );
        self
    }

    pub fn vapp(mut self, id: &str, vms: &[&str]) -> Self {
        self.nodes.insert(
            id.into(),
            InventoryNode::VAppGroup {
                name: id.into(),
                vms: vms.iter().copied().map(NodeRef::new).collect(),
            },
        );
        self
    }

    pub fn leaf(mut self, id: &str, summary: VmSummary) -> Self {
        self.nodes.insert(id.into(), InventoryNode::Leaf(summary));
        self
    }

    /// shorthand: leaf whose name and uuid are both `id`
    pub fn vm(self, id: &str) -> Self {
        self.leaf(id, vm(id, id))
    }
}

/// counts resolve calls so tests can see what the walker touched
pub struct TreeSession {
    tree: Tree,
    resolved: Cell<usize>,
}

impl TreeSession {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            resolved: Cell::new(0),
        }
    }

    pub fn resolved(&self) -> usize {
        self.resolved.get()
    }
}

impl Inventory for TreeSession {
    fn datacenters(&self) -> Result<Vec<Datacenter>> {
        Ok(self.tree.datacenters.clone())
    }

    fn resolve(&self, node: &NodeRef) -> Result<InventoryNode> {
        self.resolved.set(self.resolved.get() + 1);
        self.tree
            .nodes
            .get(node.as_str())
            .cloned()
            .ok_or_else(|| EsxiError::NodeNotFound(node.to_string()))
    }
}

#[derive(Clone, Default)]
pub struct Calls {
    connects: Rc<Cell<usize>>,
    disconnects: Rc<Cell<usize>>,
}

impl Calls {
    pub fn connects(&self) -> usize {
        self.connects.get()
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects.get()
    }
}

/// host client that records remote calls
pub struct RecordingClient {
    tree: Tree,
    refuse: Option<ConnectFailure>,
    calls: Calls,
}

impl RecordingClient {
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            refuse: None,
            calls: Calls::default(),
        }
    }

    pub fn refusing(mut self, reason: ConnectFailure) -> Self {
        self.refuse = Some(reason);
        self
    }

    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

impl HostClient for RecordingClient {
    type Session = TreeSession;

    fn connect(&self, credentials: &Credentials, _secure: bool) -> Result<TreeSession> {
        self.calls.connects.set(self.calls.connects.get() + 1);
        if let Some(reason) = self.refuse {
            return Err(EsxiError::Connection {
                host: credentials.host.clone(),
                reason,
            });
        }
        Ok(TreeSession::new(self.tree.clone()))
    }

    fn disconnect(&self, _session: TreeSession) -> Result<()> {
        self.calls.disconnects.set(self.calls.disconnects.get() + 1);
        Ok(())
    }
}
