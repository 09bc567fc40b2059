//! inventory node model
//!
//! the remote hierarchy is a graph of folders, vApps and VMs referenced by
//! managed object id. the client adapter resolves each id into one of the
//! variants below exactly once, so the walker never probes capabilities.

use std::fmt;

use serde::Deserialize;

/// remote identifier of an inventory object, e.g. `group-v3` or `vm-42`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct NodeRef(pub String);

impl NodeRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// a datacenter under the root folder
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Datacenter {
    pub name: String,
    #[serde(default)]
    pub vm_folder: Option<NodeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PowerState::PoweredOn => "poweredOn",
            PowerState::PoweredOff => "poweredOff",
            PowerState::Suspended => "suspended",
            PowerState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// read-only status view of one VM
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VmSummary {
    pub name: String,
    pub path: String,
    pub guest_os: String,
    pub uuid: String,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default = "unknown_power_state")]
    pub power_state: PowerState,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

fn unknown_power_state() -> PowerState {
    PowerState::Unknown
}

/// one resolved inventory object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InventoryNode {
    Folder {
        name: String,
        #[serde(default)]
        children: Vec<NodeRef>,
    },
    #[serde(rename = "vapp")]
    VAppGroup {
        name: String,
        #[serde(default)]
        vms: Vec<NodeRef>,
    },
    #[serde(rename = "vm")]
    Leaf(VmSummary),
}

impl InventoryNode {
    pub fn name(&self) -> &str {
        match self {
            InventoryNode::Folder { name, .. } | InventoryNode::VAppGroup { name, .. } => name,
            InventoryNode::Leaf(vm) => &vm.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_deserialize_by_type_tag() {
        let folder: InventoryNode =
            serde_json::from_str(r#"{"type": "folder", "name": "vm", "children": ["vm-1"]}"#).unwrap();
        assert_eq!(
            folder,
            InventoryNode::Folder {
                name: "vm".into(),
                children: vec![NodeRef::new("vm-1")],
            }
        );

        let vapp: InventoryNode =
            serde_json::from_str(r#"{"type": "vapp", "name": "stack", "vms": []}"#).unwrap();
        assert_eq!(vapp.name(), "stack");

        let leaf: InventoryNode = serde_json::from_str(
            r#"{"type": "vm", "name": "web01", "path": "[ds1] web01/web01.vmx",
                "guest_os": "Ubuntu Linux (64-bit)", "uuid": "4201", "power_state": "poweredOn"}"#,
        )
        .unwrap();
        match leaf {
            InventoryNode::Leaf(vm) => {
                assert_eq!(vm.power_state, PowerState::PoweredOn);
                assert_eq!(vm.annotation, None);
            }
            other => panic!("expected a vm, got {:?}", other),
        }
    }

    #[test]
    fn unrecognized_power_state_is_unknown() {
        let state: PowerState = serde_json::from_str(r#""standby""#).unwrap();
        assert_eq!(state, PowerState::Unknown);
        assert_eq!(state.to_string(), "unknown");
    }
}
