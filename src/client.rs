//! collaborator seam for the remote host
//!
//! everything that actually talks to a hypervisor lives behind these traits.
//! the rest of the crate only sees datacenters and resolved inventory nodes.

use crate::config::Credentials;
use crate::error::Result;
use crate::inventory::{Datacenter, InventoryNode, NodeRef};

/// read access to a connected host's inventory
pub trait Inventory {
    /// datacenters under the root inventory folder
    fn datacenters(&self) -> Result<Vec<Datacenter>>;

    /// resolve a remote id into its node variant
    fn resolve(&self, node: &NodeRef) -> Result<InventoryNode>;
}

/// trait for clients that can open and close sessions on a host
pub trait HostClient {
    type Session: Inventory;

    /// `secure` enables certificate validation on the transport
    fn connect(&self, credentials: &Credentials, secure: bool) -> Result<Self::Session>;

    fn disconnect(&self, session: Self::Session) -> Result<()>;
}
