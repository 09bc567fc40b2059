//! inventory traversal
//!
//! two entry points share the same node model: [`walk_datacenters`] recurses
//! through folders and vApps visiting every VM, and [`build_table`] only looks
//! at the VMs sitting directly in each datacenter's VM folder.
//!
//! both poll the interrupt channel before every remote lookup and bail out
//! with [`EsxiError::Interrupted`] once it fires.

use crossbeam_channel::Receiver;
use log::debug;

use crate::client::Inventory;
use crate::error::{EsxiError, Result};
use crate::inventory::{InventoryNode, NodeRef, VmSummary};
use crate::table::{MergePolicy, VmTable};

/// hard cap on recursion; nodes deeper than this are never resolved
pub const MAX_DEPTH: usize = 10;

/// visit every VM reachable from `node`, which sits at `depth`
pub fn walk<I, F>(
    inventory: &I,
    node: &NodeRef,
    depth: usize,
    interrupts: &Receiver<()>,
    visit: &mut F,
) -> Result<()>
where
    I: Inventory + ?Sized,
    F: FnMut(&VmSummary),
{
    // cyclic or malformed inventories stop here
    if depth > MAX_DEPTH {
        return Ok(());
    }
    check_interrupt(interrupts)?;

    match inventory.resolve(node)? {
        InventoryNode::Folder { children, .. } => {
            for child in &children {
                walk(inventory, child, depth + 1, interrupts, visit)?;
            }
        }
        // vApps don't nest in practice, the depth cap still applies
        InventoryNode::VAppGroup { vms, .. } => {
            for child in &vms {
                walk(inventory, child, depth + 1, interrupts, visit)?;
            }
        }
        InventoryNode::Leaf(vm) => visit(&vm),
    }
    Ok(())
}

/// walk every datacenter's VM folder. returns the number of VMs visited
pub fn walk_datacenters<I, F>(inventory: &I, interrupts: &Receiver<()>, mut visit: F) -> Result<usize>
where
    I: Inventory + ?Sized,
    F: FnMut(&VmSummary),
{
    let mut count = 0;
    for dc in inventory.datacenters()? {
        let Some(folder) = dc.vm_folder else {
            debug!("datacenter {} has no vm folder", dc.name);
            continue;
        };
        for child in top_level(inventory, &folder, interrupts)? {
            walk(inventory, &child, 1, interrupts, &mut |vm: &VmSummary| {
                count += 1;
                visit(vm);
            })?;
        }
    }
    Ok(count)
}

/// build the name table from the VMs directly under each VM folder
pub fn build_table<I>(
    inventory: &I,
    policy: MergePolicy,
    interrupts: &Receiver<()>,
) -> Result<VmTable>
where
    I: Inventory + ?Sized,
{
    let mut table = VmTable::with_policy(policy);
    for dc in inventory.datacenters()? {
        let Some(folder) = dc.vm_folder else {
            debug!("datacenter {} has no vm folder", dc.name);
            continue;
        };
        for child in top_level(inventory, &folder, interrupts)? {
            check_interrupt(interrupts)?;
            match inventory.resolve(&child)? {
                InventoryNode::Leaf(vm) => {
                    table.insert(vm);
                }
                other => debug!("not indexing '{}' ({}) in {}", other.name(), child, dc.name),
            }
        }
    }
    Ok(table)
}

fn top_level<I>(inventory: &I, folder: &NodeRef, interrupts: &Receiver<()>) -> Result<Vec<NodeRef>>
where
    I: Inventory + ?Sized,
{
    check_interrupt(interrupts)?;
    Ok(match inventory.resolve(folder)? {
        InventoryNode::Folder { children, .. } => children,
        InventoryNode::VAppGroup { vms, .. } => vms,
        InventoryNode::Leaf(_) => Vec::new(),
    })
}

fn check_interrupt(interrupts: &Receiver<()>) -> Result<()> {
    match interrupts.try_recv() {
        Ok(()) => Err(EsxiError::Interrupted),
        Err(_) => Ok(()),
    }
}
