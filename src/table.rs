//! name-keyed VM table
//!
//! vm names are not unique on the host but the table is keyed by them anyway,
//! so what happens on a clash is an explicit [`MergePolicy`].

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::warn;

use crate::inventory::VmSummary;

/// how to resolve two VMs that share a name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// later VM replaces the earlier one; the entry keeps its original position
    #[default]
    LastWriteWins,
    /// first VM seen stays, later ones are dropped
    KeepFirst,
}

/// insertion-ordered map of vm name to summary
#[derive(Debug, Clone, Default)]
pub struct VmTable {
    entries: IndexMap<String, VmSummary>,
    policy: MergePolicy,
}

impl VmTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MergePolicy) -> Self {
        Self {
            entries: IndexMap::new(),
            policy,
        }
    }

    /// insert a VM under its name. returns false if a duplicate name was seen
    pub fn insert(&mut self, vm: VmSummary) -> bool {
        match self.entries.entry(vm.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(vm);
                true
            }
            Entry::Occupied(mut slot) => {
                warn!(
                    "duplicate vm name '{}' (uuid {} vs {}), policy {:?}",
                    vm.name,
                    slot.get().uuid,
                    vm.uuid,
                    self.policy
                );
                if self.policy == MergePolicy::LastWriteWins {
                    slot.insert(vm);
                }
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&VmSummary> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VmSummary> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
