//! per-run state handed to the walker and the shell

use crossbeam_channel::Receiver;

use crate::client::Inventory;
use crate::config::Settings;
use crate::error::Result;
use crate::table::{MergePolicy, VmTable};
use crate::walker::build_table;

pub struct Context {
    pub settings: Settings,
    pub merge_policy: MergePolicy,
    pub table: VmTable,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            merge_policy: MergePolicy::default(),
            table: VmTable::new(),
        }
    }

    /// rebuild the VM table from the session's inventory. returns its size.
    /// an interrupt leaves the previous table in place
    pub fn index<I: Inventory + ?Sized>(
        &mut self,
        inventory: &I,
        interrupts: &Receiver<()>,
    ) -> Result<usize> {
        self.table = build_table(inventory, self.merge_policy, interrupts)?;
        Ok(self.table.len())
    }
}
