//! dump command implementation

use std::io;

use anyhow::Context as _;
use crossbeam_channel::Receiver;

use esxi_shell::client::Inventory;
use esxi_shell::context::Context;
use esxi_shell::runner::{self, Outcome};

pub fn run(
    _ctx: &mut Context,
    inventory: &dyn Inventory,
    interrupts: &Receiver<()>,
) -> anyhow::Result<Outcome> {
    let stdout = io::stdout();
    runner::dump(inventory, interrupts, &mut stdout.lock()).context("inventory traversal failed")
}
