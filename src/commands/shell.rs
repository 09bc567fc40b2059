//! shell command implementation

use std::io;

use anyhow::Context as _;
use crossbeam_channel::Receiver;
use log::info;

use esxi_shell::client::Inventory;
use esxi_shell::context::Context;
use esxi_shell::error::EsxiError;
use esxi_shell::runner::Outcome;
use esxi_shell::shell::{Shell, ShellExit, stdin_lines};

pub fn run(
    ctx: &mut Context,
    inventory: &dyn Inventory,
    interrupts: &Receiver<()>,
) -> anyhow::Result<Outcome> {
    let count = match ctx.index(inventory, interrupts) {
        Ok(count) => count,
        Err(EsxiError::Interrupted) => return Ok(Outcome::Interrupted),
        Err(e) => return Err(e).context("inventory traversal failed"),
    };
    info!("indexed {} vms", count);

    let lines = stdin_lines();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let exit = Shell::new(&ctx.table).run(&lines, interrupts, &mut out)?;
    Ok(match exit {
        ShellExit::Interrupted => Outcome::Interrupted,
        ShellExit::EndOfInput => Outcome::Completed,
    })
}
