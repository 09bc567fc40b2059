//! command outcomes and the shutdown path shared by every command
//!
//! whatever a command body returns, [`finish`] reports it and then closes the
//! connection exactly once.

use std::fmt;
use std::io::Write;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{error, info};

use crate::client::{HostClient, Inventory};
use crate::error::{EsxiError, Result};
use crate::render::render_summary;
use crate::session::Connection;
use crate::walker::walk_datacenters;

/// how a command body finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Interrupted,
}

/// what the ctrl-c handler should do with one signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// first signal, handed to the main thread
    Queued,
    /// repeat signal with a live session: cleanup still has to run
    Pending,
    /// repeat signal before any session exists, nothing to clean up
    ForceExit,
}

pub fn on_interrupt(tx: &Sender<()>, session_live: &AtomicBool) -> InterruptAction {
    match tx.try_send(()) {
        Err(TrySendError::Full(())) if !session_live.load(Ordering::SeqCst) => {
            InterruptAction::ForceExit
        }
        Err(TrySendError::Full(())) => InterruptAction::Pending,
        _ => InterruptAction::Queued,
    }
}

/// write a full summary of every VM, descending into folders and vApps
pub fn dump<I, W>(inventory: &I, interrupts: &Receiver<()>, out: &mut W) -> Result<Outcome>
where
    I: Inventory + ?Sized,
    W: Write,
{
    let mut write_err = None;
    let walked = walk_datacenters(inventory, interrupts, |vm| {
        if write_err.is_none() {
            write_err = out.write_all(render_summary(vm).as_bytes()).err();
        }
    });

    let count = match walked {
        Ok(count) => count,
        Err(EsxiError::Interrupted) => return Ok(Outcome::Interrupted),
        Err(e) => return Err(e),
    };
    if let Some(e) = write_err {
        return Err(e.into());
    }
    out.flush()?;

    info!("{} vms found", count);
    Ok(Outcome::Completed)
}

/// report the outcome, then disconnect. the returned code is the process exit
pub fn finish<C, E, W>(
    result: std::result::Result<Outcome, E>,
    conn: Option<&mut Connection<C>>,
    out: &mut W,
) -> ExitCode
where
    C: HostClient,
    E: fmt::Debug,
    W: Write,
{
    let code = match result {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            let _ = writeln!(out, "\nProgram stopped by user... ");
            let _ = out.flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("a fatal or unhandled error has been thrown: {:?}", e);
            ExitCode::FAILURE
        }
    };

    info!("---------- Cleaning up ----------");
    info!("disconnecting from server");
    match conn {
        Some(conn) => {
            if let Err(e) = conn.disconnect() {
                error!("disconnect failed: {}", e);
            }
        }
        None => info!("no connection to close"),
    }
    info!("---------- Clean up complete ----------");

    code
}
