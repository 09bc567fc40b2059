//! shared connect / run / clean up harness for every command

use std::io;
use std::path::Path;
use std::process::{self, ExitCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context as _;
use crossbeam_channel::{Receiver, bounded};
use log::{error, info};

use esxi_shell::cli::HostArgs;
use esxi_shell::client::Inventory;
use esxi_shell::config::Settings;
use esxi_shell::context::Context;
use esxi_shell::runner::{self, InterruptAction, Outcome};
use esxi_shell::session::Connection;
use esxi_shell::snapshot::SnapshotClient;

pub mod dump;
pub mod shell;

/// connect, run `body` against the session, then always disconnect once
pub fn run<F>(args: &HostArgs, body: F) -> ExitCode
where
    F: FnOnce(&mut Context, &dyn Inventory, &Receiver<()>) -> anyhow::Result<Outcome>,
{
    info!("---------- Starting esxi-shell ----------");

    let session_live = Arc::new(AtomicBool::new(false));
    let interrupts = match interrupt_channel(session_live.clone()) {
        Ok(rx) => rx,
        Err(e) => {
            error!("failed to install interrupt handler: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = Context::new(Settings::load(&args.settings));
    let mut conn: Option<Connection<SnapshotClient>> = None;

    let result = connect_and_run(args, &mut ctx, &mut conn, &session_live, &interrupts, body);

    let code = runner::finish(result, conn.as_mut(), &mut io::stdout());
    session_live.store(false, Ordering::SeqCst);
    code
}

fn connect_and_run<F>(
    args: &HostArgs,
    ctx: &mut Context,
    conn: &mut Option<Connection<SnapshotClient>>,
    session_live: &AtomicBool,
    interrupts: &Receiver<()>,
    body: F,
) -> anyhow::Result<Outcome>
where
    F: FnOnce(&mut Context, &dyn Inventory, &Receiver<()>) -> anyhow::Result<Outcome>,
{
    let credentials = ctx.settings.credentials().context("cannot connect")?;
    let client = open_client(&args.inventory)?;

    let conn = conn.insert(Connection::new(client));
    let session = conn
        .connect(&credentials, !args.no_ssl)
        .context("cannot connect")?;
    session_live.store(true, Ordering::SeqCst);
    info!("connected to {}", credentials.host);

    // connect blocks, so a ctrl-c during it is only seen here
    if interrupts.try_recv().is_ok() {
        return Ok(Outcome::Interrupted);
    }

    let inventory: &dyn Inventory = session;
    body(ctx, inventory, interrupts)
}

fn open_client(path: &Path) -> anyhow::Result<SnapshotClient> {
    SnapshotClient::open(path).with_context(|| format!("cannot open inventory {}", path.display()))
}

/// route ctrl-c into a channel. a repeat ctrl-c only kills the process while
/// no session is open; once connected, cleanup has to run first
fn interrupt_channel(session_live: Arc<AtomicBool>) -> anyhow::Result<Receiver<()>> {
    let (tx, rx) = bounded(1);
    ctrlc::set_handler(move || match runner::on_interrupt(&tx, &session_live) {
        InterruptAction::Queued => {}
        InterruptAction::Pending => eprintln!("\nstopping, waiting for cleanup"),
        InterruptAction::ForceExit => {
            eprintln!("\nforcing exit");
            process::exit(130);
        }
    })?;
    Ok(rx)
}
