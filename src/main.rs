//! esxi-shell - browse the VMs of an ESXi host

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use esxi_shell::cli::HostArgs;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Browse the VMs of an ESXi host")]
struct Cli {
    #[command(flatten)]
    host: HostArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// index the VMs and open the interactive shell (default)
    Shell,
    /// print a full summary of every VM, descending into folders and vApps
    Dump,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::run(&cli.host, commands::shell::run),
        Commands::Dump => commands::run(&cli.host, commands::dump::run),
    }
}
