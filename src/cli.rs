//! common CLI args for all commands

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct HostArgs {
    /// settings file holding host, username and password
    #[arg(short, long, default_value = "settings.json")]
    pub settings: PathBuf,
    /// inventory snapshot served as the host
    #[arg(short, long, default_value = "inventory.json")]
    pub inventory: PathBuf,
    /// connect without certificate validation
    #[arg(long)]
    pub no_ssl: bool,
}
