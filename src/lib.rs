//! esxi-shell: browse the VMs of an ESXi/vSphere host
//!
//! connects through a [`client::HostClient`], indexes the VMs by name and
//! serves an interactive listing shell over the result

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod inventory;
pub mod render;
pub mod runner;
pub mod session;
pub mod shell;
pub mod snapshot;
pub mod table;
pub mod walker;

#[cfg(test)]
mod testing;
