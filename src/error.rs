//! error types for esxi-shell

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// why a connect attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailure {
    Authentication,
    Network,
    Certificate,
}

impl fmt::Display for ConnectFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConnectFailure::Authentication => "authentication failed",
            ConnectFailure::Network => "host unreachable",
            ConnectFailure::Certificate => "certificate validation failed",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum EsxiError {
    #[error("Setting '{0}' is missing or blank")]
    MissingSetting(&'static str),

    #[error("Connection to {host} failed: {reason}")]
    Connection { host: String, reason: ConnectFailure },

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Inventory node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid inventory snapshot {}: {msg}", .path.display())]
    Snapshot { path: PathBuf, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EsxiError>;
