//! settings.json loading
//!
//! the settings file is read once at startup. a missing or broken file never
//! aborts the run here; it degrades to empty settings and the missing keys
//! surface later as a connect fault.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::error::{EsxiError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// validated host + login, ready to hand to a client
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub username: String,
    pub password: String,
}

// keep the password out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// load settings from a json file, falling back to empty settings
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("{} does not exist, using blank settings", path.display());
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<Settings>(&text).map_err(|e| e.to_string()));

        match parsed {
            Ok(settings) => {
                info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{} is corrupt or blank ({}), using blank settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// extract credentials, rejecting absent or blank fields
    pub fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            host: required("host", &self.host)?,
            username: required("username", &self.username)?,
            password: required("password", &self.password)?,
        })
    }
}

fn required(key: &'static str, value: &Option<String>) -> Result<String> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(EsxiError::MissingSetting(key)),
    }
}
