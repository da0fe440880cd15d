//! Persisted zone-dialog defaults
//!
//! The last parameters accepted in the zone dialog are saved to disk and
//! offered as the starting values next time. A missing or corrupt file
//! falls back to built-in defaults; it is never an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::zones::ZoneParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDefaults {
    pub params: ZoneParams,
}

impl ZoneDefaults {
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                debug!(path = %path.display(), "no stored zone defaults, using built-ins");
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(defaults) => defaults,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    %err,
                    "stored zone defaults unreadable, using built-ins"
                );
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("writing zone defaults to {}", path.display()))
    }
}
