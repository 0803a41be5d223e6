use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PrepError, Result};
use crate::policy::PrefixPolicy;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Defaults offered to the operator plus the catalog of named prefix policies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub border_color: String,
    pub border_width: u32,
    pub osc_prefix_options: Vec<PrefixPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            border_color: "#FF0000".to_string(),
            border_width: 5,
            osc_prefix_options: (1..=3)
                .map(|n| PrefixPolicy::new(format!("Option {n}"), format!("/streamdeck/option_{n}")))
                .collect(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| PrepError::Config(format!("{}: {e}", path.display())))
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("using built-in defaults, could not load {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn policy(&self, name: &str) -> Option<&PrefixPolicy> {
        self.osc_prefix_options
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Policy used when the operator picks nothing.
    pub fn default_policy(&self) -> Result<&PrefixPolicy> {
        self.osc_prefix_options
            .first()
            .ok_or_else(|| PrepError::Config("no OSC prefix options configured".into()))
    }
}
