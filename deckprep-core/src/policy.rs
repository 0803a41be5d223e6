use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentMode {
    /// Every entry sends `argument_base`.
    #[default]
    Constant,
    /// Entry `i` sends `argument_base + i`.
    Serial,
}

/// How command paths and arguments are derived for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixPolicy {
    pub name: String,
    pub prefix: String,
    /// Append the 1-based, zero-padded entry number to `prefix`.
    #[serde(default)]
    pub augment_index: bool,
    #[serde(default, rename = "argument_type")]
    pub argument_mode: ArgumentMode,
    #[serde(default = "default_argument_base")]
    pub argument_base: i64,
}

fn default_argument_base() -> i64 {
    1
}

impl PrefixPolicy {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            augment_index: false,
            argument_mode: ArgumentMode::Constant,
            argument_base: default_argument_base(),
        }
    }

    /// A user-typed prefix. Surrounding whitespace is dropped and a leading `/`
/// is added when missing.
    pub fn custom(prefix: &str) -> Result<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(PrepError::Config("OSC prefix cannot be empty".into()));
        }
        let prefix = if prefix.starts_with('/') {
            prefix.to_string()
        } else {
            format!("/{prefix}")
        };
        Ok(Self::new("Custom", prefix))
    }

    pub fn with_augment_index(mut self, augment: bool) -> Self {
        self.augment_index = augment;
        self
    }

    pub fn with_argument(mut self, mode: ArgumentMode, base: i64) -> Self {
        self.argument_mode = mode;
        self.argument_base = base;
        self
    }
}
