//! Core configuration types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Presentation variant selecting the item/container template pair
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rows inside a bordered panel table
    #[default]
    Panel,
    /// Entries inside a list group
    List,
}

impl Mode {
    /// Get the configuration key for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Panel => "panel",
            Mode::List => "list",
        }
    }

    /// Get all supported modes
    pub fn all() -> Vec<Mode> {
        vec![Mode::Panel, Mode::List]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "panel" => Ok(Mode::Panel),
            "list" => Ok(Mode::List),
            _ => Err(ConfigError::invalid_mode(s)),
        }
    }
}
