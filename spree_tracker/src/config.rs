//! Tracker configuration.
//!
//! Only integration policy is configurable. Spree milestones and the
//! multi-kill window are fixed rules and are rejected if they appear here.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// What to do with a death event naming a player that never joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPlayerPolicy {
    /// Start tracking the player with zeroed counters, then apply the event.
    #[default]
    Track,
    /// Drop the whole event without touching any state.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    pub unknown_players: UnknownPlayerPolicy,

    /// Name used when the host cannot resolve a player's name.
    /// When unset, announcements needing that name are skipped.
    pub name_placeholder: Option<String>,
}

impl TrackerConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn with_unknown_players(mut self, policy: UnknownPlayerPolicy) -> Self {
        self.unknown_players = policy;
        self
    }

    pub fn with_name_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.name_placeholder = Some(placeholder.into());
        self
    }
}
