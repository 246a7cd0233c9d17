//! Error types for the tracker.

use spree_rules::PlayerId;
use thiserror::Error;

/// Which side of a death a player was on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Victim,
    Killer,
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRole::Victim => write!(f, "victim"),
            PlayerRole::Killer => write!(f, "killer"),
        }
    }
}

/// An event the tracker refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("{role} {player} has no streak state")]
    UnknownPlayer { player: PlayerId, role: PlayerRole },
}

/// The host could not produce a display name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("no player record for {0}")]
    NoRecord(PlayerId),

    #[error("name lookup for {player} failed: {reason}")]
    Lookup { player: PlayerId, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
