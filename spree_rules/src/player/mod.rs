//! Player handles and their streak state.

mod streak;

pub use streak::*;

use serde::{Deserialize, Serialize};

/// Stable handle of a connected player, as assigned by the host server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Convert a raw host slot number into a player handle.
    ///
    /// Hosts report the server itself or the world (falls, hazards) as a
    /// negative killer slot, which maps to `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
