//! # Spree Rules
//!
//! The rules crate for killing sprees and multi-kills. It holds the per-player
//! streak state, the milestone tables, and the registry of connected players.
//! Nothing in here talks to a game server; the `spree_tracker` crate drives it.

pub mod milestones;
pub mod player;
pub mod registry;

pub use milestones::*;
pub use player::*;
pub use registry::*;
