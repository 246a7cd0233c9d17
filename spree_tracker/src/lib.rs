//! # Spree Tracker
//!
//! Event-driven spree announcements for a multiplayer game server. The host
//! feeds player join, leave, and death events in; the tracker keeps each
//! connected player's streak state and sends the resulting messages back out
//! through host-provided capabilities.
//!
//! ## Core Components
//!
//! - **host**: Capabilities the server provides (clock, player names, chat)
//! - **events**: The inbound event union
//! - **tracker**: [`StreakTracker`], which owns the per-player registry
//! - **plugin**: Load/process/unload lifecycle around a tracker
//!
//! Events are expected one at a time from a single dispatch thread. A host
//! that shares a tracker across threads must lock the whole tracker.

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod plugin;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use config::*;
pub use error::*;
pub use events::*;
pub use host::*;
pub use plugin::*;
pub use tracker::*;

pub use spree_rules;
