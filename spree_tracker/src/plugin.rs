//! Plugin lifecycle around a [`StreakTracker`].
//!
//! The host loads the plugin once at startup, registers it for the events in
//! [`SUBSCRIPTIONS`], feeds it every matching event, and unloads it at
//! shutdown. Failures never reach the host: a rejected event is logged and
//! dropped.

use std::path::Path;

use tracing::{debug, error};

use crate::config::TrackerConfig;
use crate::error::ConfigError;
use crate::events::{EventKind, ServerEvent};
use crate::host::Host;
use crate::tracker::StreakTracker;

/// Events the plugin must be registered for.
pub static SUBSCRIPTIONS: &[EventKind] = &[
    EventKind::PlayerJoined,
    EventKind::PlayerLeft,
    EventKind::PlayerDied,
];

pub struct SpreePlugin<H: Host> {
    tracker: StreakTracker<H>,
}

impl<H: Host> SpreePlugin<H> {
    pub fn load(host: H, config: TrackerConfig) -> Self {
        debug!(?config, "spree tracker plugin loaded");
        Self {
            tracker: StreakTracker::new(host, config),
        }
    }

    /// Load with settings read from a TOML file.
    pub fn load_from_file(host: H, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = TrackerConfig::from_path(path)?;
        Ok(Self::load(host, config))
    }

    pub fn subscriptions(&self) -> &'static [EventKind] {
        SUBSCRIPTIONS
    }

    pub fn process(&mut self, event: &ServerEvent) {
        if let Err(err) = self.tracker.handle(event) {
            error!(kind = ?event.kind(), error = %err, "dropping server event");
        }
    }

    pub fn tracker(&self) -> &StreakTracker<H> {
        &self.tracker
    }

    /// Shut down, dropping all streak state and handing the host back.
    pub fn unload(self) -> H {
        debug!(
            players = self.tracker.player_count(),
            "spree tracker plugin unloaded"
        );
        self.tracker.into_host()
    }
}
