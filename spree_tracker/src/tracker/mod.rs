//! The streak tracker - turns server events into spree announcements.
//!
//! Processing a death happens in two phases:
//! 1. **Update**: the killer's and victim's counters are changed in the registry
//! 2. **Announce**: messages derived from the updated counters are sent
//!
//! The update always completes once an event is accepted. A failed name lookup
//! only affects the announcement that needed the name.

mod messages;

use spree_rules::{PlayerId, PlayerStreakState, StreakRegistry};
use tracing::{debug, warn};

use crate::config::{TrackerConfig, UnknownPlayerPolicy};
use crate::error::{PlayerRole, TrackerError};
use crate::events::{DeathKind, ServerEvent};
use crate::host::{Announcement, Host, MessageScope};

/// Per-player spree tracking for one server session.
pub struct StreakTracker<H> {
    registry: StreakRegistry,
    host: H,
    config: TrackerConfig,
}

impl<H: Host> StreakTracker<H> {
    pub fn new(host: H, config: TrackerConfig) -> Self {
        Self {
            registry: StreakRegistry::new(),
            host,
            config,
        }
    }

    /// Create a tracker with the default configuration.
    pub fn with_defaults(host: H) -> Self {
        Self::new(host, TrackerConfig::default())
    }

    /// Apply one server event.
    pub fn handle(&mut self, event: &ServerEvent) -> Result<(), TrackerError> {
        match *event {
            ServerEvent::PlayerJoined { player } => {
                self.on_player_joined(player);
                Ok(())
            }
            ServerEvent::PlayerLeft { player } => {
                self.on_player_left(player);
                Ok(())
            }
            ServerEvent::PlayerDied {
                victim,
                killer,
                time,
            } => self.on_player_killed(victim, killer, time),
        }
    }

    /// Start tracking a player. A repeated join resets the player's counters.
    pub fn on_player_joined(&mut self, player: PlayerId) {
        match self.registry.join(player) {
            Some(previous) => warn!(
                %player,
                spree = previous.spree_count,
                "player joined while already tracked; streak reset"
            ),
            None => debug!(%player, "tracking player"),
        }
    }

    /// Stop tracking a player. Unknown players are ignored.
    pub fn on_player_left(&mut self, player: PlayerId) {
        if self.registry.leave(player).is_some() {
            debug!(%player, "player left");
        } else {
            debug!(%player, "leave for untracked player ignored");
        }
    }

    /// Record a death stamped with the host clock's current time.
    pub fn on_player_killed_now(
        &mut self,
        victim: PlayerId,
        killer: Option<PlayerId>,
    ) -> Result<(), TrackerError> {
        let time = self.host.current_time();
        self.on_player_killed(victim, killer, time)
    }

    /// Record a death at `time`.
    ///
    /// A `killer` that is absent or equal to `victim` counts as a suicide.
    pub fn on_player_killed(
        &mut self,
        victim: PlayerId,
        killer: Option<PlayerId>,
        time: f64,
    ) -> Result<(), TrackerError> {
        match DeathKind::classify(victim, killer) {
            DeathKind::Kill { killer } => self.record_kill(victim, killer, time),
            DeathKind::Suicide => self.record_suicide(victim),
        }
    }

    fn record_kill(
        &mut self,
        victim: PlayerId,
        killer: PlayerId,
        time: f64,
    ) -> Result<(), TrackerError> {
        self.admit(killer, PlayerRole::Killer)?;
        self.admit(victim, PlayerRole::Victim)?;

        let progress = self.tracked(killer, PlayerRole::Killer)?.register_kill(time);
        let ended = self.tracked(victim, PlayerRole::Victim)?.reset();

        if let Some(milestone) = progress.milestone {
            if let Some(name) = self.name_of(killer) {
                self.send(Announcement::broadcast(messages::milestone_reached(
                    &name, milestone,
                )));
            }
        }

        if let Some(tier) = progress.multi_kill {
            self.send(Announcement::to_player(killer, tier.text()));
        }

        if ended.is_on_spree() {
            if let (Some(victim_name), Some(killer_name)) =
                (self.name_of(victim), self.name_of(killer))
            {
                self.send(Announcement::broadcast(messages::spree_ended_by(
                    &victim_name,
                    &killer_name,
                )));
            }
        }

        Ok(())
    }

    fn record_suicide(&mut self, victim: PlayerId) -> Result<(), TrackerError> {
        self.admit(victim, PlayerRole::Victim)?;

        let ended = self.tracked(victim, PlayerRole::Victim)?.reset();

        if ended.is_on_spree() {
            if let Some(name) = self.name_of(victim) {
                self.send(Announcement::broadcast(messages::spree_unfortunate_end(
                    &name,
                )));
            }
        }

        Ok(())
    }

    /// Apply the unknown-player policy before any state is touched.
    fn admit(&mut self, player: PlayerId, role: PlayerRole) -> Result<(), TrackerError> {
        match self.config.unknown_players {
            UnknownPlayerPolicy::Track => {
                let (_, created) = self.registry.get_or_create(player);
                if created {
                    warn!(%player, %role, "death event for untracked player; tracking from now");
                }
                Ok(())
            }
            UnknownPlayerPolicy::Reject if !self.registry.contains(player) => {
                Err(TrackerError::UnknownPlayer { player, role })
            }
            UnknownPlayerPolicy::Reject => Ok(()),
        }
    }

    fn tracked(
        &mut self,
        player: PlayerId,
        role: PlayerRole,
    ) -> Result<&mut PlayerStreakState, TrackerError> {
        self.registry
            .require(player)
            .map_err(|_| TrackerError::UnknownPlayer { player, role })
    }

    /// Resolve a display name, falling back to the configured placeholder.
    fn name_of(&self, player: PlayerId) -> Option<String> {
        match self.host.display_name(player) {
            Ok(name) => Some(name),
            Err(err) => match &self.config.name_placeholder {
                Some(placeholder) => {
                    warn!(%player, error = %err, "name lookup failed; using placeholder");
                    Some(placeholder.clone())
                }
                None => {
                    warn!(%player, error = %err, "name lookup failed; announcement skipped");
                    None
                }
            },
        }
    }

    fn send(&mut self, announcement: Announcement) {
        match announcement.scope {
            MessageScope::AllPlayers => debug!(text = %announcement.text, "broadcast"),
            MessageScope::Player(player) => {
                debug!(%player, text = %announcement.text, "private message")
            }
        }
        self.host.announce(announcement);
    }

    /// Current streak state of a player, if tracked.
    pub fn state(&self, player: PlayerId) -> Option<&PlayerStreakState> {
        self.registry.get(player)
    }

    /// Number of tracked players.
    pub fn player_count(&self) -> usize {
        self.registry.len()
    }

    pub fn registry(&self) -> &StreakRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear down the tracker, dropping all streak state.
    pub fn into_host(self) -> H {
        self.host
    }
}
