//! Capabilities the game server hands to the tracker.

use spree_rules::PlayerId;

use crate::error::NameError;

/// Source of event timestamps, in seconds.
pub trait Clock {
    fn current_time(&self) -> f64;
}

/// Looks up the name shown for a player in chat.
pub trait IdentityResolver {
    fn display_name(&self, player: PlayerId) -> Result<String, NameError>;
}

/// Delivers chat messages. Delivery is fire-and-forget.
pub trait Announcer {
    fn announce(&mut self, announcement: Announcement);
}

/// Everything the tracker needs from its host.
pub trait Host: Clock + IdentityResolver + Announcer {}

impl<T: Clock + IdentityResolver + Announcer> Host for T {}

/// Who receives a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageScope {
    AllPlayers,
    Player(PlayerId),
}

/// A message ready to be sent by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub scope: MessageScope,
    pub text: String,
}

impl Announcement {
    /// A message for every connected player.
    pub fn broadcast(text: impl Into<String>) -> Self {
        Self {
            scope: MessageScope::AllPlayers,
            text: text.into(),
        }
    }

    /// A message for one player only.
    pub fn to_player(player: PlayerId, text: impl Into<String>) -> Self {
        Self {
            scope: MessageScope::Player(player),
            text: text.into(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.scope == MessageScope::AllPlayers
    }
}
