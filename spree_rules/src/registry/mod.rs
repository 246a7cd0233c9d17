//! Registry of connected players and their streak state.

use std::collections::HashMap;
use thiserror::Error;

use crate::player::{PlayerId, PlayerStreakState};

/// A lookup named a player that has no streak state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("player {0} is not tracked")]
pub struct UnknownPlayer(pub PlayerId);

/// Streak state for every connected player.
///
/// An entry exists exactly while the player is connected. Only
/// [`StreakRegistry::join`] and [`StreakRegistry::get_or_create`] add entries.
#[derive(Debug, Clone, Default)]
pub struct StreakRegistry {
    players: HashMap<PlayerId, PlayerStreakState>,
}

impl StreakRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a player with zeroed counters.
    ///
    /// A player that was already tracked is reset; the old state is returned.
    pub fn join(&mut self, id: PlayerId) -> Option<PlayerStreakState> {
        self.players.insert(id, PlayerStreakState::new())
    }

    /// Stop tracking a player. Returns `None` if it was not tracked.
    pub fn leave(&mut self, id: PlayerId) -> Option<PlayerStreakState> {
        self.players.remove(&id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerStreakState> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut PlayerStreakState> {
        self.players.get_mut(&id)
    }

    /// Get a player's state, creating a zeroed entry if there is none.
    ///
    /// The flag is `true` when the entry was created by this call.
    pub fn get_or_create(&mut self, id: PlayerId) -> (&mut PlayerStreakState, bool) {
        let mut created = false;
        let state = self.players.entry(id).or_insert_with(|| {
            created = true;
            PlayerStreakState::new()
        });
        (state, created)
    }

    /// Get a player's state, failing if it is not tracked.
    pub fn require(&mut self, id: PlayerId) -> Result<&mut PlayerStreakState, UnknownPlayer> {
        self.players.get_mut(&id).ok_or(UnknownPlayer(id))
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    /// Number of tracked players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over all tracked players.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &PlayerStreakState)> {
        self.players.iter().map(|(id, state)| (*id, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_leave() {
        let mut registry = StreakRegistry::new();
        let id = PlayerId(3);

        assert!(registry.join(id).is_none());
        assert!(registry.contains(id));
        assert_eq!(registry.len(), 1);

        let removed = registry.leave(id);
        assert_eq!(removed, Some(PlayerStreakState::default()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_join_resets() {
        let mut registry = StreakRegistry::new();
        let id = PlayerId(1);
        registry.join(id);
        registry.get_mut(id).unwrap().spree_count = 9;

        let previous = registry.join(id);

        assert_eq!(previous.map(|s| s.spree_count), Some(9));
        assert_eq!(registry.get(id).unwrap().spree_count, 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_redundant_leave_is_noop() {
        let mut registry = StreakRegistry::new();
        registry.join(PlayerId(1));

        assert!(registry.leave(PlayerId(2)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_require_unknown() {
        let mut registry = StreakRegistry::new();
        assert_eq!(registry.require(PlayerId(5)).unwrap_err(), UnknownPlayer(PlayerId(5)));
        assert_eq!(registry.require(PlayerId(5)).unwrap_err().to_string(), "player #5 is not tracked");
    }

    #[test]
    fn test_get_or_create() {
        let mut registry = StreakRegistry::new();

        let (state, created) = registry.get_or_create(PlayerId(8));
        assert!(created);
        state.spree_count = 2;

        let (state, created) = registry.get_or_create(PlayerId(8));
        assert!(!created);
        assert_eq!(state.spree_count, 2);
    }

    #[test]
    fn test_get_does_not_create() {
        let registry = StreakRegistry::new();
        assert!(registry.get(PlayerId(4)).is_none());
        assert!(registry.is_empty());
    }
}
