//! Inbound events from the game server.

use spree_rules::PlayerId;

/// The kinds of server event the tracker listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PlayerJoined,
    PlayerLeft,
    PlayerDied,
}

/// An event delivered by the host's dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServerEvent {
    PlayerJoined {
        player: PlayerId,
    },
    PlayerLeft {
        player: PlayerId,
    },
    /// A player died. `killer` is `None` for deaths caused by the world.
    PlayerDied {
        victim: PlayerId,
        killer: Option<PlayerId>,
        /// Server time of the death, in seconds.
        time: f64,
    },
}

impl ServerEvent {
    /// Build a death event from the host's raw slot numbers, where a negative
    /// killer slot stands for the server or the world.
    pub fn died_raw(victim: PlayerId, killer_slot: i32, time: f64) -> Self {
        ServerEvent::PlayerDied {
            victim,
            killer: PlayerId::from_raw(killer_slot),
            time,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            ServerEvent::PlayerJoined { .. } => EventKind::PlayerJoined,
            ServerEvent::PlayerLeft { .. } => EventKind::PlayerLeft,
            ServerEvent::PlayerDied { .. } => EventKind::PlayerDied,
        }
    }

    /// The player the event is about (the victim, for deaths).
    pub fn primary_player(&self) -> PlayerId {
        match self {
            ServerEvent::PlayerJoined { player } | ServerEvent::PlayerLeft { player } => *player,
            ServerEvent::PlayerDied { victim, .. } => *victim,
        }
    }
}

/// How a death is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathKind {
    /// Another player scored the kill.
    Kill { killer: PlayerId },
    /// Self-inflicted, or caused by the world.
    Suicide,
}

impl DeathKind {
    pub fn classify(victim: PlayerId, killer: Option<PlayerId>) -> Self {
        match killer {
            Some(killer) if killer != victim => DeathKind::Kill { killer },
            _ => DeathKind::Suicide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_death() {
        let victim = PlayerId(1);
        let killer = PlayerId(2);

        assert_eq!(
            DeathKind::classify(victim, Some(killer)),
            DeathKind::Kill { killer }
        );
        assert_eq!(DeathKind::classify(victim, Some(victim)), DeathKind::Suicide);
        assert_eq!(DeathKind::classify(victim, None), DeathKind::Suicide);
    }

    #[test]
    fn test_died_raw_world_kill() {
        let event = ServerEvent::died_raw(PlayerId(4), -1, 12.5);
        assert_eq!(
            event,
            ServerEvent::PlayerDied {
                victim: PlayerId(4),
                killer: None,
                time: 12.5,
            }
        );
        assert_eq!(event.kind(), EventKind::PlayerDied);
        assert_eq!(event.primary_player(), PlayerId(4));
    }

    #[test]
    fn test_event_kind() {
        let joined = ServerEvent::PlayerJoined { player: PlayerId(1) };
        let left = ServerEvent::PlayerLeft { player: PlayerId(1) };
        assert_eq!(joined.kind(), EventKind::PlayerJoined);
        assert_eq!(left.kind(), EventKind::PlayerLeft);
    }
}
