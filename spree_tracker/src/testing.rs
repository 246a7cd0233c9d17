//! In-memory host used by the tests.

use std::collections::HashMap;

use spree_rules::PlayerId;

use crate::error::NameError;
use crate::host::{Announcement, Announcer, Clock, IdentityResolver};

#[derive(Debug, Default)]
pub struct TestHost {
    pub names: HashMap<PlayerId, String>,
    pub sent: Vec<Announcement>,
    pub now: f64,
}

impl TestHost {
    pub fn with_players(players: &[(u32, &str)]) -> Self {
        Self {
            names: players
                .iter()
                .map(|(id, name)| (PlayerId(*id), name.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Drain everything sent so far.
    pub fn take(&mut self) -> Vec<Announcement> {
        std::mem::take(&mut self.sent)
    }
}

impl Clock for TestHost {
    fn current_time(&self) -> f64 {
        self.now
    }
}

impl IdentityResolver for TestHost {
    fn display_name(&self, player: PlayerId) -> Result<String, NameError> {
        self.names
            .get(&player)
            .cloned()
            .ok_or(NameError::NoRecord(player))
    }
}

impl Announcer for TestHost {
    fn announce(&mut self, announcement: Announcement) {
        self.sent.push(announcement);
    }
}
