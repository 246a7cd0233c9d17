//! The per-player streak state machine.

use serde::{Deserialize, Serialize};

use crate::milestones::{MultiKillTier, SpreeMilestone, MULTI_KILL_WINDOW, SPREE_THRESHOLD};

/// Streak counters for one connected player.
///
/// All three fields go back to zero/absent together when the player dies.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerStreakState {
    /// Kills since the player last died or joined.
    pub spree_count: u32,
    /// Time of the most recent kill this life.
    pub last_kill_time: Option<f64>,
    /// Kills scored back to back within [`MULTI_KILL_WINDOW`].
    pub multi_kill_count: u32,
}

/// What a single kill earned the killer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KillProgress {
    /// Set when the new spree count lands exactly on a milestone.
    pub milestone: Option<SpreeMilestone>,
    /// Set when the kill extended a multi-kill run.
    pub multi_kill: Option<MultiKillTier>,
}

impl PlayerStreakState {
    /// Create a zeroed state, as for a freshly joined player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a kill scored at `time` and report what it earned.
    ///
    /// The multi-kill run extends when `time` is at most [`MULTI_KILL_WINDOW`]
    /// after the previous kill of this life. A first kill, or a longer gap,
    /// restarts the run at zero without a tier. Timestamps are not required to
    /// be increasing; a kill stamped before the previous one counts as inside
    /// the window.
    pub fn register_kill(&mut self, time: f64) -> KillProgress {
        self.spree_count += 1;
        let milestone = SpreeMilestone::for_count(self.spree_count);

        let within_window = self
            .last_kill_time
            .is_some_and(|last| time - last <= MULTI_KILL_WINDOW);

        let multi_kill = if within_window {
            self.multi_kill_count += 1;
            MultiKillTier::for_streak(self.multi_kill_count)
        } else {
            self.multi_kill_count = 0;
            None
        };

        self.last_kill_time = Some(time);

        KillProgress {
            milestone,
            multi_kill,
        }
    }

    /// Clear all counters and return the values they held.
    pub fn reset(&mut self) -> PlayerStreakState {
        std::mem::take(self)
    }

    /// Whether a death right now would end a spree worth announcing.
    pub fn is_on_spree(&self) -> bool {
        self.spree_count >= SPREE_THRESHOLD
    }
}
