//! Spree milestones, multi-kill tiers, and the fixed thresholds behind them.

use serde::{Deserialize, Serialize};

/// Longest gap, in seconds, between two kills that still extends a multi-kill.
pub const MULTI_KILL_WINDOW: f64 = 5.0;

/// Spree length from which a death is announced as the end of a spree.
pub const SPREE_THRESHOLD: u32 = 5;

/// Spree lengths that earn a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpreeMilestone {
    /// 5 kills.
    KillingSpree,
    /// 10 kills.
    Rampage,
    /// 15 kills.
    Dominating,
    /// 20 kills.
    Unstoppable,
    /// 50 kills. Nothing past this is ever announced.
    OneWithTheMatrix,
}

impl SpreeMilestone {
    /// Every milestone, smallest first.
    pub const ALL: [SpreeMilestone; 5] = [
        SpreeMilestone::KillingSpree,
        SpreeMilestone::Rampage,
        SpreeMilestone::Dominating,
        SpreeMilestone::Unstoppable,
        SpreeMilestone::OneWithTheMatrix,
    ];

    /// The milestone reached at exactly `spree_count` kills, if any.
    pub fn for_count(spree_count: u32) -> Option<Self> {
        match spree_count {
            5 => Some(SpreeMilestone::KillingSpree),
            10 => Some(SpreeMilestone::Rampage),
            15 => Some(SpreeMilestone::Dominating),
            20 => Some(SpreeMilestone::Unstoppable),
            50 => Some(SpreeMilestone::OneWithTheMatrix),
            _ => None,
        }
    }

    /// Spree length this milestone sits at.
    pub fn threshold(&self) -> u32 {
        match self {
            SpreeMilestone::KillingSpree => 5,
            SpreeMilestone::Rampage => 10,
            SpreeMilestone::Dominating => 15,
            SpreeMilestone::Unstoppable => 20,
            SpreeMilestone::OneWithTheMatrix => 50,
        }
    }

    /// Text that follows the player's name in the broadcast.
    pub fn text(&self) -> &'static str {
        match self {
            SpreeMilestone::KillingSpree => "is on a killing spree!",
            SpreeMilestone::Rampage => "is on a rampage!",
            SpreeMilestone::Dominating => "is Dominating!",
            SpreeMilestone::Unstoppable => "is UNSTOPPABLE!",
            SpreeMilestone::OneWithTheMatrix => "is one with the matrix...",
        }
    }
}

/// Multi-kill tiers, told privately to the killer.
///
/// The tier tracks the multi-kill counter, which is one less than the number
/// of kills in the run: the second rapid kill is a double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiKillTier {
    Double,
    Triple,
    Quad,
    Super,
    /// Every run longer than a super kill stays here.
    Amazing,
}

impl MultiKillTier {
    /// Tier for a multi-kill counter value; zero means no run is in progress.
    pub fn for_streak(multi_kill_count: u32) -> Option<Self> {
        match multi_kill_count {
            0 => None,
            1 => Some(MultiKillTier::Double),
            2 => Some(MultiKillTier::Triple),
            3 => Some(MultiKillTier::Quad),
            4 => Some(MultiKillTier::Super),
            _ => Some(MultiKillTier::Amazing),
        }
    }

    /// Message sent to the killer.
    pub fn text(&self) -> &'static str {
        match self {
            MultiKillTier::Double => "Double kill!",
            MultiKillTier::Triple => "Triple kill!",
            MultiKillTier::Quad => "QUAD kill!",
            MultiKillTier::Super => "SUPER KILL!",
            MultiKillTier::Amazing => "AMAZING!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_exact_match() {
        assert_eq!(SpreeMilestone::for_count(5), Some(SpreeMilestone::KillingSpree));
        assert_eq!(SpreeMilestone::for_count(50), Some(SpreeMilestone::OneWithTheMatrix));
        assert_eq!(SpreeMilestone::for_count(4), None);
        assert_eq!(SpreeMilestone::for_count(6), None);
        assert_eq!(SpreeMilestone::for_count(25), None);
        assert_eq!(SpreeMilestone::for_count(51), None);
        assert_eq!(SpreeMilestone::for_count(100), None);
    }

    #[test]
    fn test_milestone_thresholds_round_trip() {
        for milestone in SpreeMilestone::ALL {
            assert_eq!(SpreeMilestone::for_count(milestone.threshold()), Some(milestone));
        }
    }

    #[test]
    fn test_milestone_text() {
        assert_eq!(SpreeMilestone::Rampage.text(), "is on a rampage!");
        assert_eq!(SpreeMilestone::Unstoppable.text(), "is UNSTOPPABLE!");
    }

    #[test]
    fn test_multi_kill_tiers() {
        assert_eq!(MultiKillTier::for_streak(0), None);
        assert_eq!(MultiKillTier::for_streak(1).map(|t| t.text()), Some("Double kill!"));
        assert_eq!(MultiKillTier::for_streak(2).map(|t| t.text()), Some("Triple kill!"));
        assert_eq!(MultiKillTier::for_streak(3).map(|t| t.text()), Some("QUAD kill!"));
        assert_eq!(MultiKillTier::for_streak(4).map(|t| t.text()), Some("SUPER KILL!"));
        assert_eq!(MultiKillTier::for_streak(5), Some(MultiKillTier::Amazing));
        assert_eq!(MultiKillTier::for_streak(40), Some(MultiKillTier::Amazing));
    }
}
