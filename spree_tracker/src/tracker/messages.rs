//! Chat text for spree announcements.

use spree_rules::SpreeMilestone;

pub(crate) fn milestone_reached(name: &str, milestone: SpreeMilestone) -> String {
    format!("{} {}", name, milestone.text())
}

pub(crate) fn spree_ended_by(victim: &str, killer: &str) -> String {
    format!("{}'s killing spree was ended by {}!", victim, killer)
}

pub(crate) fn spree_unfortunate_end(victim: &str) -> String {
    format!("{}'s killing spree comes to an unfortunate end.", victim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text() {
        assert_eq!(
            milestone_reached("Tank", SpreeMilestone::OneWithTheMatrix),
            "Tank is one with the matrix..."
        );
        assert_eq!(
            spree_ended_by("Tank", "Neo"),
            "Tank's killing spree was ended by Neo!"
        );
        assert_eq!(
            spree_unfortunate_end("Tank"),
            "Tank's killing spree comes to an unfortunate end."
        );
    }
}
