//! Señor Pollo's daily cycle.
//!
//! Pure value transformations only: the caller gathers the fact
//! snapshot, decides day rollover and streak continuity from the stored
//! last-fed date, and persists whatever `feed` returns. Concurrent feed
//! attempts are the caller's problem to serialize; calling `feed` twice
//! on the same snapshot is harmless because an already-fed pet is left
//! untouched.

use crate::models::{DailyActivityFacts, PetPhase, PetState};

/// Distinct mini-games required before the pet will eat.
pub const REQUIRED_GAMES_PER_DAY: u32 = 4;

/// Happiness gained per feeding. Five consecutive days take the pet
/// from 0 to full.
pub const FEED_HAPPINESS_INCREMENT: u8 = 20;

pub const MAX_HAPPINESS: u8 = 100;

pub fn phase(facts: &DailyActivityFacts) -> PetPhase {
    if facts.fed_today {
        PetPhase::Fed
    } else if facts.games_completed_today >= REQUIRED_GAMES_PER_DAY {
        PetPhase::ReadyToFeed
    } else {
        PetPhase::Hungry
    }
}

pub fn can_feed(facts: &DailyActivityFacts) -> bool {
    facts.games_completed_today >= REQUIRED_GAMES_PER_DAY && !facts.fed_today
}

/// Feed the pet once for today.
///
/// A no-op returning the unchanged state when the pet is not eligible,
/// so a double invocation never double-counts. `continues_streak` says
/// whether the previous local day also carried a feed event.
pub fn feed(facts: &DailyActivityFacts, continues_streak: bool) -> PetState {
    if !can_feed(facts) {
        return PetState::from_facts(facts);
    }

    let happiness = facts
        .happiness_level
        .saturating_add(FEED_HAPPINESS_INCREMENT)
        .min(MAX_HAPPINESS);
    let current = if continues_streak {
        facts.current_streak + 1
    } else {
        1
    };

    PetState {
        happiness_level: happiness,
        fed_today: true,
        current_streak: current,
        longest_streak: facts.longest_streak.max(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(games_today: u32, fed_today: bool) -> DailyActivityFacts {
        DailyActivityFacts {
            games_completed_today: games_today,
            fed_today,
            ..Default::default()
        }
    }

    #[test]
    fn phase_follows_games_and_feeding() {
        assert_eq!(phase(&facts(0, false)), PetPhase::Hungry);
        assert_eq!(phase(&facts(3, false)), PetPhase::Hungry);
        assert_eq!(phase(&facts(4, false)), PetPhase::ReadyToFeed);
        assert_eq!(phase(&facts(7, false)), PetPhase::ReadyToFeed);
        assert_eq!(phase(&facts(4, true)), PetPhase::Fed);
    }

    #[test]
    fn cannot_feed_before_four_games() {
        assert!(!can_feed(&facts(3, false)));
        assert!(can_feed(&facts(4, false)));
    }

    #[test]
    fn feed_ineligible_is_a_silent_noop() {
        let f = facts(2, false);
        let state = feed(&f, false);
        assert_eq!(state, PetState::from_facts(&f));
        assert!(!state.fed_today);
    }

    #[test]
    fn feed_raises_happiness_and_starts_streak() {
        let mut f = facts(4, false);
        f.happiness_level = 30;
        let state = feed(&f, false);
        assert!(state.fed_today);
        assert_eq!(state.happiness_level, 50);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 1);
    }

    #[test]
    fn feed_continues_streak_and_tracks_best() {
        let mut f = facts(4, false);
        f.current_streak = 6;
        f.longest_streak = 6;
        let state = feed(&f, true);
        assert_eq!(state.current_streak, 7);
        assert_eq!(state.longest_streak, 7);

        let mut f = facts(4, false);
        f.current_streak = 2;
        f.longest_streak = 9;
        let state = feed(&f, true);
        assert_eq!(state.current_streak, 3);
        assert_eq!(state.longest_streak, 9);
    }

    #[test]
    fn second_feed_in_same_window_does_nothing() {
        let mut f = facts(4, false);
        f.happiness_level = 40;
        let first = feed(&f, false);
        assert!(first.fed_today);
        assert_eq!(first.happiness_level, 60);

        // Caller persists `first` and rebuilds facts; the pet is now fed.
        f.fed_today = first.fed_today;
        f.happiness_level = first.happiness_level;
        f.current_streak = first.current_streak;
        f.longest_streak = first.longest_streak;

        let second = feed(&f, true);
        assert_eq!(second, PetState::from_facts(&f));
        assert_eq!(second.happiness_level, 60);
        assert_eq!(second.current_streak, first.current_streak);
    }

    #[test]
    fn happiness_saturates_at_one_hundred() {
        let mut f = facts(4, false);
        f.happiness_level = 95;
        assert_eq!(feed(&f, false).happiness_level, 100);
        f.happiness_level = 100;
        assert_eq!(feed(&f, false).happiness_level, 100);
    }

    #[test]
    fn streak_invariant_holds_after_feeding() {
        for continues in [false, true] {
            for streak in 0..40 {
                let mut f = facts(4, false);
                f.current_streak = streak;
                f.longest_streak = streak;
                let state = feed(&f, continues);
                assert!(state.current_streak <= state.longest_streak);
            }
        }
    }
}
