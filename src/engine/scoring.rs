//! Score, time-bonus and level arithmetic.
//!
//! All functions here are total: a game with zero questions scores 0
//! and an over-time finish earns no bonus, neither is an error.

/// Points needed per level.
pub const POINTS_PER_LEVEL: u32 = 500;

/// Percentage-based score for a finished game plus any time bonus.
/// Integer division truncates, so 7/9 correct is 77, not 78.
pub fn calculate_score(correct: u32, total: u32, time_bonus: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    correct * 100 / total + time_bonus
}

/// Half a point for every second left on the clock. Finishing at or
/// past the limit earns nothing.
pub fn calculate_time_bonus(elapsed_secs: u32, max_secs: u32) -> u32 {
    if elapsed_secs >= max_secs {
        return 0;
    }
    (max_secs - elapsed_secs) / 2
}

/// Level from lifetime score: `max(1, total_score / 500)`.
pub fn level_for_score(total_score: u32) -> u32 {
    (total_score / POINTS_PER_LEVEL).max(1)
}

pub fn level_title(level: u32) -> &'static str {
    match level {
        0 | 1 => "Aprendiz",
        2 | 3 => "Explorador",
        4 | 5 => "Experto",
        6 | 7 => "Maestro",
        _ => "Leyenda",
    }
}

/// Points still missing to reach the next level.
pub fn points_to_next_level(total_score: u32) -> u32 {
    let next_at = (level_for_score(total_score) + 1) * POINTS_PER_LEVEL;
    next_at.saturating_sub(total_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_basic() {
        assert_eq!(calculate_score(10, 10, 20), 120);
        assert_eq!(calculate_score(5, 10, 0), 50);
        assert_eq!(calculate_score(0, 10, 0), 0);
    }

    #[test]
    fn score_truncates_toward_zero() {
        assert_eq!(calculate_score(7, 9, 0), 77);
        assert_eq!(calculate_score(1, 3, 0), 33);
    }

    #[test]
    fn score_zero_total_is_zero() {
        assert_eq!(calculate_score(0, 0, 0), 0);
        assert_eq!(calculate_score(5, 0, 99), 0);
    }

    #[test]
    fn time_bonus_rewards_spare_seconds() {
        assert!(calculate_time_bonus(30, 60) > 0);
        assert_eq!(calculate_time_bonus(30, 60), 15);
        assert_eq!(calculate_time_bonus(0, 60), 30);
    }

    #[test]
    fn time_bonus_floors_at_zero() {
        assert_eq!(calculate_time_bonus(60, 60), 0);
        assert_eq!(calculate_time_bonus(70, 60), 0);
    }

    #[test]
    fn time_bonus_monotonic_in_elapsed() {
        let mut prev = u32::MAX;
        for elapsed in 0..=70 {
            let bonus = calculate_time_bonus(elapsed, 60);
            assert!(bonus <= prev);
            prev = bonus;
        }
    }

    #[test]
    fn level_floors_at_one() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(4000), 8);
    }

    #[test]
    fn level_monotonic_in_score() {
        let mut prev = 0;
        for score in (0..10_000).step_by(50) {
            let level = level_for_score(score);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn level_titles() {
        assert_eq!(level_title(1), "Aprendiz");
        assert_eq!(level_title(2), "Explorador");
        assert_eq!(level_title(3), "Explorador");
        assert_eq!(level_title(4), "Experto");
        assert_eq!(level_title(5), "Experto");
        assert_eq!(level_title(6), "Maestro");
        assert_eq!(level_title(7), "Maestro");
        assert_eq!(level_title(8), "Leyenda");
        assert_eq!(level_title(42), "Leyenda");
    }
}
