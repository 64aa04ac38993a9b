use serde::{Deserialize, Serialize};

/// Snapshot of the player's activity at evaluation time.
///
/// Rebuilt fresh from the database before every engine call; the engine
/// trusts it as-is and never persists it. `happiness_level` stays in
/// 0..=100, and `current_streak <= longest_streak` holds for anything
/// produced by the feed transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyActivityFacts {
    /// Distinct mini-games finished today.
    pub games_completed_today: u32,
    pub total_games_completed: u32,
    pub total_score: u32,
    /// Lifetime games answered with zero mistakes.
    pub perfect_games: u32,
    /// Consecutive days (ending yesterday or today) the pet was fed.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub fed_today: bool,
    pub happiness_level: u8,
}
