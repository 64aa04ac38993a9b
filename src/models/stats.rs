use serde::{Deserialize, Serialize};

/// Mini-games finished on one day, for the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: String,
    pub games_done: u8,
}

/// Lifetime aggregates over the game log.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LifetimeTotals {
    pub games: u32,
    pub score: u32,
    pub perfect: u32,
}
