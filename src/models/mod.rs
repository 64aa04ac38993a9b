pub mod facts;
pub mod game;
pub mod pet;
pub mod stats;

pub use facts::DailyActivityFacts;
pub use game::{GameKind, GameSession};
pub use pet::{PetPhase, PetRecord, PetState};
pub use stats::{DailyStats, LifetimeTotals};

/// Date format used for every date column in the database.
pub const DATE_FMT: &str = "%Y-%m-%d";
