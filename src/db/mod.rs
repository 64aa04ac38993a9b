pub mod migrations;
pub mod repository;

use thiserror::Error;

/// Closed taxonomy for stored values that fail to decode into domain
/// types. Anything reaching these variants means the database was
/// edited outside the app.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown game kind '{0}' in game_log")]
    UnknownGame(String),
    #[error("pet row missing; database was not migrated")]
    MissingPetRow,
    #[error("happiness {0} out of range in pet row")]
    HappinessOutOfRange(i64),
}
