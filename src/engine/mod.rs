pub mod achievements;
pub mod pet;
pub mod scoring;
