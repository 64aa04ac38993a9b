pub mod games;
pub mod header;
pub mod logros;
pub mod pet;
pub mod statusbar;
pub mod streak;
