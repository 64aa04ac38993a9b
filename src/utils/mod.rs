pub mod format;
pub mod seen;
