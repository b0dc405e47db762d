//! Data model for env files

pub mod entry;
pub mod set;

pub use entry::{is_valid_name, Entry};
pub use set::VarSet;
