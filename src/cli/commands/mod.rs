//! One-shot command implementations

pub mod get;
pub mod list;
pub mod set;
pub mod unset;
