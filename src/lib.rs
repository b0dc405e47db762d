//! envman - Interactive .env File Manager
//!
//! A small tool for managing `.env`-style key/value files.
//!
//! # Features
//!
//! - Interactive menu: list, add, edit, and delete variables
//! - Tab completion for variable names sourced from the live file
//! - One-shot `list`, `get`, `set`, and `unset` commands for scripting
//! - Atomic saves: the file is replaced, never truncated in place
//! - Graceful Ctrl+C handling at every prompt

pub mod cli;
pub mod completion;
pub mod error;
pub mod menu;
pub mod model;
pub mod parser;
pub mod store;
pub mod utils;

pub use error::Error;
pub use model::{Entry, VarSet};
pub use store::Store;
