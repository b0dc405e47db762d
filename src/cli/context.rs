//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::store::Store;
use crate::utils::path::expand_tilde;

/// Common context for command execution
pub struct Context {
    pub env_file: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        let env_file = expand_tilde(&cli.file.to_string_lossy());
        Self { env_file }
    }

    /// Load the env file into a store
    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.env_file)
            .with_context(|| format!("failed to load {}", self.env_file.display()))
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
