//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envman")]
#[command(about = "Interactive .env file manager")]
#[command(version)]
pub struct Cli {
    /// Run a one-shot command instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the env file
    #[arg(short, long, global = true, default_value = ".env")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all variables
    #[command(visible_alias = "ls")]
    List,

    /// Print the value of a variable
    Get {
        /// Variable name
        name: String,
    },

    /// Add or update a variable
    Set {
        /// NAME=VALUE format
        definition: String,
    },

    /// Remove a variable
    #[command(visible_alias = "rm")]
    Unset {
        /// Variable name
        name: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
