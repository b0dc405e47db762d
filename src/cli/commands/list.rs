//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the list command
pub fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    if store.is_empty() {
        println!("No environment variables found.");
        return Ok(());
    }

    for entry in store.list() {
        println!("{}={}", entry.name.cyan(), entry.value);
    }

    Ok(())
}
