//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the set command
///
/// Upsert semantics: adds the variable if absent, updates it in place if
/// present. The interactive menu keeps add and edit separate.
pub fn execute(ctx: &Context, definition: &str) -> Result<()> {
    let Some((name, value)) = definition.split_once('=') else {
        anyhow::bail!("Invalid format. Use: NAME=VALUE");
    };
    let name = name.trim();
    let value = value.trim();

    let mut store = ctx.open_store()?;

    if store.contains(name) {
        store.edit(name, value)?;
        ctx.print_success(&format!("Updated: {}={}", name.cyan(), value));
    } else {
        store.add(name, value)?;
        ctx.print_success(&format!("Added: {}={}", name.cyan(), value));
    }

    Ok(())
}
