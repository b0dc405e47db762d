//! Unset command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::Context;

/// Execute the unset command
pub fn execute(ctx: &Context, name: &str, yes: bool) -> Result<()> {
    let mut store = ctx.open_store()?;
    let value = store.get(name)?.to_string();

    println!("Found {} = '{}'", name.cyan(), value.dimmed());

    if !yes
        && !Confirm::new()
            .with_prompt(format!("Delete '{name}'?"))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete(name)?;
    ctx.print_success(&format!("Deleted: {name}"));

    Ok(())
}
