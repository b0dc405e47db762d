//! Get command implementation

use anyhow::Result;

use crate::cli::Context;

/// Execute the get command
///
/// Prints the raw value only, keeping the output script-friendly.
pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let store = ctx.open_store()?;
    let value = store.get(name)?;
    println!("{value}");
    Ok(())
}
