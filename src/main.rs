//! envman - Interactive .env File Manager

use anyhow::Result;
use clap::Parser;

use envman::cli::{commands, Cli, Commands, Context};
use envman::menu;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli);

    match &cli.command {
        Some(Commands::List) => commands::list::execute(&ctx),
        Some(Commands::Get { name }) => commands::get::execute(&ctx, name),
        Some(Commands::Set { definition }) => commands::set::execute(&ctx, definition),
        Some(Commands::Unset { name, yes }) => commands::unset::execute(&ctx, name, *yes),
        None => {
            if !ctx.env_file.exists() {
                println!("Creating new env file: {}", ctx.env_file.display());
            }
            let mut store = ctx.open_store()?;
            menu::run(&ctx, &mut store)
        }
    }
}
