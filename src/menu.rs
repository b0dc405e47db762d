//! Interactive menu loop
//!
//! A small state machine over the store: list, add, edit, and delete,
//! looping back to the main menu after each action. Every blocking prompt
//! doubles as the cancellation point: Ctrl+C anywhere transitions straight
//! to `Exiting`, discarding whatever was being typed.

use std::io;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::cli::Context;
use crate::completion::NameCompletion;
use crate::error::Error;
use crate::store::Store;

/// Menu states. `ConfirmDelete` carries the key picked in `Deleting`;
/// the delete is only committed after the confirmation passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Listing,
    Adding,
    Editing,
    Deleting,
    ConfirmDelete { name: String },
    Exiting,
}

impl MenuState {
    /// Map a main-menu selection to its action state.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuState::Listing),
            "2" => Some(MenuState::Adding),
            "3" => Some(MenuState::Editing),
            "4" => Some(MenuState::Deleting),
            "5" => Some(MenuState::Exiting),
            _ => None,
        }
    }
}

/// Run the interactive menu until exit or interrupt.
pub fn run(ctx: &Context, store: &mut Store) -> Result<()> {
    println!();
    println!("{}", "Tip: Use Ctrl+C to exit at any time".dimmed());
    println!(
        "{}",
        "Tip: Use Tab for key suggestions when editing/deleting".dimmed()
    );

    let mut state = MenuState::Main;
    loop {
        state = match state {
            MenuState::Main => main_menu()?,
            MenuState::Listing => {
                print_listing(store);
                MenuState::Main
            }
            MenuState::Adding => add_var(ctx, store)?,
            MenuState::Editing => edit_var(ctx, store)?,
            MenuState::Deleting => choose_delete(ctx, store)?,
            MenuState::ConfirmDelete { name } => confirm_delete(ctx, store, &name)?,
            MenuState::Exiting => {
                // Mutations are write-through, so disk is already current.
                // Skip the flush when nothing was ever written, so a
                // browse-only session does not materialize an empty file.
                if store.path().exists() {
                    store.flush()?;
                }
                println!("Goodbye!");
                return Ok(());
            }
        };
    }
}

/// Print the menu and read a selection. `None` inside the result means
/// the prompt was interrupted.
fn main_menu() -> Result<MenuState> {
    println!();
    println!("{}", "Environment Variable Manager".bold());
    println!("1. List all variables");
    println!("2. Add new variable");
    println!("3. Edit variable");
    println!("4. Delete variable");
    println!("5. Exit");
    println!();

    let choice = match prompt(Input::new().with_prompt("Enter your choice (1-5)"))? {
        Some(choice) => choice,
        None => return Ok(MenuState::Exiting),
    };

    Ok(MenuState::from_choice(&choice).unwrap_or_else(|| {
        println!("{}", "Invalid choice. Please try again.".yellow());
        MenuState::Main
    }))
}

fn print_listing(store: &Store) {
    if store.is_empty() {
        println!("\nNo environment variables found.");
        return;
    }

    println!("\n{}", "Current Environment Variables:".bold());
    println!("{}", "-".repeat(50).dimmed());
    for entry in store.list() {
        println!("{} = {}", entry.name.cyan(), entry.value);
    }
    println!("{}", "-".repeat(50).dimmed());
}

fn add_var(ctx: &Context, store: &mut Store) -> Result<MenuState> {
    println!(
        "\n{}",
        "Press Tab for suggestions or Ctrl+C to cancel".dimmed()
    );

    let completion = NameCompletion::new(store.names());
    let key = match prompt(
        Input::new()
            .with_prompt("Enter key")
            .completion_with(&completion),
    )? {
        Some(key) => key.trim().to_string(),
        None => return Ok(MenuState::Exiting),
    };

    if key.is_empty() {
        ctx.print_error("Key cannot be empty");
        return Ok(MenuState::Main);
    }

    let value = match prompt(Input::new().with_prompt("Enter value").allow_empty(true))? {
        Some(value) => value.trim().to_string(),
        None => return Ok(MenuState::Exiting),
    };

    match store.add(&key, &value) {
        Ok(()) => ctx.print_success(&format!("Added: {}={}", key.cyan(), value)),
        Err(err @ Error::Duplicate(_)) => {
            ctx.print_error(&err.to_string());
            ctx.print_warning("Use the edit option to modify it");
        }
        Err(err @ Error::InvalidName(_)) => ctx.print_error(&err.to_string()),
        Err(err) => return Err(err.into()),
    }

    Ok(MenuState::Main)
}

fn edit_var(ctx: &Context, store: &mut Store) -> Result<MenuState> {
    print_listing(store);
    println!(
        "\n{}",
        "Press Tab for suggestions or Ctrl+C to cancel".dimmed()
    );

    let completion = NameCompletion::new(store.names());
    let key = match prompt(
        Input::new()
            .with_prompt("Enter key to edit")
            .completion_with(&completion),
    )? {
        Some(key) => key.trim().to_string(),
        None => return Ok(MenuState::Exiting),
    };

    let current = match store.get(&key) {
        Ok(value) => value.to_string(),
        Err(err @ Error::NotFound(_)) => {
            ctx.print_error(&err.to_string());
            return Ok(MenuState::Main);
        }
        Err(err) => return Err(err.into()),
    };

    let new_value = match prompt(
        Input::new()
            .with_prompt("New value (Enter keeps current)")
            .with_initial_text(&current)
            .allow_empty(true),
    )? {
        Some(value) => value.trim().to_string(),
        None => return Ok(MenuState::Exiting),
    };

    if new_value == current {
        println!("No changes made.");
        return Ok(MenuState::Main);
    }

    match store.edit(&key, &new_value) {
        Ok(()) => ctx.print_success(&format!("Updated: {}={}", key.cyan(), new_value)),
        Err(err @ Error::NotFound(_)) => ctx.print_error(&err.to_string()),
        Err(err) => return Err(err.into()),
    }

    Ok(MenuState::Main)
}

fn choose_delete(ctx: &Context, store: &mut Store) -> Result<MenuState> {
    print_listing(store);
    println!(
        "\n{}",
        "Press Tab for suggestions or Ctrl+C to cancel".dimmed()
    );

    let completion = NameCompletion::new(store.names());
    let key = match prompt(
        Input::new()
            .with_prompt("Enter key to delete")
            .completion_with(&completion),
    )? {
        Some(key) => key.trim().to_string(),
        None => return Ok(MenuState::Exiting),
    };

    match store.get(&key) {
        Ok(value) => println!("Found {} = '{}'", key.cyan(), value.dimmed()),
        Err(err @ Error::NotFound(_)) => {
            ctx.print_error(&err.to_string());
            return Ok(MenuState::Main);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(MenuState::ConfirmDelete { name: key })
}

fn confirm_delete(ctx: &Context, store: &mut Store, name: &str) -> Result<MenuState> {
    let confirmed = match Confirm::new()
        .with_prompt(format!("Are you sure you want to delete '{name}'?"))
        .default(false)
        .interact()
    {
        Ok(confirmed) => confirmed,
        Err(err) if interrupted(&err) => return Ok(MenuState::Exiting),
        Err(err) => return Err(err.into()),
    };

    if !confirmed {
        println!("Deletion cancelled.");
        return Ok(MenuState::Main);
    }

    match store.delete(name) {
        Ok(()) => ctx.print_success(&format!("Deleted: {name}")),
        Err(err @ Error::NotFound(_)) => ctx.print_error(&err.to_string()),
        Err(err) => return Err(err.into()),
    }

    Ok(MenuState::Main)
}

/// Read a line from an input prompt; `Ok(None)` means the prompt was
/// interrupted with Ctrl+C.
fn prompt(input: Input<String>) -> Result<Option<String>> {
    match input.interact_text() {
        Ok(text) => Ok(Some(text)),
        Err(err) if interrupted(&err) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn interrupted(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted)
}
