//! # Dynamic Message Example
//!
//! The question text is computed from the current selection and re-evaluated
//! on every frame, so the header changes the moment space is pressed.
//!
//! Run with: `cargo run --example dynamic_message`

use picklist::{ask_multi, Choice, Message, Multi, SelectionState};
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create("picklist-demo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,picklist_core=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let options = (1..=20)
        .map(|i| Choice::new(format!("Option {i}"), i))
        .collect();

    let message = Message::computed(|selection: &Multi<i32>| match selection.len() {
        0 => "Choose some options.".to_string(),
        n => format!("You have chosen {n} option(s)."),
    });

    let result = ask_multi(message, options)?;
    info!(selection = ?result.selection, canceled = result.canceled, "prompt done");

    if result.canceled {
        println!("Canceled!");
    } else {
        println!("Values: {:?}", result.selection);
    }
    Ok(())
}
