//! # Single-select Example
//!
//! Pick one of twenty options. Enter confirms the highlighted option (or the
//! one toggled with space), escape cancels.
//!
//! Diagnostics go to `picklist-demo.log`; set `RUST_LOG` to change the level.
//!
//! Run with: `cargo run --example single`

use picklist::{ask_single, Choice};
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

    let result = ask_single("Choose an option.", options)?;
    info!(selection = ?result.selection, canceled = result.canceled, "prompt done");

    match result.selection {
        Some(value) if !result.canceled => println!("Selected value: {value}"),
        _ => println!("Canceled!"),
    }
    Ok(())
}
