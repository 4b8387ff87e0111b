//! # Multi-select Example
//!
//! Pick any number of a hundred options, far more than fit on screen. The
//! pointer stays on the middle row while the list scrolls underneath it.
//!
//! Also shows [`PromptOptions`]: the prompt draws to stderr so the picked
//! values can be piped from stdout, e.g.
//! `cargo run --example multi | sort -n`.
//!
//! Run with: `cargo run --example multi`

use picklist::{ask_multi_with, Choice, OutputTarget, PromptOptions, TerminalOptions};
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

    let options = (1..=100)
        .map(|i| Choice::new(format!("Tenant {i}"), i))
        .collect();

    let opts = PromptOptions {
        terminal: TerminalOptions {
            output: OutputTarget::Stderr,
            ..TerminalOptions::default()
        },
        ..PromptOptions::default()
    };

    let result = ask_multi_with("Choose which tenants to install.", options, opts)?;
    info!(picked = result.selection.len(), canceled = result.canceled, "prompt done");

    if result.canceled {
        eprintln!("Canceled!");
        return Ok(());
    }
    for value in result.selection {
        println!("{value}");
    }
    Ok(())
}
