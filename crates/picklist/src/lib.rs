//! **picklist** -- interactive list prompts for the terminal.
//!
//! This is the umbrella crate that re-exports everything needed to ask a
//! question from a single dependency:
//!
//! ```toml
//! [dependencies]
//! picklist = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`picklist_core`] are available at the crate root
//!   ([`Prompt`], [`Choice`], [`Message`], [`ask_single`], [`ask_multi`], etc.).
//! * [`ratatui`] and [`crossterm`] are re-exported so styles and key codes can
//!   be configured without depending on them directly.
//!
//! # Quick start
//!
//! ```no_run
//! use picklist::{ask_single, Choice};
//!
//! let choices = (1..=20).map(|i| Choice::new(format!("Option {i}"), i)).collect();
//! let result = ask_single("Choose an option.", choices)?;
//! match result.selection {
//!     Some(value) if !result.canceled => println!("Selected value: {value}"),
//!     _ => println!("Canceled!"),
//! }
//! # Ok::<(), picklist::PromptError>(())
//! ```

pub use picklist_core::*;

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
