//! Interactive chat mode.
//!
//! Provides a REPL-style interface with slash commands for adjusting the
//! generation settings mid-conversation.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, Submission, apply_setting, describe_failure, submit};
