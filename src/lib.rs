//! # assist - Multilingual Chat Assistant CLI
//!
//! `assist` is a command-line chat assistant for OpenAI-compatible
//! chat-completion endpoints (Groq by default). It keeps the conversation for
//! the length of a session, asks the model to answer politely in the language
//! you pick, and lets you tune creativity and response length as you go.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY=...
//! export LANGCHAIN_API_KEY=...
//!
//! # Interactive chat
//! assist
//!
//! # Answer in French with a longer limit
//! assist chat --language French --max-tokens 400
//!
//! # One-shot question from stdin
//! echo "What is Rust?" | assist ask
//! ```
//!
//! Both API keys may also come from a `.env` file in the working directory.
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/assist/config.toml`:
//!
//! ```toml
//! [assistant]
//! endpoint = "https://api.groq.com/openai"
//! model = "llama-3.3-70b-versatile"
//! language = "English"
//! temperature = 0.5
//! max_tokens = 200
//! ```

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and startup secrets.
pub mod config;

/// Turns and the session transcript.
pub mod conversation;

/// Error kinds surfaced to callers.
pub mod error;

/// Prompt assembly and the completion client.
pub mod generation;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
