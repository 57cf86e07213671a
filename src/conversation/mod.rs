//! Conversation state: turns and the append-only transcript.

mod transcript;
mod turn;

pub use transcript::Transcript;
pub use turn::{Role, Turn};
