//! Terminal UI components (spinner, colors, transcript lines).

use anyhow::Result;
use inquire::InquireError;

use crate::conversation::Turn;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Formats one turn as a labeled transcript line, e.g. `You: hello`.
pub fn format_turn(turn: &Turn) -> String {
    format!("{} {}", Style::speaker(turn.role()), turn.content())
}

/// Prints an inline error to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating Ctrl+C or Escape as a clean exit.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_turn_labels_speakers() {
        let line = format_turn(&Turn::user("hello"));
        assert!(line.contains("You:"));
        assert!(line.ends_with(" hello"));

        let line = format_turn(&Turn::assistant("hi there"));
        assert!(line.contains("AI:"));
        assert!(line.ends_with(" hi there"));
    }

    #[test]
    fn test_handle_prompt_cancellation_ok() {
        assert!(handle_prompt_cancellation(|| Ok(())).is_ok());
    }

    #[test]
    fn test_handle_prompt_cancellation_swallows_cancel() {
        assert!(handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into())).is_ok());
        assert!(
            handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into())).is_ok()
        );
    }

    #[test]
    fn test_handle_prompt_cancellation_other_error() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("disk full")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("disk full"));
    }
}
