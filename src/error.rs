//! Error kinds surfaced across the chat boundary.

use thiserror::Error;

/// Errors the assistant reports to its caller.
///
/// Anything that is not one of these kinds (file I/O, prompt I/O) travels as
/// `anyhow::Error` with context, like the rest of the CLI.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// A required secret is absent from the environment. Fatal at startup.
    #[error(
        "API keys are not available. Please ensure {} and {} are set in your environment. (missing: {})",
        crate::config::TRACING_API_KEY_ENV,
        crate::config::INFERENCE_API_KEY_ENV,
        .missing.join(", ")
    )]
    StartupConfigMissing { missing: Vec<&'static str> },

    /// The completion call or its response parsing failed.
    #[error("Failed to generate response")]
    GenerationFailed {
        #[source]
        source: GenerationError,
    },

    /// A generation option is outside its accepted range.
    #[error("Invalid {name}: {value} (expected a value between {min} and {max})")]
    InvalidOption {
        name: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

/// Failures of a single completion request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to connect to API endpoint {url}: {message}")]
    Transport { url: String, message: String },

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("completion response contained no text")]
    EmptyResponse,
}

impl AssistantError {
    /// Returns the underlying detail of a failed generation, if any.
    pub const fn generation_detail(&self) -> Option<&GenerationError> {
        match self {
            Self::GenerationFailed { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_error_names_missing_keys() {
        let err = AssistantError::StartupConfigMissing {
            missing: vec!["GROQ_API_KEY"],
        };
        let message = err.to_string();
        assert!(message.starts_with("API keys are not available"));
        assert!(message.contains("LANGCHAIN_API_KEY"));
        assert!(message.ends_with("(missing: GROQ_API_KEY)"));
    }

    #[test]
    fn test_generation_failed_is_generic() {
        let err = AssistantError::GenerationFailed {
            source: GenerationError::EmptyResponse,
        };
        assert_eq!(err.to_string(), "Failed to generate response");
        assert!(matches!(
            err.generation_detail(),
            Some(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_invalid_option_message() {
        let err = AssistantError::InvalidOption {
            name: "max_tokens",
            value: "10".to_string(),
            min: "50".to_string(),
            max: "500".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid max_tokens: 10 (expected a value between 50 and 500)"
        );
        assert!(err.generation_detail().is_none());
    }
}
