use tracing::Instrument;

use super::client::{CompletionRequest, CompletionService};
use super::options::GenerationOptions;
use super::prompt::build_prompt;
use crate::conversation::Transcript;
use crate::error::AssistantError;

/// Trace project label attached to every generation span.
pub const TRACE_PROJECT: &str = "Personalized AI Assistant";

/// Turns a transcript into the assistant's next reply.
pub struct ResponseGenerator<S> {
    service: S,
    model: String,
}

impl<S: CompletionService> ResponseGenerator<S> {
    pub fn new(service: S, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates a reply to the whole transcript.
    ///
    /// Failures are logged with their detail and returned as
    /// [`AssistantError::GenerationFailed`].
    pub async fn generate(
        &self,
        transcript: &Transcript,
        options: &GenerationOptions,
    ) -> Result<String, AssistantError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: build_prompt(transcript, options.language()),
            temperature: options.temperature(),
            max_tokens: options.max_tokens(),
        };

        let span = tracing::info_span!(
            "generate",
            project = TRACE_PROJECT,
            model = %self.model,
            language = %options.language(),
            turns = transcript.len(),
        );

        match self.service.complete(&request).instrument(span).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "generated response");
                Ok(text)
            }
            Err(source) => {
                tracing::error!(error = %source, "Failed to generate response");
                Err(AssistantError::GenerationFailed { source })
            }
        }
    }
}
