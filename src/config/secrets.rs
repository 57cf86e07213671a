use std::fmt;

use crate::error::AssistantError;

/// Environment variable holding the tracing/observability API key.
pub const TRACING_API_KEY_ENV: &str = "LANGCHAIN_API_KEY";
/// Environment variable holding the inference-service API key.
pub const INFERENCE_API_KEY_ENV: &str = "GROQ_API_KEY";

/// The two API keys the assistant needs before it can start.
#[derive(Clone)]
pub struct Secrets {
    pub tracing_api_key: String,
    pub inference_api_key: String,
}

impl Secrets {
    /// Reads both keys from the process environment.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both keys through `lookup`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AssistantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name| lookup(name).filter(|value| !value.trim().is_empty());

        let tracing_api_key = read(TRACING_API_KEY_ENV);
        let inference_api_key = read(INFERENCE_API_KEY_ENV);

        match (tracing_api_key, inference_api_key) {
            (Some(tracing_api_key), Some(inference_api_key)) => Ok(Self {
                tracing_api_key,
                inference_api_key,
            }),
            (tracing, inference) => {
                let mut missing = Vec::new();
                if tracing.is_none() {
                    missing.push(TRACING_API_KEY_ENV);
                }
                if inference.is_none() {
                    missing.push(INFERENCE_API_KEY_ENV);
                }
                Err(AssistantError::StartupConfigMissing { missing })
            }
        }
    }
}

// Keys never reach logs or `/config` output.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("tracing_api_key", &"(set)")
            .field("inference_api_key", &"(set)")
            .finish()
    }
}
