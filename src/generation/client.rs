use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::prompt::Prompt;
use crate::error::GenerationError;

/// A fully parameterized request for one completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: Prompt,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_request(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: [
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.prompt.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.prompt.human),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        }
    }
}

/// HTTP client for OpenAI-compatible chat-completion endpoints.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionService for CompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let url = self.url();
        let body = ChatCompletionRequest::from_request(request);

        tracing::debug!(%url, model = %request.model, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| GenerationError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_completion_body(&text)
    }
}

/// Extracts the reply text from a chat-completion response body.
pub fn parse_completion_body(body: &str) -> Result<String, GenerationError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_request() -> CompletionRequest {
        CompletionRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            prompt: Prompt {
                system: "Be polite in Thai.".to_string(),
                human: "User: hi".to_string(),
            },
            temperature: 0.25,
            max_tokens: 120,
        }
    }

    #[test]
    fn test_request_body_carries_sampling_options() {
        let request = sample_request();
        let body = serde_json::to_value(ChatCompletionRequest::from_request(&request)).unwrap();

        assert_eq!(body["model"], "llama-3.3-70b-versatile");
        assert_eq!(body["temperature"], 0.25);
        assert_eq!(body["max_tokens"], 120);
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "Be polite in Thai.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "User: hi");
    }

    #[test]
    fn test_url_joins_endpoint() {
        let client = CompletionClient::new("https://api.groq.com/openai/".to_string(), "k".to_string());
        assert_eq!(client.url(), "https://api.groq.com/openai/v1/chat/completions");
    }

    #[test]
    fn test_parse_completion_body() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"Bonjour !"}}]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "Bonjour !");
    }

    #[test]
    fn test_parse_completion_body_uses_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"one"}},{"message":{"content":"two"}}]}"#;
        assert_eq!(parse_completion_body(body).unwrap(), "one");
    }

    #[test]
    fn test_parse_completion_body_no_choices() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(
            parse_completion_body(body),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_completion_body_null_content() {
        let body = r#"{"choices":[{"message":{"content":null}}]}"#;
        assert!(matches!(
            parse_completion_body(body),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_completion_body_invalid_json() {
        assert!(matches!(
            parse_completion_body("not json"),
            Err(GenerationError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_body_error_payload() {
        let body = r#"{"error":{"message":"invalid api key"}}"#;
        assert!(matches!(
            parse_completion_body(body),
            Err(GenerationError::MalformedResponse(_))
        ));
    }
}
