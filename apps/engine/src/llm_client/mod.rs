//! Completion client — the single point of entry for Groq API calls.
//!
//! ARCHITECTURAL RULE: no other module talks to the completion service
//! directly. Everything goes through [`CompletionApi`], which the flows take
//! as a trait object so tests can substitute a scripted backend.
//!
//! Model: llama-3.3-70b-versatile (hardcoded — do not make configurable to
//! prevent drift; llama-3.1-70b is deprecated upstream).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod sanitize;

use crate::errors::GenerationError;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// One role/content entry of an outbound completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Sampling parameters for a single completion call.
#[derive(Debug, Clone, Copy)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

/// Parameters for plan generation: long structured output.
pub const PLAN_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.7,
    max_tokens: 4000,
    top_p: 1.0,
};

/// Parameters for conversational replies: short, slightly livelier.
pub const CHAT_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.8,
    max_tokens: 600,
    top_p: 1.0,
};

/// Seam between the flows and the completion service.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    /// Whether a credential is present. Flows that degrade gracefully check
    /// this before calling [`complete`](CompletionApi::complete).
    fn is_configured(&self) -> bool;

    /// Single-attempt completion call. No internal retry: retry policy, if
    /// any, belongs to the caller, and the flows in this crate do not retry.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
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

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Live client against Groq's OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
}

impl GroqClient {
    /// A blank credential counts as unconfigured, same as no credential.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionApi for GroqClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> Result<String, GenerationError> {
        // Checked before any network traffic so a missing credential never
        // shows up disguised as a remote auth failure.
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::Configuration)?;

        let request_body = CompletionRequest {
            model: MODEL,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            stream: false,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        // A 2xx with blank content is a real observed failure mode, not a
        // success with an empty answer.
        if content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        debug!("completion succeeded: {} chars", content.len());
        Ok(content)
    }
}
