//! Language-model theme classifier.
//!
//! Sends the message to an OpenAI-compatible chat completions endpoint with a
//! prompt listing the vocabulary, then keeps only the vocabulary labels found
//! in the comma-separated reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use confessional_core::taxonomy::{filter_to_vocabulary, MAX_THEMES, VALID_THEMES};

use super::ThemeExtractor;
use crate::config::Config;
use crate::error::{AgentError, AgentResult};
use crate::resilience::RateLimiter;

const SOURCE_NAME: &str = "theme classifier";

/// Upper bound on one classifier round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// API request/response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

/// Theme extraction backed by a hosted language model.
#[derive(Debug, Clone)]
pub struct LlmThemeExtractor {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    rate_limiter: RateLimiter,
}

impl LlmThemeExtractor {
    /// Create an extractor for the given endpoint and model.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        requests_per_second: u32,
    ) -> AgentResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("confessional/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: model.into(),
            rate_limiter: RateLimiter::new(requests_per_second),
        })
    }

    /// Create an extractor from configuration.
    ///
    /// A missing API key becomes an empty bearer token; callers are expected
    /// to check [`Config::has_llm`] first.
    pub fn from_config(config: &Config) -> AgentResult<Self> {
        Self::new(
            &config.llm_base_url,
            config.llm_api_key.clone().unwrap_or_default(),
            config.llm_model.clone(),
            config.requests_per_second,
        )
    }

    /// Ask the model for labels and return its raw reply.
    async fn complete(&self, text: &str) -> AgentResult<String> {
        self.rate_limiter.acquire().await;

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: text.to_string(),
                },
            ],
            max_tokens: 50,
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Http {
                source_name: SOURCE_NAME.to_string(),
                message: format!("{status}: {body}"),
            });
        }

        let result: CompletionResponse = response.json().await.map_err(|e| AgentError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AgentError::Parse {
                source_name: SOURCE_NAME.to_string(),
                message: "response contained no message content".to_string(),
            })
    }
}

#[async_trait]
impl ThemeExtractor for LlmThemeExtractor {
    async fn extract(&self, text: &str) -> AgentResult<Vec<String>> {
        let reply = self.complete(text).await?;
        let themes = filter_to_vocabulary(parse_theme_list(&reply));
        log::info!("Classifier reply {:?} -> themes {:?}", reply.trim(), themes);
        Ok(themes)
    }

    fn name(&self) -> &str {
        "llm"
    }
}

fn system_prompt() -> String {
    format!(
        "You identify the emotional themes of a message. Reply with between 1 and {} \
         themes, lower-case, separated by commas, and nothing else. Use only themes \
         from this list: {}.",
        MAX_THEMES,
        VALID_THEMES.join(", ")
    )
}

/// Split a classifier reply into candidate labels.
///
/// Accepts commas, semicolons, and newlines as separators and strips list
/// bullets, numbering, quotes, and trailing periods. The result is not yet
/// restricted to the vocabulary.
pub fn parse_theme_list(reply: &str) -> Vec<String> {
    reply
        .split([',', ';', '\n'])
        .map(|part| {
            part.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '-' | '*' | '•' | ')'))
                .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '.' | '`'))
                .to_lowercase()
        })
        .filter(|label| !label.is_empty())
        .collect()
}
