use anyhow::{bail, Context, Result};
use confessional_server::{AnalyzeFeelingsRequest, AnalyzeFeelingsResponse, ErrorEnvelope};

/// Talks to a running `confessional serve`.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/analyze-feelings", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one chat message and return the server's song pick.
    pub async fn analyze(&self, message: &str) -> Result<AnalyzeFeelingsResponse> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeFeelingsRequest {
                message: Some(message.to_string()),
            })
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error,
                Err(_) => status.to_string(),
            };
            bail!("Server returned {status}: {detail}");
        }

        response
            .json::<AnalyzeFeelingsResponse>()
            .await
            .context("Server returned an unreadable reply")
    }
}
