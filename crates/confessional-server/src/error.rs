//! Error types for the HTTP API.
//!
//! Every failure leaves the server as a JSON envelope
//! `{ "error": ..., "details": ... }`; `details` is omitted for input errors.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use confessional_agent::AgentError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was missing data or was not valid JSON.
    #[error("{0}")]
    BadRequest(String),

    /// Theme extraction or another collaborator failed.
    #[error("Failed to analyze feelings")]
    Upstream(#[from] AgentError),
}

impl ApiError {
    /// Remote collaborator failures are errors; bad input and local data
    /// problems are only warnings.
    fn log_level(&self) -> log::Level {
        match self {
            Self::BadRequest(_) => log::Level::Warn,
            Self::Upstream(e) if e.is_upstream() => log::Level::Error,
            Self::Upstream(_) => log::Level::Warn,
        }
    }

    fn envelope(&self) -> ErrorEnvelope {
        let details = match self {
            Self::BadRequest(_) => None,
            Self::Upstream(e) => Some(e.to_string()),
        };
        ErrorEnvelope {
            error: self.to_string(),
            details,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = self.envelope();
        log::log!(
            self.log_level(),
            "{}: {}",
            envelope.error,
            envelope.details.as_deref().unwrap_or("-")
        );
        HttpResponse::build(self.status_code()).json(envelope)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
