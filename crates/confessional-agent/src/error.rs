//! Error types for external collaborators.

use thiserror::Error;

/// Errors raised while talking to a classifier or an execution sandbox.
#[derive(Debug, Error)]
pub enum AgentError {
    /// An HTTP request to an external service returned a failure status.
    #[error("HTTP error from {source_name}: {message}")]
    Http {
        source_name: String,
        message: String,
    },

    /// A response from an external service could not be parsed.
    #[error("parse error from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Provisioning, execution, or teardown of a sandbox failed.
    #[error("sandbox error from {provider}: {message}")]
    Sandbox { provider: String, message: String },

    /// Sandboxed code exited unsuccessfully.
    #[error("sandbox run exited with status {exit_code}: {stderr}")]
    ExecutionFailed { exit_code: i32, stderr: String },

    /// An error propagated from the core domain layer.
    #[error("core error: {0}")]
    Core(#[from] confessional_core::Error),

    /// The job sent to a sandbox could not be serialised.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Returns `true` when the failure came from a remote service rather
    /// than from local data.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Request(_) | Self::Sandbox { .. } | Self::ExecutionFailed { .. }
        )
    }
}

/// Convenience alias for collaborator results.
pub type AgentResult<T> = std::result::Result<T, AgentError>;
