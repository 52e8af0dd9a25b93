//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze-feelings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeFeelingsRequest {
    /// Missing, null, and blank messages are all rejected by the handler.
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `POST /api/analyze-feelings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeFeelingsResponse {
    /// Winning song, `null` when nothing matched.
    pub song: Option<String>,

    /// Themes of the winning song that the message touched on.
    #[serde(default)]
    pub themes: Vec<String>,

    #[serde(default)]
    pub score: usize,
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub message: String,

    /// Pre-extracted theme labels.
    #[serde(default)]
    pub themes: Vec<String>,
}

/// Reply of `POST /api/analyze`.
///
/// `song` is an empty string when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub score: usize,
    pub song: String,
    pub themes: Vec<String>,
}
