//! Offline theme extraction by vocabulary lookup.

use async_trait::async_trait;
use confessional_core::taxonomy::{MAX_THEMES, VALID_THEMES};

use super::ThemeExtractor;
use crate::error::AgentResult;

/// Reports vocabulary labels that appear verbatim in the message.
///
/// A label matches when its words occur consecutively as whole words, after
/// lower-casing and treating anything that is not alphanumeric or an
/// apostrophe as a separator. Labels come back in vocabulary order.
#[derive(Debug, Clone, Default)]
pub struct VocabularyExtractor;

impl VocabularyExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core of [`ThemeExtractor::extract`].
    #[must_use]
    pub fn scan(&self, text: &str) -> Vec<String> {
        let words: Vec<String> = text
            .to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        VALID_THEMES
            .iter()
            .filter(|theme| {
                let needle: Vec<&str> = theme.split_whitespace().collect();
                words
                    .windows(needle.len())
                    .any(|window| window.iter().zip(&needle).all(|(w, n)| w == n))
            })
            .take(MAX_THEMES)
            .map(|theme| (*theme).to_string())
            .collect()
    }
}

#[async_trait]
impl ThemeExtractor for VocabularyExtractor {
    async fn extract(&self, text: &str) -> AgentResult<Vec<String>> {
        Ok(self.scan(text))
    }

    fn name(&self) -> &str {
        "vocabulary"
    }
}
