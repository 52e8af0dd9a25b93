//! Lyric-matching agent.
//!
//! Takes a fragment of lyrics typed by the user, scores it against the lyric
//! snippet dataset with the substring policy inside an execution sandbox, and
//! reads the verdict back from the sandbox's output.

use std::sync::Arc;

use confessional_core::report::{parse_report, MatchReport};
use confessional_core::{Catalog, ScoringPolicy};

use crate::error::AgentResult;
use crate::sandbox::{run_scoring_job, ExecutionProvider, InProcessProvider, ScoringJob};

#[derive(Debug, Clone)]
pub struct LyricAgent {
    provider: Arc<dyn ExecutionProvider>,
    catalog: Catalog,
}

impl Default for LyricAgent {
    fn default() -> Self {
        Self::new(Arc::new(InProcessProvider::new()))
    }
}

impl LyricAgent {
    /// Agent over the built-in lyric snippets.
    #[must_use]
    pub fn new(provider: Arc<dyn ExecutionProvider>) -> Self {
        Self::with_catalog(provider, Catalog::lyric_snippets())
    }

    #[must_use]
    pub fn with_catalog(provider: Arc<dyn ExecutionProvider>, catalog: Catalog) -> Self {
        Self { provider, catalog }
    }

    /// Find the song whose lyrics best overlap `input`.
    pub async fn match_lyrics(&self, input: &str) -> AgentResult<MatchReport> {
        let job = ScoringJob::new(input, ScoringPolicy::Substring, &self.catalog);
        let stdout = run_scoring_job(self.provider.as_ref(), &job).await?;
        log::info!("Agent result:\n{}", stdout.trim());
        Ok(parse_report(&stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confessional_core::{CatalogEntry, NO_MATCH_TITLE};

    #[tokio::test]
    async fn test_match_lyrics_default_catalog() {
        let report = LyricAgent::default()
            .match_lyrics("Breathe in so deep")
            .await
            .unwrap();
        assert_eq!(report.title, "Hands Down");
        assert_eq!(
            report.snippet.as_deref(),
            Some("breath in for luck breathe in so deep")
        );
    }

    #[tokio::test]
    async fn test_match_lyrics_no_match() {
        let report = LyricAgent::default().match_lyrics("").await.unwrap();
        assert_eq!(report.title, NO_MATCH_TITLE);
        assert!(report.snippet.is_none());
    }

    #[tokio::test]
    async fn test_match_lyrics_custom_catalog() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::from_lyrics("Vindicated", "hope dangles on a string like a necklace"),
            CatalogEntry::from_lyrics("Best Deceptions", "i have faith in you"),
        ])
        .unwrap();
        let agent = LyricAgent::with_catalog(Arc::new(InProcessProvider::new()), catalog);
        let report = agent
            .match_lyrics("I have faith in you, but it feels like a necklace on a string")
            .await
            .unwrap();
        assert_eq!(report.title, "Vindicated");
    }
}
