use serde::{Deserialize, Serialize};

use confessional_core::report::render_report;
use confessional_core::{Catalog, CatalogEntry, Matcher, Query, ScoringPolicy};

use crate::error::AgentResult;

/// A self-contained scoring run: the query, the policy, and the dataset.
///
/// This is what gets shipped into a sandbox. Its serialised form is the
/// "code" handed to [`Sandbox::execute`](super::Sandbox::execute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringJob {
    pub query: String,
    pub policy: ScoringPolicy,
    pub songs: Vec<CatalogEntry>,
}

impl ScoringJob {
    #[must_use]
    pub fn new(query: impl Into<String>, policy: ScoringPolicy, catalog: &Catalog) -> Self {
        Self {
            query: query.into(),
            policy,
            songs: catalog.iter().cloned().collect(),
        }
    }

    /// Serialise the job for execution.
    pub fn to_code(&self) -> AgentResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a job back from its serialised form.
    pub fn from_code(code: &str) -> AgentResult<Self> {
        Ok(serde_json::from_str(code)?)
    }

    /// Run the match and print the report.
    pub fn evaluate(&self) -> AgentResult<String> {
        let catalog = Catalog::from_entries(self.songs.iter().cloned())?;
        let result = Matcher::new(self.policy).find_best(&Query::text(&self.query), &catalog);
        Ok(render_report(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_carries_catalog_in_order() {
        let job = ScoringJob::new("faith", ScoringPolicy::Substring, &Catalog::lyric_snippets());
        let titles: Vec<&str> = job.songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, Catalog::lyric_snippets().titles());
    }

    #[test]
    fn test_evaluate_prints_report() {
        let job = ScoringJob::new("FAITH", ScoringPolicy::Substring, &Catalog::lyric_snippets());
        assert_eq!(
            job.evaluate().unwrap(),
            "Best Match: The Best Deceptions\nLyrics Snippet: i have faith in you\n"
        );
    }

    #[test]
    fn test_evaluate_no_match() {
        let job = ScoringJob::new("zzz", ScoringPolicy::Substring, &Catalog::lyric_snippets());
        assert_eq!(job.evaluate().unwrap(), "Best Match: No good match found.\n");
    }

    #[test]
    fn test_evaluate_rejects_duplicate_songs() {
        let mut job = ScoringJob::new("x", ScoringPolicy::Substring, &Catalog::lyric_snippets());
        job.songs.push(job.songs[0].clone());
        assert!(job.evaluate().is_err());
    }

    #[test]
    fn test_code_round_trip_preserves_policy() {
        let job = ScoringJob::new("hope", ScoringPolicy::SetMembership, &Catalog::new());
        let code = job.to_code().unwrap();
        assert!(code.contains("\"set-membership\""));
        assert_eq!(ScoringJob::from_code(&code).unwrap(), job);
    }
}
