//! Song matching.
//!
//! The [`Matcher`] scores every catalog entry against a [`Query`] and returns
//! the single best entry. Scoring is a plain overlap count under one of two
//! [`ScoringPolicy`] values:
//!
//! - `Substring`: a query token scores when it occurs anywhere inside the
//!   entry's running text (the catalog side is not tokenized).
//! - `SetMembership`: a query token scores when it is exactly one of the
//!   entry's tags.
//!
//! Every query token counts, including repeats. The winner is the first entry
//! in catalog order to reach the maximum score. A maximum of zero is reported
//! as [`NO_MATCH_TITLE`] with no tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::model::{Catalog, CatalogEntry};

/// Title reported when no entry scores above zero.
pub const NO_MATCH_TITLE: &str = "No good match found.";

/// How a query token is compared against a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// Token occurs as a substring of the entry's joined text.
    Substring,
    /// Token is an exact member of the entry's tags.
    #[default]
    SetMembership,
}

impl ScoringPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::SetMembership => "set-membership",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "substring" => Ok(Self::Substring),
            "set-membership" | "set" | "membership" => Ok(Self::SetMembership),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

/// Normalised query tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Tokenize raw user text: lower-case, then split on whitespace.
    ///
    /// Punctuation is left attached to its word and repeated words are kept.
    #[must_use]
    pub fn text(raw: &str) -> Self {
        Self {
            tokens: raw
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build a query from pre-extracted theme labels.
    ///
    /// Themes form a set, so repeats are dropped; first-seen order is kept.
    #[must_use]
    pub fn themes<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim().to_lowercase();
            if !label.is_empty() && !tokens.contains(&label) {
                tokens.push(label);
            }
        }
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Outcome of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Overlap count of the winning entry; zero means no match.
    pub score: usize,

    /// Winning title, or [`NO_MATCH_TITLE`].
    pub title: String,

    /// All tags of the winning entry; empty on no match.
    pub tags: Vec<String>,

    /// Tags of the winning entry hit by the query, in entry order.
    pub matched: Vec<String>,
}

impl MatchResult {
    #[must_use]
    pub fn no_match() -> Self {
        Self {
            score: 0,
            title: NO_MATCH_TITLE.to_string(),
            tags: Vec::new(),
            matched: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        self.score > 0
    }

    /// The winning title, or `None` on no match.
    #[must_use]
    pub fn song(&self) -> Option<&str> {
        self.is_match().then_some(self.title.as_str())
    }

    /// The winning entry's text, empty on no match.
    #[must_use]
    pub fn snippet(&self) -> String {
        self.tags.join(" ")
    }
}

/// Picks the best catalog entry for a query under a fixed policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    policy: ScoringPolicy,
}

impl Matcher {
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Score one entry against the query.
    #[must_use]
    pub fn score(&self, query: &Query, entry: &CatalogEntry) -> usize {
        match self.policy {
            ScoringPolicy::Substring => {
                let text = entry.text();
                query
                    .tokens
                    .iter()
                    .filter(|token| text.contains(token.as_str()))
                    .count()
            }
            ScoringPolicy::SetMembership => query
                .tokens
                .iter()
                .filter(|token| entry.tags.contains(token))
                .count(),
        }
    }

    /// Find the best entry for the query.
    ///
    /// Only a strictly greater score replaces the current best, so ties go to
    /// the entry met first. An empty catalog or query yields
    /// [`MatchResult::no_match`].
    #[must_use]
    pub fn find_best(&self, query: &Query, catalog: &Catalog) -> MatchResult {
        let mut best: Option<(&CatalogEntry, usize)> = None;

        for entry in catalog {
            let score = self.score(query, entry);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((entry, score));
            }
        }

        let Some((entry, score)) = best else {
            log::debug!("No catalog entry matched {} query tokens", query.tokens.len());
            return MatchResult::no_match();
        };

        log::debug!(
            "Best match under {} policy: {} (score {})",
            self.policy,
            entry.title,
            score
        );

        MatchResult {
            score,
            title: entry.title.clone(),
            tags: entry.tags.clone(),
            matched: self.matched_tags(query, entry),
        }
    }

    /// Tags of `entry` that the query hits, in entry order.
    fn matched_tags(&self, query: &Query, entry: &CatalogEntry) -> Vec<String> {
        entry
            .tags
            .iter()
            .filter(|tag| match self.policy {
                ScoringPolicy::Substring => {
                    query.tokens.iter().any(|token| tag.contains(token.as_str()))
                }
                ScoringPolicy::SetMembership => query.tokens.contains(tag),
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lyric_catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::from_lyrics("Vindicated", "hope dangles on a string like a necklace"),
            CatalogEntry::from_lyrics("Best Deceptions", "i have faith in you"),
        ])
        .unwrap()
    }

    fn theme_catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("A", ["nostalgia", "youth"]),
            CatalogEntry::new("B", ["heartbreak"]),
        ])
        .unwrap()
    }

    // -----------------------------------------------------------------------
    // Query
    // -----------------------------------------------------------------------

    #[test]
    fn test_text_query_lowercases_and_splits() {
        let query = Query::text("I have  FAITH\tin you,");
        assert_eq!(query.tokens(), ["i", "have", "faith", "in", "you,"]);
    }

    #[test]
    fn test_text_query_keeps_repeats() {
        let query = Query::text("a string a necklace");
        assert_eq!(query.tokens().len(), 4);
    }

    #[test]
    fn test_blank_text_query_is_empty() {
        assert!(Query::text("   \n\t ").is_empty());
        assert!(Query::text("").is_empty());
    }

    #[test]
    fn test_theme_query_dedupes() {
        let query = Query::themes(["Youth", "longing", "youth", " "]);
        assert_eq!(query.tokens(), ["youth", "longing"]);
    }

    // -----------------------------------------------------------------------
    // Policy parsing
    // -----------------------------------------------------------------------

    #[test]
    fn test_policy_from_str() {
        assert_eq!("substring".parse::<ScoringPolicy>().unwrap(), ScoringPolicy::Substring);
        assert_eq!(
            "Set_Membership".parse::<ScoringPolicy>().unwrap(),
            ScoringPolicy::SetMembership
        );
        assert!(matches!(
            "fuzzy".parse::<ScoringPolicy>(),
            Err(Error::UnknownPolicy(p)) if p == "fuzzy"
        ));
    }

    #[test]
    fn test_policy_display_round_trips_through_from_str() {
        for policy in [ScoringPolicy::Substring, ScoringPolicy::SetMembership] {
            assert_eq!(policy.to_string().parse::<ScoringPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&ScoringPolicy::SetMembership).unwrap();
        assert_eq!(json, "\"set-membership\"");
    }

    // -----------------------------------------------------------------------
    // Scoring
    // -----------------------------------------------------------------------

    #[test]
    fn test_substring_scores_partial_words() {
        let matcher = Matcher::new(ScoringPolicy::Substring);
        let entry = CatalogEntry::from_lyrics("Vindicated", "hope dangles on a string");
        // "in" occurs inside "string", "ring" inside "string"
        assert_eq!(matcher.score(&Query::text("in ring"), &entry), 2);
    }

    #[test]
    fn test_set_membership_requires_exact_tag() {
        let matcher = Matcher::new(ScoringPolicy::SetMembership);
        let entry = CatalogEntry::from_lyrics("Vindicated", "hope dangles on a string");
        assert_eq!(matcher.score(&Query::text("in ring string"), &entry), 1);
    }

    #[test]
    fn test_repeated_tokens_each_count() {
        let matcher = Matcher::new(ScoringPolicy::SetMembership);
        let entry = CatalogEntry::from_lyrics("Vindicated", "on a string like a necklace");
        assert_eq!(matcher.score(&Query::text("a a a"), &entry), 3);
    }

    #[test]
    fn test_lyric_example_literal_scores() {
        let catalog = lyric_catalog();
        let query = Query::text("I have faith in you, but it feels like a necklace on a string");

        let substring = Matcher::new(ScoringPolicy::Substring);
        let vindicated = catalog.get("Vindicated").unwrap();
        let deceptions = catalog.get("Best Deceptions").unwrap();
        // i, in, like, a, necklace, on, a, string
        assert_eq!(substring.score(&query, vindicated), 8);
        // i, have, faith, in, it (inside "faith"), a, a; "you," keeps its comma
        assert_eq!(substring.score(&query, deceptions), 7);

        let membership = Matcher::new(ScoringPolicy::SetMembership);
        assert_eq!(membership.score(&query, vindicated), 6);
        assert_eq!(membership.score(&query, deceptions), 4);
    }

    #[test]
    fn test_lyric_example_winner_follows_literal_overlap() {
        let query = Query::text("I have faith in you, but it feels like a necklace on a string");
        let result = Matcher::new(ScoringPolicy::Substring).find_best(&query, &lyric_catalog());
        assert_eq!(result.title, "Vindicated");
        assert_eq!(result.score, 8);
        assert_eq!(result.snippet(), "hope dangles on a string like a necklace");
    }

    #[test]
    fn test_faith_alone_picks_best_deceptions() {
        let query = Query::text("faith");
        let result = Matcher::new(ScoringPolicy::Substring).find_best(&query, &lyric_catalog());
        assert_eq!(result.title, "Best Deceptions");
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_theme_scenario() {
        let query = Query::themes(["youth", "longing"]);
        let result = Matcher::new(ScoringPolicy::SetMembership).find_best(&query, &theme_catalog());
        assert_eq!(result.title, "A");
        assert_eq!(result.score, 1);
        assert_eq!(result.tags, vec!["nostalgia", "youth"]);
        assert_eq!(result.matched, vec!["youth"]);
    }

    #[test]
    fn test_matched_tags_follow_entry_order() {
        let catalog =
            Catalog::from_entries(vec![CatalogEntry::new("Vindicated", ["regret", "love", "hope"])])
                .unwrap();
        let query = Query::themes(["hope", "regret"]);
        let result = Matcher::new(ScoringPolicy::SetMembership).find_best(&query, &catalog);
        assert_eq!(result.matched, vec!["regret", "hope"]);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("First", ["love"]),
            CatalogEntry::new("Second", ["love"]),
        ])
        .unwrap();
        let matcher = Matcher::new(ScoringPolicy::SetMembership);
        for _ in 0..3 {
            assert_eq!(matcher.find_best(&Query::text("love"), &catalog).title, "First");
        }
    }

    #[test]
    fn test_later_entry_wins_only_when_strictly_greater() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("First", ["love"]),
            CatalogEntry::new("Second", ["love", "hope"]),
        ])
        .unwrap();
        let result = Matcher::new(ScoringPolicy::SetMembership)
            .find_best(&Query::themes(["love", "hope"]), &catalog);
        assert_eq!(result.title, "Second");
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_case_insensitive_query() {
        let catalog = lyric_catalog();
        let matcher = Matcher::new(ScoringPolicy::Substring);
        let upper = matcher.find_best(&Query::text("FAITH"), &catalog);
        let lower = matcher.find_best(&Query::text("faith"), &catalog);
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_empty_catalog_is_no_match() {
        for policy in [ScoringPolicy::Substring, ScoringPolicy::SetMembership] {
            let result = Matcher::new(policy).find_best(&Query::text("anything"), &Catalog::new());
            assert_eq!(result, MatchResult::no_match());
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_empty_query_is_no_match() {
        let catalog = lyric_catalog();
        for policy in [ScoringPolicy::Substring, ScoringPolicy::SetMembership] {
            let matcher = Matcher::new(policy);
            let query = Query::text("   ");
            for entry in &catalog {
                assert_eq!(matcher.score(&query, entry), 0);
            }
            let result = matcher.find_best(&query, &catalog);
            assert_eq!(result.title, NO_MATCH_TITLE);
            assert!(result.tags.is_empty());
        }
    }

    #[test]
    fn test_zero_overlap_is_no_match() {
        let result = Matcher::new(ScoringPolicy::SetMembership)
            .find_best(&Query::themes(["anger"]), &theme_catalog());
        assert!(!result.is_match());
        assert_eq!(result.song(), None);
        assert!(result.tags.is_empty());
        assert!(result.matched.is_empty());
        assert!(result.snippet().is_empty());
    }

    #[test]
    fn test_winner_is_always_in_catalog() {
        let catalog = Catalog::theme_keywords();
        let matcher = Matcher::new(ScoringPolicy::SetMembership);
        for theme in crate::taxonomy::VALID_THEMES {
            let result = matcher.find_best(&Query::themes([*theme]), &catalog);
            assert!(result.title == NO_MATCH_TITLE || catalog.get(&result.title).is_some());
        }
    }
}
