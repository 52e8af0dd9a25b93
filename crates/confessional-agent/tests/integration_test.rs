//! Integration tests for theme extraction feeding the matcher.
//!
//! The classifier is served by a local mock, so these tests never reach a
//! real language-model API.

use confessional_agent::{
    extractor_from_config, Config, LlmThemeExtractor, LyricAgent, ThemeExtractor,
    VocabularyExtractor,
};
use confessional_core::{Catalog, Matcher, Query, ScoringPolicy, NO_MATCH_TITLE};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn best_song(extractor: &dyn ThemeExtractor, message: &str) -> (Vec<String>, String) {
    let themes = extractor.extract(message).await.unwrap();
    let result = Matcher::new(ScoringPolicy::SetMembership)
        .find_best(&Query::themes(&themes), &Catalog::theme_keywords());
    (themes, result.title)
}

#[tokio::test]
async fn test_classifier_themes_pick_song() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "heartbreak, betrayal, anger"}}]
        })))
        .mount(&server)
        .await;

    let extractor =
        LlmThemeExtractor::new(&format!("{}/v1", server.uri()), "sk-test", "test-model", 100)
            .unwrap();
    let (themes, song) = best_song(&extractor, "I read the note. She lied to me.").await;

    assert_eq!(themes, vec!["heartbreak", "betrayal", "anger"]);
    assert_eq!(song, "Screaming Infidelities");
}

#[tokio::test]
async fn test_offline_extractor_pick_song() {
    let (themes, song) = best_song(
        &VocabularyExtractor::new(),
        "Summer nights, and all that nostalgia for our youth",
    )
    .await;

    assert_eq!(themes, vec!["nostalgia", "youth", "summer"]);
    assert_eq!(song, "Dusk and Summer");
}

#[tokio::test]
async fn test_no_themes_means_no_match() {
    let (themes, song) = best_song(&VocabularyExtractor::new(), "just a regular tuesday").await;
    assert!(themes.is_empty());
    assert_eq!(song, NO_MATCH_TITLE);
}

#[tokio::test]
async fn test_default_config_runs_offline() {
    let extractor = extractor_from_config(&Config::default()).unwrap();
    let themes = extractor.extract("so much regret").await.unwrap();
    assert_eq!(themes, vec!["regret"]);
}

#[tokio::test]
async fn test_lyric_agent_through_sandbox() {
    let report = LyricAgent::default()
        .match_lyrics("I know that you were stolen")
        .await
        .unwrap();
    assert_eq!(report.title, "Stolen");
}
