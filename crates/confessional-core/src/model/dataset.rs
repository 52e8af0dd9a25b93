//! Built-in song datasets.

use super::catalog::Catalog;
use super::entry::CatalogEntry;

/// Lyric snippets used by the lyric-matching agent.
const LYRIC_SNIPPETS: &[(&str, &str)] = &[
    ("Vindicated", "hope, dangles on a string like a necklace"),
    ("Hands Down", "breath in for luck breathe in so deep"),
    ("Screaming Infidelities", "i'm reading your note over again"),
    ("Stolen", "i know that you were stolen from somewhere"),
    ("The Best Deceptions", "i have faith in you"),
];

/// Songs tagged with labels from the theme vocabulary.
const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("Vindicated", &["regret", "redemption", "love", "mistakes", "hope"]),
    ("Screaming Infidelities", &["heartbreak", "betrayal", "anger", "moving on"]),
    ("Hands Down", &["love", "youth", "nostalgia", "memories"]),
    ("Stolen", &["love", "longing", "loss"]),
    ("The Best Deceptions", &["betrayal", "faith", "trust", "heartbreak"]),
    ("Saints and Sailors", &["friendship", "longing", "desperation"]),
    ("The Swiss Army Romance", &["love", "loneliness", "regret"]),
    ("Hey Girl", &["jealousy", "longing"]),
    ("Don't Wait", &["hope", "desperation", "love"]),
    ("Again I Go Unnoticed", &["loneliness", "heartbreak"]),
    ("As Lovers Go", &["love", "distance", "trust"]),
    ("Carve Your Heart Out Yourself", &["heartbreak", "anger"]),
    ("Ghost of a Good Thing", &["regret", "memories", "loss"]),
    ("Rapid Hope Loss", &["hope", "loss", "desperation"]),
    ("Remember to Breathe", &["hope", "loneliness", "growing up"]),
    (
        "The Places You Have Come to Fear the Most",
        &["loneliness", "distance", "longing"],
    ),
    ("This Ruined Puzzle", &["betrayal", "regret", "mistakes"]),
    ("Living in Your Letters", &["distance", "longing", "memories"]),
    ("Several Ways to Die Trying", &["desperation", "anger"]),
    ("Thick as Thieves", &["friendship", "trust", "memories"]),
    ("Bend and Not Break", &["hope", "heartbreak", "moving on"]),
    ("So Long, So Long", &["moving on", "loss", "forgiveness"]),
    ("Dusk and Summer", &["summer", "youth", "nostalgia"]),
    ("Slow Decay", &["regret", "loss"]),
    ("Age Six Racer", &["youth", "growing up"]),
    ("Warm Things", &["love", "forgiveness"]),
];

impl Catalog {
    /// The five lyric snippets matched by the substring policy.
    #[must_use]
    pub fn lyric_snippets() -> Self {
        Self::from_trusted(
            LYRIC_SNIPPETS
                .iter()
                .map(|(title, lyrics)| CatalogEntry::from_lyrics(*title, lyrics))
                .collect(),
        )
    }

    /// Songs tagged with curated theme keywords.
    #[must_use]
    pub fn theme_keywords() -> Self {
        Self::from_trusted(
            THEME_KEYWORDS
                .iter()
                .map(|(title, themes)| CatalogEntry::new(*title, themes.iter()))
                .collect(),
        )
    }
}
