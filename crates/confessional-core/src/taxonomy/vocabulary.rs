//! Controlled vocabulary of song themes.
//!
//! Theme labels produced by any classifier are only meaningful to the matcher
//! if they come from this list, since curated catalog entries are tagged with
//! the same labels. Labels are lower-case and may contain spaces.

/// Every theme label a classifier is allowed to emit.
pub const VALID_THEMES: &[&str] = &[
    "love",
    "heartbreak",
    "betrayal",
    "regret",
    "redemption",
    "hope",
    "faith",
    "longing",
    "nostalgia",
    "youth",
    "loneliness",
    "anger",
    "moving on",
    "mistakes",
    "trust",
    "loss",
    "friendship",
    "distance",
    "memories",
    "jealousy",
    "forgiveness",
    "desperation",
    "growing up",
    "summer",
];

/// Upper bound on the number of themes kept for a single message.
pub const MAX_THEMES: usize = 5;

/// Check whether a label belongs to the vocabulary (case-insensitive).
pub fn is_valid_theme(label: &str) -> bool {
    let label = label.trim();
    VALID_THEMES.iter().any(|t| t.eq_ignore_ascii_case(label))
}

/// Reduce arbitrary labels to vocabulary members.
///
/// Labels are trimmed and lower-cased; unknown labels and repeats are
/// dropped, first-seen order is kept, and at most [`MAX_THEMES`] survive.
pub fn filter_to_vocabulary<I, S>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut themes: Vec<String> = Vec::new();
    for label in labels {
        let normalized = label.as_ref().trim().to_lowercase();
        if !is_valid_theme(&normalized) || themes.contains(&normalized) {
            continue;
        }
        themes.push(normalized);
        if themes.len() == MAX_THEMES {
            break;
        }
    }
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_lowercase() {
        for theme in VALID_THEMES {
            assert_eq!(*theme, theme.to_lowercase());
        }
    }

    #[test]
    fn test_is_valid_theme_case_insensitive() {
        assert!(is_valid_theme("Heartbreak"));
        assert!(is_valid_theme("  moving on "));
        assert!(!is_valid_theme("sadness"));
    }

    #[test]
    fn test_filter_drops_unknown_and_duplicates() {
        let themes = filter_to_vocabulary(["Love", "sadness", "love", "Youth"]);
        assert_eq!(themes, vec!["love", "youth"]);
    }

    #[test]
    fn test_filter_caps_at_max() {
        let themes = filter_to_vocabulary([
            "love", "hope", "faith", "trust", "loss", "regret", "anger",
        ]);
        assert_eq!(themes.len(), MAX_THEMES);
        assert_eq!(themes, vec!["love", "hope", "faith", "trust", "loss"]);
    }

    #[test]
    fn test_filter_nothing_valid() {
        let themes = filter_to_vocabulary(["sunshine", "rainbows"]);
        assert!(themes.is_empty());
    }
}
