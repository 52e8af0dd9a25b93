use serde::{Deserialize, Serialize};

/// A single song in the catalog.
///
/// `tags` is either verbatim lyric text split into words or a curated set of
/// theme keywords, depending on which dataset the entry came from. Tags are
/// always stored lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name; unique within a catalog.
    pub title: String,

    /// Lower-case tokens associated with the song.
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Create an entry from a list of tags, lower-casing each one.
    #[must_use]
    pub fn new<I, S>(title: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Create an entry from a lyric snippet, splitting it on whitespace.
    #[must_use]
    pub fn from_lyrics(title: impl Into<String>, lyrics: &str) -> Self {
        Self {
            title: title.into(),
            tags: lyrics
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// The entry's tags joined back into running text.
    #[must_use]
    pub fn text(&self) -> String {
        self.tags.join(" ")
    }
}
