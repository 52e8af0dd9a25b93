//! The song catalog.
//!
//! A catalog is an ordered, read-only list of [`CatalogEntry`] values keyed by
//! title. Iteration order is insertion order, and the matcher relies on it to
//! break ties, so entries are kept in a `Vec` rather than a hash map.
//!
//! Catalogs are either one of the built-in datasets (see
//! [`Catalog::lyric_snippets`] and [`Catalog::theme_keywords`]) or loaded from
//! a TOML file:
//!
//! ```toml
//! [[songs]]
//! title = "Vindicated"
//! lyrics = "hope dangles on a string like a necklace"
//!
//! [[songs]]
//! title = "Hands Down"
//! themes = ["love", "youth", "nostalgia"]
//! ```

use serde::Deserialize;
use std::path::Path;

use super::entry::CatalogEntry;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    songs: Vec<SongRecord>,
}

#[derive(Debug, Deserialize)]
struct SongRecord {
    title: String,
    #[serde(default)]
    lyrics: Option<String>,
    #[serde(default)]
    themes: Option<Vec<String>>,
}

impl SongRecord {
    fn into_entry(self) -> Result<CatalogEntry> {
        match (self.lyrics, self.themes) {
            (Some(lyrics), None) => Ok(CatalogEntry::from_lyrics(self.title, &lyrics)),
            (None, Some(themes)) => Ok(CatalogEntry::new(self.title, themes)),
            (Some(_), Some(_)) => Err(Error::InvalidData(format!(
                "song '{}' has both lyrics and themes",
                self.title
            ))),
            (None, None) => Err(Error::InvalidData(format!(
                "song '{}' has neither lyrics nor themes",
                self.title
            ))),
        }
    }
}

/// An ordered collection of songs with unique titles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, rejecting duplicate titles.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a song has
    /// both or neither of `lyrics` and `themes`, or if two songs share a title.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "failed to parse catalog from {}: {}",
                path.display(),
                e
            ))
        })?;

        let entries = file
            .songs
            .into_iter()
            .map(SongRecord::into_entry)
            .collect::<Result<Vec<_>>>()?;
        let catalog = Self::from_entries(entries)?;

        log::info!(
            "Loaded {} songs from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Wrap entries already known to have unique titles.
    pub(super) fn from_trusted(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Append an entry at the end of the iteration order.
    fn insert(&mut self, entry: CatalogEntry) -> Result<()> {
        if self.get(&entry.title).is_some() {
            return Err(Error::DuplicateEntry { title: entry.title });
        }
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
