use anyhow::{Context, Result};
use confessional_core::Catalog;
use std::path::PathBuf;

/// List the songs in a built-in dataset or a catalog file.
pub fn list_catalog(themes: bool, file: Option<PathBuf>) -> Result<()> {
    let catalog = match file {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None if themes => Catalog::theme_keywords(),
        None => Catalog::lyric_snippets(),
    };

    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    let width = catalog.iter().map(|e| e.title.len()).max().unwrap_or(0);
    for (i, entry) in catalog.iter().enumerate() {
        let tags = if themes {
            entry.tags.join(", ")
        } else {
            entry.text()
        };
        println!("{:>3}. {:<width$}  {}", i + 1, entry.title, tags, width = width);
    }
    println!("\n{} songs", catalog.len());
    Ok(())
}
