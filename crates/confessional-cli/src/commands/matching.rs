use anyhow::{Context, Result};
use confessional_core::{Catalog, Matcher, Query, ScoringPolicy};
use std::path::PathBuf;

/// Pick the catalog a policy is meant for, unless a file is given.
pub fn catalog_for(policy: ScoringPolicy, file: Option<PathBuf>) -> Result<Catalog> {
    match file {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(match policy {
            ScoringPolicy::Substring => Catalog::lyric_snippets(),
            ScoringPolicy::SetMembership => Catalog::theme_keywords(),
        }),
    }
}

/// Match text in-process and print the result.
pub fn run_match(
    text: &str,
    policy: ScoringPolicy,
    catalog: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let catalog = catalog_for(policy, catalog)?;
    let result = Matcher::new(policy).find_best(&Query::text(text), &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("User Input: \"{}\"\n", text);
    print!("{}", confessional_core::report::render_report(&result));
    if result.is_match() {
        println!("Score: {} ({} scoring)", result.score, policy);
    }
    Ok(())
}
