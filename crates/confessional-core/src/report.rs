//! Plain-text match report.
//!
//! Sandboxed scoring runs communicate only through captured standard output,
//! so the result of a match is printed as:
//!
//! ```text
//! Best Match: Vindicated
//! Lyrics Snippet: hope, dangles on a string like a necklace
//! ```
//!
//! The snippet line is omitted when nothing matched, in which case the title
//! is [`NO_MATCH_TITLE`](crate::matcher::NO_MATCH_TITLE).

use crate::error::{Error, Result};
use crate::matcher::MatchResult;

const BEST_MATCH_PREFIX: &str = "Best Match:";
const SNIPPET_PREFIX: &str = "Lyrics Snippet:";

/// A report parsed back from captured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub title: String,
    pub snippet: Option<String>,
}

/// Render a match result in the report format.
pub fn render_report(result: &MatchResult) -> String {
    let mut out = format!("{BEST_MATCH_PREFIX} {}\n", result.title);
    if result.is_match() {
        out.push_str(SNIPPET_PREFIX);
        out.push(' ');
        out.push_str(&result.snippet());
        out.push('\n');
    }
    out
}

/// Parse captured output into a report.
///
/// Lines that are neither a title nor a snippet line are ignored, so logging
/// noise around the report is tolerated.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if no `Best Match:` line is present.
pub fn parse_report(stdout: &str) -> Result<MatchReport> {
    let mut title = None;
    let mut snippet = None;

    for line in stdout.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(BEST_MATCH_PREFIX) {
            title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(SNIPPET_PREFIX) {
            let rest = rest.trim();
            if !rest.is_empty() {
                snippet = Some(rest.to_string());
            }
        }
    }

    let title = title.ok_or_else(|| {
        Error::InvalidData(format!("no '{BEST_MATCH_PREFIX}' line in output"))
    })?;
    Ok(MatchReport { title, snippet })
}
