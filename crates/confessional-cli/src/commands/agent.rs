use anyhow::Result;
use confessional_agent::LyricAgent;

/// Echo the input, match it in a sandbox, and print the verdict.
pub async fn run_agent(text: &str) -> Result<()> {
    println!("User Input: \"{}\"\n", text);

    let report = LyricAgent::default().match_lyrics(text).await?;

    println!("Best Match: {}", report.title);
    if let Some(snippet) = report.snippet {
        println!("Lyrics Snippet: {}", snippet);
    }
    Ok(())
}
