use anyhow::Result;
use confessional_agent::{extractor_from_config, Config};

pub async fn run_themes(text: &str) -> Result<()> {
    let config = Config::load()?;
    let extractor = extractor_from_config(&config)?;
    let themes = extractor.extract(text).await?;

    if themes.is_empty() {
        println!("No themes found.");
    } else {
        println!("Themes ({}): {}", extractor.name(), themes.join(", "));
    }
    Ok(())
}
