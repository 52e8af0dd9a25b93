use anyhow::Result;
use confessional_agent::Config;

use crate::tui::{self, Skin};

/// Open the chat window against a running server.
pub async fn run_chat(skin: Skin, url: Option<String>) -> Result<()> {
    let base_url = match url {
        Some(url) => url,
        None => format!("http://{}", Config::load()?.bind_address),
    };
    tui::run_chat(skin, &base_url).await
}
