use anyhow::{Context, Result};
use confessional_core::ScoringPolicy;
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for confessional.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CONFESSIONAL_* prefix)
/// 3. Config file (~/.config/confessional/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key for the theme classifier.
    ///
    /// Without it, themes are found by scanning the message for vocabulary
    /// words instead of asking the language model.
    ///
    /// Can be set via:
    /// - ENV: CONFESSIONAL_LLM_API_KEY
    /// - Config: llm_api_key = "..."
    pub llm_api_key: Option<String>,

    /// Base URL of an OpenAI-compatible chat completions API.
    #[serde(default = "default_llm_base_url")]
    pub llm_base_url: String,

    /// Model used for theme extraction.
    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    /// Maximum classifier requests per second.
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Address the HTTP server binds to.
    ///
    /// Can be set via:
    /// - CLI: confessional serve --bind 0.0.0.0:8080
    /// - ENV: CONFESSIONAL_BIND_ADDRESS
    /// - Config: bind_address = "..."
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Optional TOML catalog replacing the built-in theme dataset.
    pub catalog_path: Option<PathBuf>,

    /// Scoring policy used by the server.
    #[serde(default)]
    pub policy: ScoringPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_base_url: default_llm_base_url(),
            llm_model: default_llm_model(),
            requests_per_second: default_requests_per_second(),
            bind_address: default_bind_address(),
            catalog_path: None,
            policy: ScoringPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/confessional/config.toml
    /// Reads environment variables with CONFESSIONAL_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("confessional");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        log::debug!(
            "Loaded configuration (file present: {})",
            config_path.exists()
        );
        Ok(config)
    }

    /// Whether the language-model classifier can be used.
    #[must_use]
    pub fn has_llm(&self) -> bool {
        self.llm_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

fn default_llm_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_llm_model() -> String {
    String::from("gpt-4o-mini")
}

const fn default_requests_per_second() -> u32 {
    5
}

fn default_bind_address() -> String {
    String::from("127.0.0.1:3000")
}

/// Keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "llm_api_key",
    "llm_base_url",
    "llm_model",
    "requests_per_second",
    "bind_address",
    "catalog_path",
    "policy",
];

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/confessional/config.toml
/// - macOS: ~/Library/Application Support/confessional/config.toml
/// - Windows: %APPDATA%\confessional\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("confessional")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Confessional Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CONFESSIONAL_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# API key for the theme classifier (OpenAI-compatible chat completions)
#
# Without a key, themes are found by scanning messages for vocabulary words.
#
# Can also be set via:
# - Environment: CONFESSIONAL_LLM_API_KEY=your-key-here
#llm_api_key = "your-api-key-here"

# Classifier endpoint and model
#llm_base_url = "https://api.openai.com/v1"
#llm_model = "gpt-4o-mini"

# Client-side pacing of classifier requests
#requests_per_second = 5

# Address for 'confessional serve'
#
# Can also be set via:
# - CLI: confessional serve --bind 0.0.0.0:8080
# - Environment: CONFESSIONAL_BIND_ADDRESS=0.0.0.0:8080
#bind_address = "127.0.0.1:3000"

# Catalog file replacing the built-in theme dataset
#
# [[songs]]
# title = "Hands Down"
# themes = ["love", "youth", "nostalgia"]
#catalog_path = "/path/to/catalog.toml"

# Scoring policy: "set-membership" or "substring"
#policy = "set-membership"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}
