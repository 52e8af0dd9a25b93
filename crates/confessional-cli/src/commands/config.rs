use anyhow::{Context, Result};
use confessional_agent::config::{self, CONFIG_KEYS};
use confessional_agent::Config;
use confessional_core::ScoringPolicy;
use toml_edit::{value, DocumentMut};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    for key in CONFIG_KEYS {
        println!("  {}: {}", key, display_value(&config, key).unwrap_or_default());
    }

    println!("\nPriority: CLI args > ENV vars (CONFESSIONAL_*) > Config file > Defaults");

    Ok(())
}

/// Render one config value; the API key is masked.
fn display_value(config: &Config, key: &str) -> Option<String> {
    let shown = match key {
        "llm_api_key" => match config.llm_api_key.as_deref() {
            Some(k) if !k.is_empty() => mask_secret(k),
            _ => String::from("<not set>"),
        },
        "llm_base_url" => config.llm_base_url.clone(),
        "llm_model" => config.llm_model.clone(),
        "requests_per_second" => config.requests_per_second.to_string(),
        "bind_address" => config.bind_address.clone(),
        "catalog_path" => config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<built-in theme keywords>")),
        "policy" => config.policy.to_string(),
        _ => return None,
    };
    Some(shown)
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let visible: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("****{visible}")
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {}\n\nValid keys: {}",
        key,
        CONFIG_KEYS.join(", ")
    )
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;
        let shown = match key.as_str() {
            "llm_api_key" => config
                .llm_api_key
                .unwrap_or_else(|| String::from("<not set>")),
            other => display_value(&config, other).ok_or_else(|| unknown_key(other))?,
        };
        println!("{}", shown);
    } else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'confessional config init' to create it.");
        }
    }

    Ok(())
}

/// Apply `key = value` to a config document, keeping its comments.
fn update_document(contents: &str, key: &str, raw: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    match key {
        "requests_per_second" => {
            let rps: i64 = raw
                .parse()
                .with_context(|| format!("requests_per_second must be a number, got '{raw}'"))?;
            doc[key] = value(rps);
        }
        "policy" => {
            let policy: ScoringPolicy = raw.parse()?;
            doc[key] = value(policy.as_str());
        }
        k if CONFIG_KEYS.contains(&k) => {
            doc[key] = value(raw);
        }
        other => return Err(unknown_key(other)),
    }

    Ok(doc.to_string())
}

/// Set a config value.
pub fn set_config(key: &str, raw: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path)
        .context("Failed to read config file")?;
    let updated = update_document(&contents, key, raw)?;

    std::fs::write(&config_path, updated)
        .context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, raw);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure confessional.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
