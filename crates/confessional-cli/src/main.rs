use anyhow::Result;
use clap::Parser;
use confessional_core::ScoringPolicy;
use std::path::PathBuf;

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "confessional", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the HTTP API
    ///
    /// Serves POST /api/analyze-feelings for the chat window. Each message is
    /// reduced to a few themes (by the language-model classifier when an API
    /// key is configured, otherwise by scanning for vocabulary words) and the
    /// song sharing the most themes is returned.
    Serve {
        /// Address to bind, overriding the configured bind_address
        #[arg(long)]
        bind: Option<String>,
    },
    /// Match text against a catalog without the server
    Match {
        /// Text to match
        text: String,

        /// Scoring policy: substring or set-membership
        #[arg(long, default_value_t = ScoringPolicy::Substring)]
        policy: ScoringPolicy,

        /// Catalog file (default: built-in lyric snippets for substring,
        /// theme keywords for set-membership)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract themes from text
    Themes {
        /// Text to classify
        text: String,
    },
    /// Run the lyric-matching agent in an execution sandbox
    Agent {
        /// Lyric fragment
        text: String,
    },
    /// Inspect catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Open the chat window
    Chat {
        /// Window skin: aqua or aim
        #[arg(long, default_value = "aqua")]
        skin: tui::Skin,

        /// Base URL of a running 'confessional serve'
        #[arg(long)]
        url: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CatalogAction {
    /// List songs in a catalog
    List {
        /// Show the theme keyword dataset instead of lyric snippets
        #[arg(long)]
        themes: bool,

        /// Catalog file to list instead of a built-in dataset
        #[arg(long, conflicts_with = "themes")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print one value, or the whole file
    Get { key: Option<String> },
    /// Set a value in the config file
    Set { key: String, value: String },
    /// Print the config file path
    Path,
    /// Create the config file with commented defaults
    Init,
    /// Print an example config file
    Example,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            commands::run_serve(bind).await?;
        }
        Commands::Match {
            text,
            policy,
            catalog,
            json,
        } => {
            commands::run_match(&text, policy, catalog, json)?;
        }
        Commands::Themes { text } => {
            commands::run_themes(&text).await?;
        }
        Commands::Agent { text } => {
            commands::run_agent(&text).await?;
        }
        Commands::Catalog { action } => match action {
            CatalogAction::List { themes, file } => commands::list_catalog(themes, file)?,
        },
        Commands::Chat { skin, url } => {
            commands::run_chat(skin, url).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Example => commands::config::show_example(),
        },
    }

    Ok(())
}
