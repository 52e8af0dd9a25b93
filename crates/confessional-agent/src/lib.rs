//! External collaborators for confessional.
//!
//! Theme extraction (a remote language-model classifier with an offline
//! fallback), the execution-sandbox abstraction used by the lyric agent,
//! and the configuration shared by the server and the CLI.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod agent;
pub mod config;
pub mod error;
pub mod resilience;
pub mod sandbox;
pub mod themes;

pub use agent::LyricAgent;
pub use config::Config;
pub use error::{AgentError, AgentResult};
pub use sandbox::{run_scoring_job, ExecutionProvider, InProcessProvider, Sandbox, ScoringJob};
pub use themes::{extractor_from_config, LlmThemeExtractor, ThemeExtractor, VocabularyExtractor};
