pub mod agent;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod matching;
pub mod serve;
pub mod themes;

pub use agent::run_agent;
pub use catalog::list_catalog;
pub use chat::run_chat;
pub use matching::run_match;
pub use serve::run_serve;
pub use themes::run_themes;
