//! Theme extraction.
//!
//! A [`ThemeExtractor`] turns free text into a handful of labels from the
//! controlled vocabulary in [`confessional_core::taxonomy`]. The matcher treats
//! its output as opaque query tokens.

pub mod llm;
pub mod vocabulary_scan;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AgentResult;

pub use llm::{parse_theme_list, LlmThemeExtractor};
pub use vocabulary_scan::VocabularyExtractor;

/// Produces vocabulary-restricted theme labels for a message.
#[async_trait]
pub trait ThemeExtractor: Send + Sync + fmt::Debug {
    /// Extract 0 to 5 lower-case labels, all drawn from the vocabulary.
    async fn extract(&self, text: &str) -> AgentResult<Vec<String>>;

    /// Short name used in logs and error messages.
    fn name(&self) -> &str;
}

/// Pick the extractor the configuration allows.
///
/// The language-model classifier is used when an API key is configured,
/// otherwise the offline vocabulary scan.
pub fn extractor_from_config(config: &Config) -> AgentResult<Arc<dyn ThemeExtractor>> {
    if config.has_llm() {
        let extractor = LlmThemeExtractor::from_config(config)?;
        log::info!(
            "Theme extraction via {} at {}",
            config.llm_model,
            config.llm_base_url
        );
        Ok(Arc::new(extractor))
    } else {
        log::warn!("No classifier API key configured; scanning messages for vocabulary words");
        Ok(Arc::new(VocabularyExtractor::new()))
    }
}
