use std::sync::Arc;

use confessional_agent::{extractor_from_config, AgentResult, Config, ThemeExtractor};
use confessional_core::{Catalog, Matcher};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub extractor: Arc<dyn ThemeExtractor>,
    pub catalog: Arc<Catalog>,
    pub matcher: Matcher,
}

impl AppState {
    #[must_use]
    pub fn new(extractor: Arc<dyn ThemeExtractor>, catalog: Catalog, matcher: Matcher) -> Self {
        Self {
            extractor,
            catalog: Arc::new(catalog),
            matcher,
        }
    }

    /// Build state from configuration.
    ///
    /// Uses the catalog file when one is configured, otherwise the built-in
    /// theme keyword dataset.
    pub fn from_config(config: &Config) -> AgentResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::theme_keywords(),
        };
        let extractor = extractor_from_config(config)?;
        Ok(Self::new(extractor, catalog, Matcher::new(config.policy)))
    }
}
