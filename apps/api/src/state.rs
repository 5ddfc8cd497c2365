use std::sync::Arc;

use crate::annotation::{ChronoDateParser, DateParser, DocumentAnnotator, PatternAnnotator};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators are constructed once in `main` and passed in; handlers never reach
/// for a global instance.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Entity recognition backend. Default: `PatternAnnotator`.
    pub annotator: Arc<dyn DocumentAnnotator>,
    pub date_parser: Arc<dyn DateParser>,
}

impl AppState {
    pub fn new(
        config: Config,
        annotator: Arc<dyn DocumentAnnotator>,
        date_parser: Arc<dyn DateParser>,
    ) -> Self {
        Self {
            config,
            annotator,
            date_parser,
        }
    }

    /// State with the built-in rule-based collaborators.
    pub fn with_default_collaborators(config: Config) -> Self {
        Self::new(config, Arc::new(PatternAnnotator), Arc::new(ChronoDateParser))
    }
}
