//! Annotation — the collaborator capabilities the extraction pipeline consumes.
//!
//! The pipeline never owns an entity-recognition model. It receives one as an injected
//! `DocumentAnnotator`, together with optional markup hints and a `DateParser`.
//! Collaborator failures are absorbed here and surface as "no signal".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub mod dates;
pub mod pattern;

pub use dates::{ChronoDateParser, DateParser};
pub use pattern::PatternAnnotator;

// ────────────────────────────────────────────────────────────────────────────
// Entity spans
// ────────────────────────────────────────────────────────────────────────────

/// Category assigned to a span by the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Date,
    Org,
    WorkOfArt,
}

/// A labeled substring of the annotated text with byte offsets `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(label: EntityLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
        }
    }
}

/// Only model-backed annotators fail; the built-in `PatternAnnotator` never does.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("annotator unavailable: {0}")]
    Unavailable(String),
}

/// Entity recognition capability. Implementations must return spans in document order
/// and hold no per-call mutable state, so one instance can serve concurrent requests.
pub trait DocumentAnnotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<EntitySpan>, AnnotationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Markup hints
// ────────────────────────────────────────────────────────────────────────────

/// Lookups into the page markup the text was taken from. Absence is a normal outcome.
pub trait MarkupHints: Send + Sync {
    /// Text content of the first element matching a CSS selector.
    fn select(&self, selector: &str) -> Option<String>;

    /// `content` of a `<meta>` tag, keyed by its `property` or `name`.
    fn meta(&self, name: &str) -> Option<String>;
}

/// Hints resolved ahead of time by the client (the browser extension reads the DOM).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticMarkupHints {
    #[serde(default)]
    pub selectors: HashMap<String, String>,
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

impl StaticMarkupHints {
    pub fn new(selectors: HashMap<String, String>, meta: HashMap<String, String>) -> Self {
        Self { selectors, meta }
    }
}

impl MarkupHints for StaticMarkupHints {
    fn select(&self, selector: &str) -> Option<String> {
        self.selectors.get(selector).cloned()
    }

    fn meta(&self, name: &str) -> Option<String> {
        self.meta.get(name).cloned()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Annotated document
// ────────────────────────────────────────────────────────────────────────────

/// Raw text, its entity spans, and the markup hints for the page it came from.
/// Immutable once built.
pub struct AnnotatedDocument {
    text: String,
    spans: Vec<EntitySpan>,
    hints: Box<dyn MarkupHints>,
}

impl AnnotatedDocument {
    pub fn new(text: impl Into<String>, spans: Vec<EntitySpan>) -> Self {
        Self {
            text: text.into(),
            spans,
            hints: Box::new(StaticMarkupHints::default()),
        }
    }

    /// Runs the annotator over `text`. A failing annotator yields a document without spans.
    pub fn annotate(text: impl Into<String>, annotator: &dyn DocumentAnnotator) -> Self {
        let text = text.into();
        let spans = match annotator.annotate(&text) {
            Ok(spans) => spans,
            Err(e) => {
                warn!("Annotation unavailable, continuing without entity spans: {e}");
                Vec::new()
            }
        };
        Self::new(text, spans)
    }

    pub fn with_hints(mut self, hints: impl MarkupHints + 'static) -> Self {
        self.hints = Box::new(hints);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[EntitySpan] {
        &self.spans
    }

    /// Spans carrying `label`, in document order.
    pub fn spans_labeled(&self, label: EntityLabel) -> impl Iterator<Item = &EntitySpan> {
        self.spans.iter().filter(move |span| span.label == label)
    }

    pub fn hints(&self) -> &dyn MarkupHints {
        self.hints.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingAnnotator;

    impl DocumentAnnotator for FailingAnnotator {
        fn annotate(&self, _text: &str) -> Result<Vec<EntitySpan>, AnnotationError> {
            Err(AnnotationError::Unavailable("model not loaded".to_string()))
        }
    }

    #[test]
    fn test_failing_annotator_degrades_to_no_spans() {
        let doc = AnnotatedDocument::annotate("Posted January 5, 2024 by Acme Inc", &FailingAnnotator);
        assert!(doc.spans().is_empty());
        assert_eq!(doc.text(), "Posted January 5, 2024 by Acme Inc");
    }

    #[test]
    fn test_spans_labeled_keeps_document_order() {
        let doc = AnnotatedDocument::new(
            "x",
            vec![
                EntitySpan::new(EntityLabel::Org, "Acme", 0, 4),
                EntitySpan::new(EntityLabel::Date, "today", 5, 10),
                EntitySpan::new(EntityLabel::Org, "Globex", 11, 17),
            ],
        );
        let orgs: Vec<&str> = doc
            .spans_labeled(EntityLabel::Org)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(orgs, vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_static_hints_absent_keys_are_none() {
        let hints = StaticMarkupHints::new(
            HashMap::from([(".job-title".to_string(), "Engineer".to_string())]),
            HashMap::new(),
        );
        assert_eq!(hints.select(".job-title").as_deref(), Some("Engineer"));
        assert!(hints.select("#position-title").is_none());
        assert!(hints.meta("og:site_name").is_none());
    }

    #[test]
    fn test_entity_label_serializes_screaming_snake() {
        let json = serde_json::to_string(&EntityLabel::WorkOfArt).unwrap();
        assert_eq!(json, r#""WORK_OF_ART""#);
    }
}
