//! Position title extraction.

use super::text::{capitalize, clean_text, is_title_case};
use super::{run_chain, Strategy};
use crate::annotation::{AnnotatedDocument, EntityLabel};

pub const UNKNOWN_POSITION: &str = "Unknown Position";

/// Title-like selectors, most specific first.
pub const TITLE_SELECTORS: &[&str] = &["h1.job-title", ".job-title", "#position-title"];

/// Job-title words searched for in the body, in priority order.
pub const TITLE_VOCABULARY: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "analyst",
    "scientist",
    "designer",
    "technician",
    "architect",
    "consultant",
    "specialist",
    "coordinator",
    "director",
];

/// Entity spans with this many words or more are unlikely to be titles.
const MAX_ENTITY_TITLE_WORDS: usize = 5;

const POSITION_CHAIN: &[(&str, Strategy<String>)] = &[
    ("markup_selector", from_markup),
    ("title_vocabulary", from_vocabulary),
    ("entity_span", from_entities),
    ("title_case_token", from_title_case_token),
];

/// Best-guess job title; `"Unknown Position"` when nothing matches.
pub fn extract_position(doc: &AnnotatedDocument) -> String {
    run_chain("position", doc, POSITION_CHAIN).unwrap_or_else(|| UNKNOWN_POSITION.to_string())
}

fn from_markup(doc: &AnnotatedDocument) -> Option<String> {
    TITLE_SELECTORS
        .iter()
        .filter_map(|selector| doc.hints().select(selector))
        .map(|text| clean_text(&text))
        .find(|text| !text.is_empty())
}

/// First vocabulary word (in vocabulary order) found anywhere in the text.
fn from_vocabulary(doc: &AnnotatedDocument) -> Option<String> {
    let lower = doc.text().to_lowercase();
    TITLE_VOCABULARY
        .iter()
        .find(|word| lower.contains(*word))
        .map(|word| capitalize(word))
}

fn from_entities(doc: &AnnotatedDocument) -> Option<String> {
    doc.spans()
        .iter()
        .filter(|span| matches!(span.label, EntityLabel::WorkOfArt | EntityLabel::Org))
        .map(|span| span.text.trim())
        .find(|text| {
            let words = text.split_whitespace().count();
            words > 0 && words < MAX_ENTITY_TITLE_WORDS
        })
        .map(capitalize)
}

fn from_title_case_token(doc: &AnnotatedDocument) -> Option<String> {
    doc.text()
        .split_whitespace()
        .find(|word| {
            is_title_case(word)
                && word.chars().count() > 3
                && !TITLE_VOCABULARY.contains(&word.to_lowercase().as_str())
        })
        .map(capitalize)
}
