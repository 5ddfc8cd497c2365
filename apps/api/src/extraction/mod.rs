// Field Extraction Pipeline: annotated job-posting text → ExtractedPosting.
// Each field is an ordered fallback chain; the first strategy with a result wins
// and every chain ends in a default, so extraction never fails.

pub mod company;
pub mod dates;
pub mod handlers;
pub mod position;
pub mod posting;
pub mod salary;
pub mod text;

use tracing::debug;

use crate::annotation::AnnotatedDocument;

/// One step of a fallback chain.
pub type Strategy<T> = fn(&AnnotatedDocument) -> Option<T>;

/// Tries each named strategy in order and returns the first result.
pub fn run_chain<T>(
    field: &str,
    doc: &AnnotatedDocument,
    chain: &[(&'static str, Strategy<T>)],
) -> Option<T> {
    for (name, strategy) in chain {
        if let Some(value) = strategy(doc) {
            debug!(field, strategy = *name, "fallback chain resolved");
            return Some(value);
        }
    }
    debug!(field, "fallback chain exhausted, using default");
    None
}
