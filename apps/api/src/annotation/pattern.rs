//! Rule-based annotator used when no statistical model is wired in.
//!
//! Recognises DATE and ORG spans only, which is what the posting extractor reads.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{AnnotationError, DocumentAnnotator, EntityLabel, EntitySpan};

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?";

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = [
        r"\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2}:\d{2}(?:Z|[+-]\d{2}:\d{2})?)?".to_string(),
        r"\d{1,2}/\d{1,2}/\d{4}".to_string(),
        r"\d{4}/\d{1,2}/\d{1,2}".to_string(),
        format!(r"{MONTH}\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}"),
        format!(r"\d{{1,2}}(?:st|nd|rd|th)?\s+{MONTH},?\s+\d{{4}}"),
        format!(r"{MONTH}\s+\d{{4}}"),
        r"(?i:today|yesterday|(?:\d+|an?)\s+(?:day|week|month|year)s?\s+ago)".to_string(),
    ]
    .join("|");
    Regex::new(&format!(r"\b(?:{pattern})\b")).unwrap()
});

static ORG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z0-9&'\-]*\s+){1,4}(?:Inc|LLC|Ltd|Corp|Corporation|Company|Technologies|Labs|GmbH|Group|Systems)\b",
    )
    .unwrap()
});

/// Capitalised words that open a sentence rather than a company name.
const ORG_LEADING_STOPWORDS: &[&str] = &[
    "About", "Apply", "At", "By", "For", "From", "Join", "Meet", "Now", "Our", "The", "This",
    "To", "Today", "We", "Welcome", "With", "Work",
];

/// ORG span for a match with leading stopwords cut off. `None` when only the suffix is left.
fn org_span(m: regex::Match<'_>) -> Option<EntitySpan> {
    let mut start = m.start();
    let mut rest = m.as_str();
    loop {
        let word_end = rest.find(char::is_whitespace)?;
        if !ORG_LEADING_STOPWORDS.contains(&&rest[..word_end]) {
            break;
        }
        let next = rest[word_end..].trim_start();
        start += rest.len() - next.len();
        rest = next;
    }
    Some(EntitySpan::new(EntityLabel::Org, rest, start, m.end()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnnotator;

impl DocumentAnnotator for PatternAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<EntitySpan>, AnnotationError> {
        let dates = DATE_RE
            .find_iter(text)
            .map(|m| EntitySpan::new(EntityLabel::Date, m.as_str(), m.start(), m.end()));
        let orgs = ORG_RE.find_iter(text).filter_map(org_span);

        let mut spans: Vec<EntitySpan> = dates.chain(orgs).collect();
        spans.sort_by_key(|span| span.start);

        // Drop any span that starts inside one already kept.
        let mut kept: Vec<EntitySpan> = Vec::with_capacity(spans.len());
        for span in spans {
            if kept.last().map_or(true, |last| span.start >= last.end) {
                kept.push(span);
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(text: &str, label: EntityLabel) -> Vec<String> {
        PatternAnnotator
            .annotate(text)
            .unwrap()
            .into_iter()
            .filter(|s| s.label == label)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_dates_found_in_document_order() {
        let text = "Posted 3 days ago. Start date March 2024, apply before 2024-02-28.";
        assert_eq!(
            labeled(text, EntityLabel::Date),
            vec!["3 days ago", "March 2024", "2024-02-28"]
        );
    }

    #[test]
    fn test_full_month_date_is_one_span() {
        let text = "Listed on January 15, 2024 and closes 1 March 2024";
        assert_eq!(
            labeled(text, EntityLabel::Date),
            vec!["January 15, 2024", "1 March 2024"]
        );
    }

    #[test]
    fn test_org_requires_corporate_suffix() {
        let text = "We are Initech Systems, building things. Great Team here.";
        assert_eq!(labeled(text, EntityLabel::Org), vec!["Initech Systems"]);
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "About Globex Corporation, posted today";
        let spans = PatternAnnotator.annotate(text).unwrap();
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Globex Corporation", "today"]);
        for span in &spans {
            assert_eq!(&text[span.start..span.end], span.text);
        }
    }

    #[test]
    fn test_org_drops_sentence_opening_words() {
        assert_eq!(
            labeled("Join Acme Inc as a teammate", EntityLabel::Org),
            vec!["Acme Inc"]
        );
        assert_eq!(
            labeled("Apply Today To Initech Systems", EntityLabel::Org),
            vec!["Initech Systems"]
        );
        assert!(labeled("Join Our Group", EntityLabel::Org).is_empty());
    }

    #[test]
    fn test_abbreviated_september_is_a_date() {
        assert_eq!(
            labeled("Posted Sept 5, 2024", EntityLabel::Date),
            vec!["Sept 5, 2024"]
        );
    }

    #[test]
    fn test_plain_text_has_no_spans() {
        assert!(PatternAnnotator.annotate("nothing to see").unwrap().is_empty());
    }
}
