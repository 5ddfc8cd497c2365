//! Posting dates from DATE spans.
//!
//! Assignment is positional: the first DATE span that parses is taken as the posting
//! date and the next one as the application date. Nothing about the surrounding
//! wording is considered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotation::{AnnotatedDocument, DateParser, EntityLabel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDates {
    pub posted: Option<NaiveDate>,
    pub applied: Option<NaiveDate>,
}

pub fn extract_dates(
    doc: &AnnotatedDocument,
    parser: &dyn DateParser,
    today: NaiveDate,
) -> ExtractedDates {
    let mut parsed = doc.spans_labeled(EntityLabel::Date).filter_map(|span| {
        let date = parser.parse_date(&span.text, today);
        if date.is_none() {
            debug!(span = %span.text, "skipping unparsable DATE span");
        }
        date
    });

    let posted = parsed.next();
    let applied = parsed.next();
    ExtractedDates { posted, applied }
}
