//! Calendar parsing for DATE spans.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Parses free-form date text. Failure is `None`, never a panic.
///
/// `today` anchors relative phrases ("yesterday", "3 days ago") so results stay
/// deterministic for a fixed processing time.
pub trait DateParser: Send + Sync {
    fn parse_date(&self, text: &str, today: NaiveDate) -> Option<NaiveDate>;
}

static ORDINAL_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").unwrap());

// chrono knows "Sep" but not "Sept".
static SEPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsept\b").unwrap());

static RELATIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:posted\s+)?(\d+|a|an|one)\s+(day|week|month|year)s?\s+ago$").unwrap()
});

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
];

/// Format-driven parser built on chrono. Tries ISO forms, numeric and month-name
/// layouts, month-year (pinned to the 1st), then relative phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateParser;

impl DateParser for ChronoDateParser {
    fn parse_date(&self, text: &str, today: NaiveDate) -> Option<NaiveDate> {
        let trimmed = text
            .trim()
            .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':'));
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(datetime.date_naive());
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return Some(datetime.date());
        }

        let normalized = ORDINAL_SUFFIX_RE.replace_all(trimmed, "$1").replace('.', "");
        let normalized = SEPT_RE.replace_all(&normalized, "Sep");

        for format in FULL_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
                return Some(date);
            }
        }

        // "March 2024" carries no day.
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {normalized}"), "%d %B %Y") {
            return Some(date);
        }

        parse_relative(&normalized, today)
    }
}

fn parse_relative(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    match lower.as_str() {
        "today" | "just posted" => return Some(today),
        "yesterday" => return today.checked_sub_signed(Duration::days(1)),
        _ => {}
    }

    let captures = RELATIVE_RE.captures(&lower)?;
    let amount: u32 = match &captures[1] {
        "a" | "an" | "one" => 1,
        digits => digits.parse().ok()?,
    };
    match &captures[2] {
        "day" => today.checked_sub_signed(Duration::days(i64::from(amount))),
        "week" => today.checked_sub_signed(Duration::weeks(i64::from(amount))),
        "month" => today.checked_sub_months(Months::new(amount)),
        "year" => today.checked_sub_months(Months::new(amount.checked_mul(12)?)),
        _ => None,
    }
}
