//! Whole-document orchestration: one annotated posting → one `ExtractedPosting`.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::company::extract_company;
use super::dates::extract_dates;
use super::position::extract_position;
use super::salary::extract_salary;
use crate::annotation::{AnnotatedDocument, DateParser};

static RESUME_UPLOAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)resume|cv").unwrap());

const SHEET_DATE_FORMAT: &str = "%Y-%m-%d";

/// Static fields the text cannot tell us. Overridable through config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingDefaults {
    pub industry: String,
    pub role: String,
    pub status: String,
    pub location: String,
}

impl Default for PostingDefaults {
    fn default() -> Self {
        Self {
            industry: "Technology".to_string(),
            role: "Full-time".to_string(),
            status: "Waiting".to_string(),
            location: "Remote".to_string(),
        }
    }
}

/// Best-guess structured record for one job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPosting {
    pub position: String,
    pub company: String,
    pub industry: String,
    pub role: String,
    pub link: Option<String>,
    pub status: String,
    pub location: String,
    pub date_posted: NaiveDate,
    pub date_applied: NaiveDate,
    pub salary_range: Option<String>,
    pub cover_letter_mentioned: bool,
    pub resume_upload_mentioned: bool,
}

impl ExtractedPosting {
    /// Cells in application-log column order: Position, Company, Industry, Role, Link,
    /// Status, Location, Date Posted, Date Applied, Salary Range, Cover Letter, Resume upload,
    /// Resume form. Nothing detects a resume form, so that cell is always `FALSE`.
    pub fn sheet_row(&self) -> Vec<String> {
        vec![
            self.position.clone(),
            self.company.clone(),
            self.industry.clone(),
            self.role.clone(),
            self.link.clone().unwrap_or_default(),
            self.status.clone(),
            self.location.clone(),
            self.date_posted.format(SHEET_DATE_FORMAT).to_string(),
            self.date_applied.format(SHEET_DATE_FORMAT).to_string(),
            self.salary_range.clone().unwrap_or_default(),
            sheet_bool(self.cover_letter_mentioned),
            sheet_bool(self.resume_upload_mentioned),
            sheet_bool(false),
        ]
    }
}

fn sheet_bool(value: bool) -> String {
    if value { "TRUE" } else { "FALSE" }.to_string()
}

pub fn mentions_cover_letter(text: &str) -> bool {
    text.to_lowercase().contains("cover letter")
}

pub fn mentions_resume_upload(text: &str) -> bool {
    RESUME_UPLOAD_RE.is_match(text)
}

/// Runs every field extractor over a document. Holds only borrowed, read-only
/// collaborators, so one extractor per request is cheap and shares nothing.
pub struct PostingExtractor<'a> {
    date_parser: &'a dyn DateParser,
    defaults: &'a PostingDefaults,
}

impl<'a> PostingExtractor<'a> {
    pub fn new(date_parser: &'a dyn DateParser, defaults: &'a PostingDefaults) -> Self {
        Self {
            date_parser,
            defaults,
        }
    }

    /// `processed_at` supplies the fallback posting date and the application date.
    pub fn extract(
        &self,
        doc: &AnnotatedDocument,
        link: Option<String>,
        processed_at: DateTime<Utc>,
    ) -> ExtractedPosting {
        let today = processed_at.date_naive();
        let text = doc.text();
        let dates = extract_dates(doc, self.date_parser, today);

        let posting = ExtractedPosting {
            position: extract_position(doc),
            company: extract_company(doc),
            industry: self.defaults.industry.clone(),
            role: self.defaults.role.clone(),
            link,
            status: self.defaults.status.clone(),
            location: self.defaults.location.clone(),
            date_posted: dates.posted.unwrap_or(today),
            date_applied: today,
            salary_range: extract_salary(text),
            cover_letter_mentioned: mentions_cover_letter(text),
            resume_upload_mentioned: mentions_resume_upload(text),
        };

        info!(
            position = %posting.position,
            company = %posting.company,
            salary = ?posting.salary_range,
            applied_in_text = ?dates.applied,
            "Posting extracted"
        );
        posting
    }
}
