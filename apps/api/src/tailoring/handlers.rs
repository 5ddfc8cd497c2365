//! Axum route handlers for the Tailoring API.

use std::num::NonZeroUsize;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::keywords::{extract_role_keywords, RoleKeywordSet};
use crate::tailoring::tailor::{tailor_resume, TailorInput, TailoredResume};

const DEFAULT_MAX_BULLETS: i64 = 8;
const MIN_MAX_BULLETS: i64 = 3;
const MAX_MAX_BULLETS: i64 = 15;
const MIN_RESUME_CHARS: usize = 20;
const MIN_DESCRIPTION_CHARS: usize = 20;
const MIN_NAME_CHARS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SuggestBulletsRequest {
    pub resume_text: String,
    #[serde(default)]
    pub proficiencies: Vec<String>,
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    /// Signed so that negative values reach `validate` instead of failing in serde.
    #[serde(default = "default_max_bullets")]
    pub max_bullets: i64,
}

fn default_max_bullets() -> i64 {
    DEFAULT_MAX_BULLETS
}

impl SuggestBulletsRequest {
    /// Returns the validated bullet count.
    fn validate(&self) -> Result<usize, AppError> {
        require_chars("resume_text", &self.resume_text, MIN_RESUME_CHARS)?;
        require_chars("job_title", &self.job_title, MIN_NAME_CHARS)?;
        require_chars("company", &self.company, MIN_NAME_CHARS)?;
        require_chars("job_description", &self.job_description, MIN_DESCRIPTION_CHARS)?;
        if !(MIN_MAX_BULLETS..=MAX_MAX_BULLETS).contains(&self.max_bullets) {
            return Err(max_bullets_error());
        }
        usize::try_from(self.max_bullets).map_err(|_| max_bullets_error())
    }
}

fn max_bullets_error() -> AppError {
    AppError::Validation(format!(
        "max_bullets must be between {MIN_MAX_BULLETS} and {MAX_MAX_BULLETS}"
    ))
}

#[derive(Debug, Serialize)]
pub struct SuggestBulletsResponse {
    pub status: &'static str,
    pub tailored_resume: TailoredResume,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub job_description: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: RoleKeywordSet,
}

fn require_chars(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/suggest-bullets
///
/// Tailors the caller's resume to one job: ranked highlights, prioritized skills, summary.
pub async fn handle_suggest_bullets(
    State(state): State<AppState>,
    Json(request): Json<SuggestBulletsRequest>,
) -> Result<Json<SuggestBulletsResponse>, AppError> {
    let max_bullets = request.validate()?;

    let tailored_resume = tailor_resume(&TailorInput {
        resume_text: &request.resume_text,
        proficiencies: &request.proficiencies,
        job_title: &request.job_title,
        company: &request.company,
        job_description: &request.job_description,
        max_bullets,
        keyword_limit: state.config.keyword_limit,
    });

    info!(
        "Tailored resume for {} at {}: {} highlights",
        request.job_title,
        request.company,
        tailored_resume.experience_highlights.len()
    );

    Ok(Json(SuggestBulletsResponse {
        status: "ok",
        tailored_resume,
    }))
}

/// POST /api/v1/jobs/keywords
///
/// Returns the ranked role keywords for a job description.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let limit = match request.limit {
        Some(limit) => usize::try_from(limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| AppError::Validation("limit must be at least 1".to_string()))?,
        None => state.config.keyword_limit,
    };

    let keywords = extract_role_keywords(&request.job_description, limit);
    Ok(Json(KeywordsResponse { keywords }))
}
