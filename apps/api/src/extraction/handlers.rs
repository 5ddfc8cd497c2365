//! Axum route handlers for the posting Analysis API.

use std::collections::HashMap;

use anyhow::anyhow;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::annotation::{AnnotatedDocument, StaticMarkupHints};
use crate::errors::AppError;
use crate::extraction::posting::{ExtractedPosting, PostingExtractor};
use crate::extraction::text::{clean_text, looks_like_job_page, truncate_chars};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzePostingRequest {
    /// Visible page text.
    pub text: String,
    pub link: Option<String>,
    /// CSS selector → element text, resolved by the client.
    #[serde(default)]
    pub selectors: HashMap<String, String>,
    /// `<meta>` property/name → content.
    #[serde(default)]
    pub meta: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzePostingResponse {
    pub posting: ExtractedPosting,
    pub is_job_page: bool,
    pub sheet_row: Vec<String>,
}

/// POST /api/v1/jobs/analyze
///
/// Extracts a structured posting record from page text and markup hints.
/// Annotation runs on the blocking pool since model-backed annotators are CPU bound.
pub async fn handle_analyze_posting(
    State(state): State<AppState>,
    Json(request): Json<AnalyzePostingRequest>,
) -> Result<Json<AnalyzePostingResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let is_job_page = looks_like_job_page(&request.text);
    let text = truncate_chars(&clean_text(&request.text), state.config.max_description_chars);
    let hints = StaticMarkupHints::new(request.selectors, request.meta);
    let link = request.link;
    let processed_at = Utc::now();

    let posting = tokio::task::spawn_blocking(move || {
        let doc = AnnotatedDocument::annotate(text, state.annotator.as_ref()).with_hints(hints);
        PostingExtractor::new(state.date_parser.as_ref(), &state.config.posting_defaults)
            .extract(&doc, link, processed_at)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("posting extraction task failed: {e}")))?;

    info!(
        "Analyzed posting: {} at {} (job page: {is_job_page})",
        posting.position, posting.company
    );

    let sheet_row = posting.sheet_row();
    Ok(Json(AnalyzePostingResponse {
        posting,
        is_job_page,
        sheet_row,
    }))
}
