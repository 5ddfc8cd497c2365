//! Tailoring Orchestrator — composes keywords, bullets and skills into one result.
//!
//! Flow: extract_role_keywords → select_bullets → prioritize_skills → summary.
//! Pure and deterministic: same input, same `TailoredResume`. No I/O.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tailoring::bullets::select_bullets;
use crate::tailoring::keywords::{extract_role_keywords, RoleKeywordSet};
use crate::tailoring::skills::prioritize_skills;

/// Keywords named in the summary sentence.
const SUMMARY_KEYWORDS: usize = 5;
const SUMMARY_FALLBACK_FOCUS: &str = "core delivery";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRole {
    pub job_title: String,
    pub company: String,
}

/// Copies of the tailored values a client may edit before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableSections {
    pub summary: String,
    pub skills: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub target_role: TargetRole,
    pub summary: String,
    pub prioritized_skills: Vec<String>,
    pub experience_highlights: Vec<String>,
    pub editable_sections: EditableSections,
    pub role_keywords: RoleKeywordSet,
}

/// Everything the orchestrator needs, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct TailorInput<'a> {
    pub resume_text: &'a str,
    pub proficiencies: &'a [String],
    pub job_title: &'a str,
    pub company: &'a str,
    pub job_description: &'a str,
    pub max_bullets: usize,
    pub keyword_limit: NonZeroUsize,
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

pub fn tailor_resume(input: &TailorInput<'_>) -> TailoredResume {
    let role_keywords = extract_role_keywords(input.job_description, input.keyword_limit);
    let selection = select_bullets(input.resume_text, &role_keywords, input.max_bullets);
    let prioritized_skills = prioritize_skills(input.proficiencies, &role_keywords);
    let summary = build_summary(input.job_title, input.company, &role_keywords);

    debug!(
        keywords = role_keywords.len(),
        candidates = selection.ranked.len(),
        highlights = selection.highlights.len(),
        skills = prioritized_skills.len(),
        "Resume tailored"
    );

    TailoredResume {
        target_role: TargetRole {
            job_title: input.job_title.to_string(),
            company: input.company.to_string(),
        },
        editable_sections: EditableSections {
            summary: summary.clone(),
            skills: prioritized_skills.clone(),
            highlights: selection.highlights.clone(),
        },
        summary,
        prioritized_skills,
        experience_highlights: selection.highlights,
        role_keywords,
    }
}

/// "Targeting {title} at {company}. Highlights align with role needs in {top keywords}."
pub fn build_summary(job_title: &str, company: &str, keywords: &RoleKeywordSet) -> String {
    let focus = if keywords.is_empty() {
        SUMMARY_FALLBACK_FOCUS.to_string()
    } else {
        keywords.top(SUMMARY_KEYWORDS).join(", ")
    };
    format!("Targeting {job_title} at {company}. Highlights align with role needs in {focus}.")
}
