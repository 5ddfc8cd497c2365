//! Bullet Scorer & Selector — ranks resume lines against role keywords.
//!
//! Algorithm:
//! 1. Split the resume into lines, strip one leading bullet marker, keep lines of 20+ chars
//! 2. Score each line by how many distinct role keywords it contains (case-insensitive)
//! 3. Stable-sort descending by score, so equal scores keep resume order
//! 4. Take positive-score lines up to `max_bullets`, then backfill with the rest

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tailoring::keywords::RoleKeywordSet;

const MIN_BULLET_CHARS: usize = 20;

static BULLET_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*\u{2022}]\s*").unwrap());

/// A cleaned resume line and the number of distinct role keywords it mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeBulletCandidate {
    pub text: String,
    pub score: usize,
}

/// Selected highlights plus the full ranking they were drawn from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletSelection {
    pub highlights: Vec<String>,
    pub ranked: Vec<ResumeBulletCandidate>,
}

/// Resume lines long enough to stand as highlight bullets, markers stripped.
pub fn extract_candidates(resume_text: &str) -> Vec<String> {
    resume_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BULLET_MARKER_RE.replace(line, "").into_owned())
        .filter(|line| line.chars().count() >= MIN_BULLET_CHARS)
        .collect()
}

/// Distinct keywords appearing anywhere in `bullet`; repeats count once.
pub fn score_bullet(bullet: &str, keywords: &RoleKeywordSet) -> usize {
    let lower = bullet.to_lowercase();
    keywords.keywords().filter(|kw| lower.contains(kw)).count()
}

pub fn select_bullets(
    resume_text: &str,
    keywords: &RoleKeywordSet,
    max_bullets: usize,
) -> BulletSelection {
    let mut ranked: Vec<ResumeBulletCandidate> = extract_candidates(resume_text)
        .into_iter()
        .map(|text| {
            let score = score_bullet(&text, keywords);
            ResumeBulletCandidate { text, score }
        })
        .collect();

    // Vec::sort_by is stable; ties keep resume order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let mut highlights: Vec<String> = ranked
        .iter()
        .filter(|candidate| candidate.score > 0)
        .take(max_bullets)
        .map(|candidate| candidate.text.clone())
        .collect();

    // Backfill with zero-score lines in ranked order. Positive scores form the prefix
    // of `ranked`, so everything after the taken ones is unused.
    let taken = highlights.len();
    highlights.extend(
        ranked
            .iter()
            .skip(taken)
            .take(max_bullets - taken)
            .map(|candidate| candidate.text.clone()),
    );

    BulletSelection { highlights, ranked }
}
