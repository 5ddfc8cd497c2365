//! Role Keyword Extractor — frequency-ranked keywords from a job description.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

const MIN_KEYWORD_CHARS: usize = 3;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "in", "is", "it", "of",
    "on", "or", "that", "the", "to", "was", "were", "will", "with", "you", "your", "our", "we",
];

/// Alphanumeric runs starting with a letter.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z][a-z0-9]*").unwrap());

/// A single keyword with its occurrence count in the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleKeyword {
    pub keyword: String,
    pub frequency: u32,
}

/// Keywords ordered by descending frequency, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleKeywordSet(Vec<RoleKeyword>);

impl RoleKeywordSet {
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.keyword.as_str())
    }

    /// The `n` highest-ranked keywords.
    pub fn top(&self, n: usize) -> Vec<&str> {
        self.keywords().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RoleKeyword> for RoleKeywordSet {
    fn from_iter<I: IntoIterator<Item = RoleKeyword>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercased tokens that survive stopword and length filtering, in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|token| token.len() >= MIN_KEYWORD_CHARS && !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Ranks description tokens by frequency. Empty or all-stopword text yields an empty set.
pub fn extract_role_keywords(job_description: &str, limit: NonZeroUsize) -> RoleKeywordSet {
    let mut ranked: Vec<RoleKeyword> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in tokenize(job_description) {
        match positions.get(&token) {
            Some(&index) => ranked[index].frequency += 1,
            None => {
                positions.insert(token.clone(), ranked.len());
                ranked.push(RoleKeyword {
                    keyword: token,
                    frequency: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(limit.get());
    RoleKeywordSet(ranked)
}
