//! Skill Prioritizer — orders the candidate's proficiencies by role relevance.

use std::collections::HashSet;

use crate::tailoring::keywords::RoleKeywordSet;

pub const MAX_PRIORITIZED_SKILLS: usize = 8;

/// Proficiencies that are also role keywords, in keyword rank order. When none
/// overlap, the first proficiencies in the order the caller gave them.
pub fn prioritize_skills(proficiencies: &[String], keywords: &RoleKeywordSet) -> Vec<String> {
    let known: HashSet<String> = proficiencies
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    let matched: Vec<String> = keywords
        .keywords()
        .filter(|kw| known.contains(*kw))
        .take(MAX_PRIORITIZED_SKILLS)
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        proficiencies
            .iter()
            .take(MAX_PRIORITIZED_SKILLS)
            .cloned()
            .collect()
    } else {
        matched
    }
}
