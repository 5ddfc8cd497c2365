//! Small text helpers shared by the field extractors.

/// Markers counted by `looks_like_job_page`.
const JOB_PAGE_MARKERS: &[&str] = &["apply", "job description", "responsibilities", "qualifications"];

/// Collapses every whitespace run to one space and trims the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// True when every cased run starts with an uppercase letter followed only by lowercase
/// letters ("Engineer", "Full-Stack"), and the word has at least one cased letter.
pub fn is_title_case(word: &str) -> bool {
    let mut previous_cased = false;
    let mut saw_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            saw_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            saw_cased = true;
        } else {
            previous_cased = false;
        }
    }
    saw_cased
}

/// Truncates to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Heuristic check that a page is a job posting: at least two markers present.
pub fn looks_like_job_page(text: &str) -> bool {
    let lower = text.to_lowercase();
    JOB_PAGE_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count()
        >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Senior \n\t Backend   Engineer "), "Senior Backend Engineer");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_capitalize_lowercases_tail() {
        assert_eq!(capitalize("engineer"), "Engineer");
        assert_eq!(capitalize("ACME CORP"), "Acme corp");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Engineer"));
        assert!(is_title_case("Full-Stack"));
        assert!(is_title_case("Rust,"));
        assert!(!is_title_case("ENGINEER"));
        assert!(!is_title_case("engineer"));
        assert!(!is_title_case("McDonald"));
        assert!(!is_title_case("2024"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("résumé", 3), "rés");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_job_page_needs_two_markers() {
        assert!(looks_like_job_page("Responsibilities: ship code. Apply now!"));
        assert!(!looks_like_job_page("Apply our coupon at checkout"));
    }
}
