//! Salary range extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Applied in order; each pattern captures the low and high bound.
static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // $120,000 - $150,000 / $90K–$110K
        Regex::new(r"(?i)\$(\d{1,3}(?:,\d{3})*K?)\s*[-–—]\s*\$(\d{1,3}(?:,\d{3})*K?)").unwrap(),
        // USD 90k - 120k
        Regex::new(r"(?i)(?:USD|CAD)?\s*(\d+k)\s*-\s*(\d+k)").unwrap(),
        // Salary: from $90,000 up to $120,000
        Regex::new(r"(?i)(?:salary|compensation).{1,20}?\$(\d+[\d,.]*).{1,20}?\$(\d+[\d,.]*)")
            .unwrap(),
    ]
});

/// `"LOW-HIGH"` from the first matching pattern; `None` when no range is stated.
pub fn extract_salary(text: &str) -> Option<String> {
    SALARY_PATTERNS.iter().find_map(|regex| {
        let captures = regex.captures(text)?;
        let low = captures.get(1)?.as_str();
        let high = captures.get(2)?.as_str();
        Some(format!("{low}-{high}"))
    })
}
