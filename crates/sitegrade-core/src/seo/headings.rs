//! Heading structure analysis.
//!
//! A page should carry exactly one H1 and at least one H2. Missing
//! subheadings and duplicate H1s are penalized independently, so both
//! penalties can compound on the same text.

use regex::Regex;
use std::sync::LazyLock;

use super::reports::CheckResult;

/// Regex for any heading line (1-6 `#` characters followed by text).
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+\S.*$").expect("valid regex"));

/// Check heading hierarchy: H1 uniqueness and H2 presence.
#[tracing::instrument(skip_all)]
pub fn check_headings(text: &str) -> CheckResult {
    let levels: Vec<usize> = HEADING_PATTERN
        .captures_iter(text)
        .map(|c| c[1].len())
        .collect();

    if levels.is_empty() {
        return CheckResult::flagged(
            0.0,
            "No headings found. Structure the page with an H1 title and H2 sections.",
        );
    }

    let h1_count = levels.iter().filter(|&&l| l == 1).count();
    let has_h2 = levels.contains(&2);

    let mut score = 1.0;
    let mut suggestions = Vec::new();

    if h1_count == 0 {
        score = 0.3;
        suggestions.push("Add an H1 heading as the main title.".to_string());
    } else if h1_count > 1 {
        score = 0.5;
        suggestions.push(
            "Multiple H1 headings found. Use only one H1 and demote the rest to H2.".to_string(),
        );
    }

    if !has_h2 {
        score *= 0.7;
        suggestions
            .push("Add H2 subheadings to break the content into sections.".to_string());
    }

    CheckResult { score, suggestions }
}
