//! Title length analysis.
//!
//! The first H1 line (`# Title`) stands in for the page title tag. Search
//! results truncate titles past ~60 characters, and very short titles waste
//! the slot.

use regex::Regex;
use std::sync::LazyLock;

use super::reports::CheckResult;

/// Regex for an H1 line (exactly one `#`).
static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid regex"));

/// Minimum title length in characters.
const MIN_TITLE_CHARS: usize = 30;
/// Maximum title length before truncation in search results.
const MAX_TITLE_CHARS: usize = 60;

/// Check the length of the first H1 title.
#[tracing::instrument(skip_all)]
pub fn check_title(text: &str) -> CheckResult {
    let Some(captures) = H1_PATTERN.captures(text) else {
        return CheckResult::flagged(
            0.0,
            "No main title found. Add an H1 heading (# Title) at the top of the page.",
        );
    };

    let title = captures[1].trim();
    let len = title.chars().count();

    if len < MIN_TITLE_CHARS {
        CheckResult::flagged(
            0.5,
            "Title is too short. Aim for 30-60 characters so it fills the search \
             result slot.",
        )
    } else if len > MAX_TITLE_CHARS {
        CheckResult::flagged(
            0.7,
            "Title is too long and may be truncated in search results. Keep it \
             under 60 characters.",
        )
    } else {
        CheckResult::pass()
    }
}
