//! Content length analysis.
//!
//! Thin pages rank poorly. Under 300 words is too short to rank; 300-599
//! is workable but long-form content performs better.

use super::reports::CheckResult;
use crate::text;

/// Minimum word count for a page to have a chance of ranking.
const MIN_WORDS: usize = 300;
/// Word count above which the page counts as long-form.
const LONG_FORM_WORDS: usize = 600;

/// Check total word count.
#[tracing::instrument(skip_all)]
pub fn check_content_length(text: &str) -> CheckResult {
    let words = text::count_words(text);

    if words < MIN_WORDS {
        CheckResult::flagged(
            0.3,
            "Content is too short. Aim for at least 300 words so the page has \
             enough substance to rank.",
        )
    } else if words < LONG_FORM_WORDS {
        CheckResult::flagged(
            0.7,
            "Decent length, but long-form content performs better. Consider \
             expanding toward 1000+ words.",
        )
    } else {
        CheckResult::pass()
    }
}
