//! Meta description analysis.
//!
//! The first paragraph stands in for the meta description: it is what
//! search engines fall back to when no explicit description exists.
//! Snippets show roughly 120-160 characters.

use super::reports::CheckResult;
use crate::text;

/// Minimum description length in characters.
const MIN_DESCRIPTION_CHARS: usize = 120;
/// Maximum description length before snippet truncation.
const MAX_DESCRIPTION_CHARS: usize = 160;

/// Check the first paragraph as a meta-description proxy.
#[tracing::instrument(skip_all)]
pub fn check_meta_description(text: &str) -> CheckResult {
    let paragraphs = text::split_paragraphs(text);

    let intro = paragraphs
        .first()
        .map(|p| strip_leading_heading(p))
        .unwrap_or_default();

    if intro.is_empty() {
        return CheckResult::flagged(
            0.0,
            "Add an introductory paragraph. Search engines use it as the page \
             description when none is set.",
        );
    }

    let len = intro.chars().count();
    if len < MIN_DESCRIPTION_CHARS {
        CheckResult::flagged(
            0.5,
            "Introduction is too short for a search snippet. Aim for 120-160 \
             characters.",
        )
    } else if len > MAX_DESCRIPTION_CHARS {
        CheckResult::flagged(
            0.7,
            "Introduction is too long for a search snippet and will be cut off. \
             Keep the first paragraph under 160 characters.",
        )
    } else {
        CheckResult::pass()
    }
}

/// Drop a heading line at the start of a paragraph, keeping any prose below.
fn strip_leading_heading(paragraph: &str) -> String {
    let trimmed = paragraph.trim();
    if trimmed.starts_with('#') {
        trimmed
            .split_once('\n')
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_default()
    } else {
        trimmed.to_string()
    }
}
