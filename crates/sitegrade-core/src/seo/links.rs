//! Link analysis.
//!
//! Matches markdown link syntax `[text](url)`, ignoring image syntax
//! `![alt](url)`. Pages with no links at all get a soft suggestion; links
//! with empty anchor text get a firmer one, since anchor text is what
//! search engines index.

use regex::Regex;
use std::sync::LazyLock;

use super::reports::CheckResult;

/// Regex for markdown links. The first capture is the anchor text.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid regex"));

/// Check link presence and anchor text.
#[tracing::instrument(skip_all)]
pub fn check_links(text: &str) -> CheckResult {
    let mut link_count = 0;
    let mut empty_anchor = false;

    for m in LINK_PATTERN.captures_iter(text) {
        // Skip image syntax: the same bracket pair preceded by `!`.
        let start = m.get(0).map_or(0, |g| g.start());
        if start > 0 && text.as_bytes()[start - 1] == b'!' {
            continue;
        }
        link_count += 1;
        if m[1].trim().is_empty() {
            empty_anchor = true;
        }
    }

    if link_count == 0 {
        CheckResult::flagged(
            0.5,
            "No links found. Consider linking to related pages or sources.",
        )
    } else if empty_anchor {
        CheckResult::flagged(
            0.7,
            "Some links have empty anchor text. Describe the destination in the \
             link text.",
        )
    } else {
        CheckResult::pass()
    }
}
