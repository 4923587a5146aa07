//! Keyword usage analysis.
//!
//! A "keyword" is any word longer than three letters that appears more than
//! once. A text with three or more distinct keywords among its five most
//! frequent candidates reads as well-focused; fewer suggests the topic is
//! diluted.

use std::collections::HashMap;

use crate::text;

use super::reports::CheckResult;

/// Check keyword density across the text.
#[tracing::instrument(skip_all)]
pub fn check_keyword_density(text: &str) -> CheckResult {
    let words = text::extract_words(text);

    // Frequency map over candidate words, preserving encounter order for
    // stable tie-breaking.
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for word in &words {
        if word.chars().count() > 3 {
            let entry = counts.entry(word.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(word.as_str());
            }
            *entry += 1;
        }
    }

    // Top five candidates by frequency; stable sort keeps encounter order
    // among ties.
    let mut ranked: Vec<(&str, usize)> = order.iter().map(|&w| (w, counts[w])).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let keyword_count = ranked
        .iter()
        .take(5)
        .filter(|(_, count)| *count > 1)
        .count();

    match keyword_count {
        0 => CheckResult::flagged(
            0.3,
            "No clear keywords found. Repeat your main topic words so search engines \
             can identify the subject.",
        ),
        1 | 2 => CheckResult::flagged(
            0.6,
            "Limited keyword usage. Work your main topic words into more of the text.",
        ),
        _ => CheckResult::pass(),
    }
}
