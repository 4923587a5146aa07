//! Paragraph length analysis.
//!
//! Walls of text drive readers away. Any paragraph over 150 words earns a
//! suggestion to break it up.

use super::reports::CheckResult;
use crate::text;

/// Word count above which a paragraph reads as a wall of text.
const MAX_PARAGRAPH_WORDS: usize = 150;

/// Check for overlong paragraphs.
#[tracing::instrument(skip_all)]
pub fn check_paragraph_length(text: &str) -> CheckResult {
    let has_long_paragraph = text::split_paragraphs(text)
        .iter()
        .any(|p| text::count_words(p) > MAX_PARAGRAPH_WORDS);

    if has_long_paragraph {
        CheckResult::flagged(
            0.7,
            "Some paragraphs are very long. Break them up to keep the page \
             scannable.",
        )
    } else {
        CheckResult::pass()
    }
}
