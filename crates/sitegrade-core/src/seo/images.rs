//! Image alt text analysis.
//!
//! Matches markdown image syntax `![alt](url)`. Pages without images are
//! not penalized; images without alt text are.

use regex::Regex;
use std::sync::LazyLock;

use super::reports::CheckResult;

/// Regex for markdown images. The first capture is the alt text.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").expect("valid regex"));

/// Check that every image carries alt text.
#[tracing::instrument(skip_all)]
pub fn check_images(text: &str) -> CheckResult {
    let mut has_images = false;
    let mut missing_alt = false;

    for m in IMAGE_PATTERN.captures_iter(text) {
        has_images = true;
        if m[1].trim().is_empty() {
            missing_alt = true;
        }
    }

    if has_images && missing_alt {
        CheckResult::flagged(
            0.5,
            "Some images are missing alt text. Describe each image for \
             accessibility and image search.",
        )
    } else {
        CheckResult::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_images_passes() {
        let result = check_images("Just text, no images.");
        assert_eq!(result.score, 1.0);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn image_with_alt_passes() {
        let result = check_images("![a sales chart](chart.png)");
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn image_without_alt_flagged() {
        let result = check_images("![](chart.png)");
        assert_eq!(result.score, 0.5);
        assert!(result.suggestions[0].contains("alt text"));
    }

    #[test]
    fn one_bad_image_among_good_ones() {
        let result = check_images("![ok](a.png) ![](b.png) ![fine](c.png)");
        assert_eq!(result.score, 0.5);
        assert_eq!(result.suggestions.len(), 1);
    }
}
