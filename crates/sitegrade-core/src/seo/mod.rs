//! SEO analysis.
//!
//! Decomposes SEO scoring into eight independent checks, orchestrated by
//! [`analyze_seo`]. Each check is a pure function in its own module and can
//! also be invoked individually.
//!
//! Check order is fixed by [`CHECKS`], so the suggestion list in the
//! aggregate report is deterministic for identical input.

pub mod content_length;
pub mod headings;
pub mod images;
pub mod keyword_density;
pub mod links;
pub mod meta_description;
pub mod paragraph_length;
pub mod reports;
pub mod title;

pub use reports::{CheckResult, SeoReport};

/// The eight checks in fixed order: name and entry point.
pub const CHECKS: &[(&str, fn(&str) -> CheckResult)] = &[
    ("keyword_density", keyword_density::check_keyword_density),
    ("title", title::check_title),
    ("meta_description", meta_description::check_meta_description),
    ("headings", headings::check_headings),
    ("links", links::check_links),
    ("images", images::check_images),
    ("content_length", content_length::check_content_length),
    ("paragraph_length", paragraph_length::check_paragraph_length),
];

/// Run all SEO checks and aggregate into a single report.
///
/// The overall score is the mean of the check scores scaled to 0-100;
/// suggestions are concatenated in check order. Total over all inputs:
/// malformed or empty text degrades scores, it never fails.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_seo(text: &str) -> SeoReport {
    let mut total = 0.0;
    let mut suggestions = Vec::new();

    for &(name, check) in CHECKS {
        let result = check(text);
        tracing::debug!(check = name, score = result.score, "check complete");
        total += result.score;
        suggestions.extend(result.suggestions);
    }

    let overall_score = (total / CHECKS.len() as f64 * 100.0).round() as u8;

    SeoReport {
        overall_score,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed_page() -> String {
        let intro = "This article explains how content scoring works in practice, \
                     covering keyword usage, structure, and length in enough depth.";
        let paragraph = (0..8)
            .map(|_| "content scoring works through repeated signals measured here")
            .collect::<Vec<_>>()
            .join(". ");
        let body = (0..10)
            .map(|_| paragraph.clone())
            .collect::<Vec<_>>()
            .join(".\n\n");
        format!(
            "# A Practical Guide to Content Scoring\n{intro}\n\n## How it works\n\n\
             See [the docs](https://example.com) and ![diagram](flow.png).\n\n{body}"
        )
    }

    #[test]
    fn well_formed_page_scores_perfectly() {
        let report = analyze_seo(&well_formed_page());
        assert_eq!(report.overall_score, 100);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn empty_input_degrades_without_failing() {
        let report = analyze_seo("");
        // keyword 0.3, title 0, meta 0, headings 0, links 0.5, images 1,
        // length 0.3, paragraphs 1 -> mean 0.3875 -> 39
        assert_eq!(report.overall_score, 39);
        assert!(report.suggestions.iter().any(|s| s.contains("No main title")));
        assert!(report.suggestions.iter().any(|s| s.contains("No headings")));
        assert!(report.suggestions.iter().any(|s| s.contains("too short")));
    }

    #[test]
    fn score_stays_in_range() {
        for text in ["", "x", "# t\n\nhello.", "![](a.png) [](b)"] {
            let report = analyze_seo(text);
            assert!(report.overall_score <= 100);
        }
    }

    #[test]
    fn suggestions_follow_check_order() {
        // No keywords, no title, no intro: the keyword suggestion must come
        // before the title suggestion, which precedes the intro one.
        let report = analyze_seo("");
        let keyword_pos = report
            .suggestions
            .iter()
            .position(|s| s.contains("keywords"))
            .unwrap();
        let title_pos = report
            .suggestions
            .iter()
            .position(|s| s.contains("No main title"))
            .unwrap();
        let intro_pos = report
            .suggestions
            .iter()
            .position(|s| s.contains("introductory"))
            .unwrap();
        assert!(keyword_pos < title_pos);
        assert!(title_pos < intro_pos);
    }

    #[test]
    fn idempotent() {
        let text = well_formed_page();
        let a = analyze_seo(&text);
        let b = analyze_seo(&text);
        assert_eq!(a.overall_score, b.overall_score);
        assert_eq!(a.suggestions, b.suggestions);
    }

    #[test]
    fn reordering_later_paragraphs_is_stable() {
        // First paragraph and headings pinned; only body paragraphs swap.
        let head = "# A Practical Guide to Content Scoring\n\
                    This article explains how content scoring works in practice, \
                    covering keyword usage, structure, and length in enough depth.\n\n\
                    ## How it works";
        let para_a = "content scoring repeats enough signals that search engines \
                      notice the topic without guessing.";
        let para_b = "shorter sections keep readers moving while the scoring still \
                      sees every repeated signal.";
        let doc_ab = format!("{head}\n\n{para_a}\n\n{para_b}");
        let doc_ba = format!("{head}\n\n{para_b}\n\n{para_a}");

        // Order-insensitive checks contribute identically
        assert_eq!(
            keyword_density::check_keyword_density(&doc_ab).score,
            keyword_density::check_keyword_density(&doc_ba).score,
        );
        assert_eq!(
            content_length::check_content_length(&doc_ab).score,
            content_length::check_content_length(&doc_ba).score,
        );
        assert_eq!(
            analyze_seo(&doc_ab).overall_score,
            analyze_seo(&doc_ba).overall_score,
        );
    }

    #[test]
    fn unterminated_markdown_does_not_panic() {
        let report = analyze_seo("[broken link( and ![broken image( here");
        assert!(report.overall_score <= 100);
    }
}
