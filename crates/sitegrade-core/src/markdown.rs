//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. The readability analyzer works on prose; headings, code, and
//! image alt text would skew its sentence statistics, so the CLI strips them
//! from `.md` files before scoring.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, headings, image alt text, and YAML
/// frontmatter. Preserves link text, blockquote text, list item text, and
/// emphasized text (without markers).
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    // pulldown-cmark doesn't know about YAML frontmatter
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Paragraph boundaries become spaces
            Event::End(TagEnd::Paragraph) if skip_depth == 0 => {
                result.push(' ');
            }

            // Skip inline code text
            Event::Code(_) => {}

            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let after_close = &after_opening[close_pos + 4..];
    after_close
        .trim_start_matches(|c| c == '-')
        .trim_start()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_headings_and_code() {
        let md = "# Title\n\nThe cat sat on the mat.\n\n```rust\nlet x = 1;\n```";
        let prose = strip_to_prose(md);
        assert!(prose.contains("The cat sat"));
        assert!(!prose.contains("Title"));
        assert!(!prose.contains("let x"));
    }

    #[test]
    fn keeps_link_text_drops_alt_text() {
        let md = "See [the docs](https://example.com) and ![a big diagram](d.png).";
        let prose = strip_to_prose(md);
        assert!(prose.contains("the docs"));
        assert!(!prose.contains("big diagram"));
        assert!(!prose.contains("https://example.com"));
    }

    #[test]
    fn strips_inline_code() {
        let prose = strip_to_prose("Run `cargo build` to compile.");
        assert!(!prose.contains("cargo build"));
        assert!(prose.contains("to compile"));
    }

    #[test]
    fn strips_frontmatter() {
        let md = "---\ntitle: Post\n---\n\nActual prose here.";
        let prose = strip_to_prose(md);
        assert!(prose.contains("Actual prose"));
        assert!(!prose.contains("title: Post"));
    }

    #[test]
    fn empty_input() {
        assert!(strip_to_prose("").is_empty());
    }
}
