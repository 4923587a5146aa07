//! Readability command — reading ease, grade level, hard sentences.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use sitegrade_core::{markdown, readability};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level (1-12); exit nonzero above it.
    #[arg(long)]
    pub max_grade: Option<u8>,

    /// Strip markdown before scoring (defaults on for .md files).
    #[arg(long)]
    pub strip_markdown: Option<bool>,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    let strip_md = args
        .strip_markdown
        .unwrap_or_else(|| args.file.extension() == Some("md"));
    let prose = if strip_md {
        markdown::strip_to_prose(&content)
    } else {
        content
    };

    let report = readability::analyze_readability(&prose);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} ease {}, grade {}",
            args.file.bold(),
            "Readability:".cyan(),
            report.ease_score,
            report.grade,
        );
        for sentence in &report.very_hard_sentences {
            println!("  {} {}", "very hard:".red(), truncate(sentence, 80));
        }
        for sentence in &report.hard_sentences {
            println!("  {} {}", "hard:".yellow(), truncate(sentence, 80));
        }
    }

    if let Some(max) = args.max_grade
        && report.grade > max
    {
        bail!(
            "{} scores grade {} (max: {max}). Simplify sentences or shorten words.",
            args.file,
            report.grade,
        );
    }

    Ok(())
}

/// Truncate a sentence for terminal display.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
