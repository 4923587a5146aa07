//! Analyze command — combined SEO and readability report.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use sitegrade_core::{markdown, readability, seo};
use sitegrade_core::{ReadabilityReport, SeoReport};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Combined report across both pipelines.
#[derive(Debug, Serialize)]
struct CombinedReport {
    seo: SeoReport,
    readability: ReadabilityReport,
}

/// Run both analyzers on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;

    // SEO checks read markdown structure; readability reads prose.
    let seo_report = seo::analyze_seo(&content);
    let prose = if args.file.extension() == Some("md") {
        markdown::strip_to_prose(&content)
    } else {
        content
    };
    let readability_report = readability::analyze_readability(&prose);

    if global_json {
        let combined = CombinedReport {
            seo: seo_report,
            readability: readability_report,
        };
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    // Text output — section by section
    println!("{}", args.file.bold());

    println!("\n  {} {}/100", "SEO:".cyan(), seo_report.overall_score);
    for suggestion in &seo_report.suggestions {
        println!("    {} {suggestion}", "-".yellow());
    }

    println!(
        "\n  {} ease {}, grade {}, {} hard / {} very hard sentences",
        "Readability:".cyan(),
        readability_report.ease_score,
        readability_report.grade,
        readability_report.hard_sentences.len(),
        readability_report.very_hard_sentences.len(),
    );

    Ok(())
}
