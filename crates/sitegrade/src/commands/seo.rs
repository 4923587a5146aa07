//! Seo command — structural SEO scoring with suggestions.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use sitegrade_core::seo;

use super::read_input_file;

/// Arguments for the `seo` subcommand.
#[derive(Args, Debug)]
pub struct SeoArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable overall score (0-100); exit nonzero below it.
    #[arg(long)]
    pub min_score: Option<u8>,
}

/// Score a file's SEO checks and print suggestions.
#[instrument(name = "cmd_seo", skip_all, fields(file = %args.file))]
pub fn cmd_seo(args: SeoArgs, global_json: bool, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing seo command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = seo::analyze_seo(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} {}/100",
            args.file.bold(),
            "SEO score:".cyan(),
            report.overall_score,
        );
        for suggestion in &report.suggestions {
            println!("  {} {suggestion}", "-".yellow());
        }
    }

    if let Some(min) = args.min_score
        && report.overall_score < min
    {
        anyhow::bail!(
            "{} scores {} (min: {min}). Address the suggestions above.",
            args.file,
            report.overall_score,
        );
    }

    Ok(())
}
