//! Core library for sitegrade.
//!
//! This crate provides the content analysis used by the `sitegrade` CLI and
//! any downstream consumers: an SEO analyzer scoring eight structural checks
//! over markdown text, and a readability analyzer producing an ease score,
//! grade level, and per-sentence difficulty classification.
//!
//! # Modules
//!
//! - [`seo`] - SEO checks and aggregate scoring
//! - [`readability`] - Reading ease, grade level, sentence classification
//! - [`syllable`] - Heuristic syllable estimation
//! - [`text`] - Sentence/word/paragraph tokenization
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use sitegrade_core::{readability, seo};
//!
//! let text = "# My Post\n\nShort intro. Simple words here.";
//! let seo_report = seo::analyze_seo(text);
//! let read_report = readability::analyze_readability(text);
//!
//! assert!(seo_report.overall_score <= 100);
//! assert!(read_report.grade >= 1);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod seo;
pub mod syllable;
pub mod text;

pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use readability::{ReadabilityReport, analyze_readability};
pub use seo::{CheckResult, SeoReport, analyze_seo};

/// Default cap on input size in bytes (1 MiB).
///
/// Analysis is regex-heavy; the cap keeps pathological inputs from tying up
/// a CLI invocation. Callers can raise or disable it via configuration.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
