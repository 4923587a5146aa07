//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use sitegrade_core::config::Config;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
    /// Endpoint only; the API key never leaves the config.
    #[serde(skip_serializing_if = "Option::is_none")]
    improve_endpoint: Option<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config) -> Self {
        Self {
            log_level: config.log_level.as_str().to_string(),
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
            improve_endpoint: config.improve.as_ref().map(|i| i.endpoint.clone()),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(_args: InfoArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }

        println!();
        println!("{}", "Configuration".bold().underline());
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        match full_info.config.max_input_bytes {
            Some(bytes) => println!("{}: {bytes}", "Max input bytes".dimmed()),
            None => println!("{}: {}", "Max input bytes".dimmed(), "(default)".dimmed()),
        }
        match full_info.config.improve_endpoint {
            Some(ref endpoint) => {
                println!("{}: {}", "Improve service".dimmed(), endpoint.cyan());
            }
            None => println!(
                "{}: {}",
                "Improve service".dimmed(),
                "not configured".dimmed()
            ),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &Config::default()).is_ok());
    }

    #[test]
    fn cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &Config::default()).is_ok());
    }

    #[test]
    fn config_info_defaults() {
        let info = ConfigInfo::from_config(&Config::default());
        assert_eq!(info.log_level, "info");
        assert!(info.improve_endpoint.is_none());
    }
}
