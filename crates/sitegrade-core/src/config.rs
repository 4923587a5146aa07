//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by walking up from the
//! current directory to find a project config, then merging environment
//! variables over it and sensible defaults under it.
//!
//! # Config file locations (in order of precedence, highest first):
//! - `SITEGRADE_*` environment variables
//! - explicit files passed via [`ConfigLoader::with_file`]
//! - `sitegrade.toml` in current directory or any parent
//! - `.sitegrade.toml` in current directory or any parent
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use sitegrade_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let config = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Config file base names to search for (in precedence order, lowest first).
const CONFIG_NAMES: &[&str] = &[".sitegrade.toml", "sitegrade.toml"];

/// The configuration for sitegrade.
///
/// Deserialized from discovered TOML files and `SITEGRADE_*` environment
/// variables. All fields have defaults; an absent config file is not an
/// error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Maximum input size in bytes (default: 1 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default. Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Connection settings for the external text-improvement service.
    ///
    /// Owned by the caller: the analyzers never read this. When set, the
    /// endpoint and key are validated at load time so misconfiguration
    /// surfaces at startup rather than on first use.
    pub improve: Option<ImproveConfig>,
}

/// Validated connection settings for the text-improvement service.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ImproveConfig {
    /// Service endpoint URL.
    pub endpoint: String,
    /// API key sent with each request.
    pub api_key: String,
}

impl ImproveConfig {
    /// Validate the endpoint and credentials.
    fn validate(&self) -> ConfigResult<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidImproveEndpoint {
                endpoint: self.endpoint.clone(),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingImproveKey);
        }
        Ok(())
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or `--config`).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `SITEGRADE_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<Config> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(ref root) = self.project_search_root
            && let Some(project_config) = self.find_project_config(root)
        {
            figment = figment.merge(Toml::file_exact(project_config.as_str()));
        }

        for file in &self.explicit_files {
            figment = figment.merge(Toml::file_exact(file.as_str()));
        }

        // Environment variables (highest precedence)
        // SITEGRADE_LOG_LEVEL=debug, SITEGRADE_MAX_INPUT_BYTES=2097152, etc.
        figment = figment.merge(Env::prefixed("SITEGRADE_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;

        if let Some(ref improve) = config.improve {
            improve.validate()?;
        }

        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Find a project config file by walking up from the given directory.
    ///
    /// Returns the highest-precedence match from the closest directory that
    /// has any.
    fn find_project_config(&self, start: &Utf8Path) -> Option<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            // Regular file wins over the dotfile in the same directory.
            let found = CONFIG_NAMES
                .iter()
                .rev()
                .map(|name| dir.join(name))
                .find(|p| p.is_file());
            if found.is_some() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_nothing_found() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.max_input_bytes, None);
        assert!(!config.disable_input_limit);
        assert!(config.improve.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegrade.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log_level = \"debug\"\nmax_input_bytes = 2048").unwrap();

        let path = Utf8PathBuf::try_from(path).unwrap();
        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_input_bytes, Some(2048));
    }

    #[test]
    fn project_config_discovered_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".sitegrade.toml"), "log_level = \"warn\"").unwrap();

        let nested = Utf8PathBuf::try_from(nested).unwrap();
        let config = ConfigLoader::new()
            .with_project_search(&nested)
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn invalid_improve_endpoint_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegrade.toml");
        std::fs::write(
            &path,
            "[improve]\nendpoint = \"ftp://nope\"\napi_key = \"k\"",
        )
        .unwrap();

        let path = Utf8PathBuf::try_from(path).unwrap();
        let err = ConfigLoader::new().with_file(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidImproveEndpoint { .. }));
    }

    #[test]
    fn improve_without_key_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegrade.toml");
        std::fs::write(
            &path,
            "[improve]\nendpoint = \"https://api.example.com/improve\"",
        )
        .unwrap();

        let path = Utf8PathBuf::try_from(path).unwrap();
        let err = ConfigLoader::new().with_file(&path).load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingImproveKey));
    }

    #[test]
    fn valid_improve_config_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitegrade.toml");
        std::fs::write(
            &path,
            "[improve]\nendpoint = \"https://api.example.com/improve\"\napi_key = \"secret\"",
        )
        .unwrap();

        let path = Utf8PathBuf::try_from(path).unwrap();
        let config = ConfigLoader::new().with_file(&path).load().unwrap();
        let improve = config.improve.unwrap();
        assert_eq!(improve.endpoint, "https://api.example.com/improve");
    }
}
