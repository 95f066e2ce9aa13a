//! Configuration file loading.
//!
//! Loads optional settings from:
//! - Linux: `~/.config/netlist/config.toml`
//! - macOS: `~/Library/Application Support/com.akamai.netlist/config.toml`
//! - Windows: `%APPDATA%/akamai/netlist/config/config.toml`
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `AKAMAI_EDGERC`, `AKAMAI_EDGERC_SECTION`, `AKAMAI_ACCOUNT_SWITCH_KEY`:
//!   same as `--config`, `--section`, `--ask`
//! - `NETLIST_FORMAT`: Output format (human, json)
//! - `NETLIST_TIMEOUT`: Request timeout in seconds
//! - `NETLIST_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `NETLIST_PRETTY`: Pretty-print JSON output
//! - `NETLIST_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::edgegrid::DEFAULT_SECTION;
use crate::error::{NetlistError, Result};

/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "NETLIST_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "NETLIST_PRETTY";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "NETLIST_CONFIG";

/// Longest accepted request timeout.
const MAX_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Explicit `.edgerc` path; `None` means auto-discovery.
    pub edgerc: Option<PathBuf>,
    /// `.edgerc` consulted during auto-discovery.
    pub default_edgerc: Option<PathBuf>,
    /// Credentials section.
    pub section: String,
    /// Account switch key.
    pub account_switch_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl ResolvedConfig {
    /// Resolve settings from CLI args, environment variables, and the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Self::load_config()?;
        config.validate()?;
        Ok(Self::resolve_from(cli, &config, &AppPaths::new()))
    }

    /// Load config file, respecting `NETLIST_CONFIG` override.
    fn load_config() -> Result<Config> {
        if let Ok(path) = std::env::var(ENV_CONFIG) {
            Config::load_from(Path::new(&path))
        } else {
            Config::load()
        }
    }

    /// Merge an already-loaded config file with the command line.
    #[must_use]
    pub fn resolve_from(cli: &Cli, config: &Config, paths: &AppPaths) -> Self {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            cli.format
                .or_else(|| config.output.format.as_deref().and_then(parse_format))
                .unwrap_or_default()
        };

        let no_color = cli.no_color
            || is_env_truthy(ENV_NO_COLOR)
            || std::env::var_os(ENV_NO_COLOR_STD).is_some()
            || !config.output.color;

        let pretty = cli.pretty || is_env_truthy(ENV_PRETTY) || config.output.pretty;

        Self {
            edgerc: cli.config.clone().or_else(|| config.general.edgerc.clone()),
            default_edgerc: paths.default_edgerc(),
            section: cli
                .section
                .clone()
                .or_else(|| config.general.section.clone())
                .unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            account_switch_key: cli
                .ask
                .clone()
                .or_else(|| config.general.account_switch_key.clone())
                .filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(cli.timeout.unwrap_or(config.general.timeout_seconds)),
            format,
            no_color,
            pretty,
        }
    }
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_lowercase().as_str() {
        "human" => Some(OutputFormat::Human),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var: &str) -> bool {
    std::env::var(var)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

// =============================================================================
// Config file
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Default credentials section.
    pub section: Option<String>,
    /// Default `.edgerc` path (treated like `--config`).
    pub edgerc: Option<PathBuf>,
    /// Default account switch key.
    pub account_switch_key: Option<String>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            section: None,
            edgerc: None,
            account_switch_key: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().config_file())
    }

    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file exists but is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| NetlistError::Config(format!("Invalid config file: {e}")))
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown output format, a timeout outside
    /// 1-300 seconds, or an empty section name.
    pub fn validate(&self) -> Result<()> {
        if let Some(format) = &self.output.format {
            if parse_format(format).is_none() {
                return Err(NetlistError::Config(format!(
                    "Invalid format \"{format}\". Valid formats: human, json"
                )));
            }
        }

        if self.general.timeout_seconds == 0 || self.general.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(NetlistError::Config(
                "Timeout must be between 1 and 300 seconds".to_string(),
            ));
        }

        if self
            .general
            .section
            .as_deref()
            .is_some_and(|section| section.trim().is_empty())
        {
            return Err(NetlistError::Config(
                "Section name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
