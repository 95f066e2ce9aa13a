//! Output rendering for human and JSON modes.

pub mod error;
pub mod human;
pub mod robot;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::core::models::{ActivationStatus, Network, NetworkList};
use crate::core::sync::SyncReport;
use crate::error::Result;
use crate::storage::ResolvedConfig;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub no_color: bool,
}

impl RenderOptions {
    /// Options for a resolved configuration, with color also gated on the terminal.
    #[must_use]
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            format: config.format,
            pretty: config.pretty,
            no_color: !crate::util::env::should_use_color(config.no_color),
        }
    }
}

/// Result of a command that changes state without returning a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub action: String,
    pub targets: Vec<String>,
    pub message: String,
}

impl ActionOutcome {
    pub fn new(action: impl Into<String>, targets: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            targets,
            message: message.into(),
        }
    }
}

/// Render a set of lists.
pub fn render_lists(lists: &[NetworkList], options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_lists(lists, options.no_color)),
        OutputFormat::Json => robot::render_json(&lists, options.pretty),
    }
}

/// Render one list, with its elements when present.
pub fn render_list(list: &NetworkList, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_list(list, options.no_color)),
        OutputFormat::Json => robot::render_json(list, options.pretty),
    }
}

/// Render the outcome of a sync.
pub fn render_sync_report(report: &SyncReport, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_sync_report(report, options.no_color)),
        OutputFormat::Json => robot::render_json(report, options.pretty),
    }
}

/// Render an activation record.
pub fn render_activation(
    status: &ActivationStatus,
    network: Network,
    options: RenderOptions,
) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_activation(status, network, options.no_color)),
        OutputFormat::Json => robot::render_json(status, options.pretty),
    }
}

/// Render a state change confirmation.
pub fn render_action(outcome: &ActionOutcome, options: RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Human => Ok(human::render_action(outcome, options.no_color)),
        OutputFormat::Json => robot::render_json(outcome, options.pretty),
    }
}
