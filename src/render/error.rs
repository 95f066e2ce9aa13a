//! Error rendering.
//!
//! Human mode prints the message, its code and a hint line. JSON mode prints a
//! single object so scripts can branch on `code`.

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::NetlistError;

/// Render an error for the terminal.
#[must_use]
pub fn render_error(error: &NetlistError, format: OutputFormat, no_color: bool, pretty: bool) -> String {
    match format {
        OutputFormat::Json => render_error_json(error, pretty),
        OutputFormat::Human => {
            let use_color = !no_color && crate::util::env::stdout_is_tty();
            render_simple(error, use_color)
        }
    }
}

/// Render error as structured JSON.
#[must_use]
pub fn render_error_json(error: &NetlistError, pretty: bool) -> String {
    let envelope = ErrorEnvelope {
        error: ErrorJson::from_error(error),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    };
    json.unwrap_or_else(|_| render_simple(error, false))
}

fn render_simple(error: &NetlistError, use_color: bool) -> String {
    let label = if use_color {
        "error".red().bold().to_string()
    } else {
        "error".to_string()
    };
    let code = format!("[{}]", error.error_code());
    let code = if use_color {
        code.dimmed().to_string()
    } else {
        code
    };

    let mut output = format!("{label} {code}: {error}");
    if let Some(hint) = error.hint() {
        output.push_str("\nhint: ");
        output.push_str(&hint);
    }
    output
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorJson,
}

#[derive(Serialize)]
struct ErrorJson {
    code: &'static str,
    category: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl ErrorJson {
    fn from_error(error: &NetlistError) -> Self {
        Self {
            code: error.error_code(),
            category: error.category().to_string(),
            message: error.to_string(),
            status: error.http_status(),
            hint: error.hint(),
        }
    }
}
