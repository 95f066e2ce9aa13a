//! Error types for netlist.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! ## Error Taxonomy
//!
//! Errors are categorized so the renderer can label them and pick a hint:
//! - **Credentials**: `.edgerc` lookup, missing sections or fields
//! - **Configuration**: `config.toml` parsing and invalid values
//! - **Network**: connection failures and timeouts
//! - **Api**: non-success responses from the Network Lists service
//! - **Input**: element files and flag values the service would reject anyway
//! - **Internal**: I/O, serialization and anything unclassified
//!
//! Each error has a stable code (e.g., `NL-A001`) for programmatic handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Credential resolution failed.
    Credentials,
    /// Configuration file or value issues.
    Configuration,
    /// Transport-level failures (connect, timeout).
    Network,
    /// The remote service rejected the request.
    Api,
    /// Local input could not be used.
    Input,
    /// Everything else.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Credentials => "Credentials error",
            Self::Configuration => "Configuration error",
            Self::Network => "Network error",
            Self::Api => "API error",
            Self::Input => "Input error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Credentials => "K",
            Self::Configuration => "C",
            Self::Network => "N",
            Self::Api => "A",
            Self::Input => "I",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Remote, transport or I/O failure
    GeneralError = 1,
    /// Credentials or configuration could not be resolved
    ConfigError = 2,
    /// Local input was unusable
    InputError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for netlist operations.
#[derive(Error, Debug)]
pub enum NetlistError {
    // ==========================================================================
    // Credentials
    // ==========================================================================
    /// Neither the environment nor the default `.edgerc` yielded credentials.
    #[error("cannot load credentials for section [{section}]")]
    CredentialsNotFound { section: String },

    /// An explicitly named `.edgerc` does not exist.
    #[error("edgerc file not found: {path}")]
    EdgercNotFound { path: String },

    /// The `.edgerc` could not be parsed.
    #[error("invalid edgerc file {path}: {message}")]
    EdgercParse { path: String, message: String },

    /// The requested section is absent from the `.edgerc`.
    #[error("section [{section}] not found in {path}")]
    SectionNotFound { section: String, path: String },

    /// A required key is missing from the section.
    #[error("credential field '{field}' missing in section [{section}]")]
    CredentialFieldMissing { section: String, field: String },

    // ==========================================================================
    // Configuration
    // ==========================================================================
    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Input
    // ==========================================================================
    /// Flag or file content that cannot be turned into a request.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No list matched a lookup by name.
    #[error("network list not found: {0}")]
    ListNotFound(String),

    // ==========================================================================
    // Remote service
    // ==========================================================================
    /// The service answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },

    /// The service answered with something we could not decode.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    // ==========================================================================
    // Network
    // ==========================================================================
    /// Request timeout.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Connection-level failure.
    #[error("network error: {0}")]
    Network(String),

    // ==========================================================================
    // Internal
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NetlistError {
    /// Map error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::CredentialsNotFound { .. }
            | Self::EdgercNotFound { .. }
            | Self::EdgercParse { .. }
            | Self::SectionNotFound { .. }
            | Self::CredentialFieldMissing { .. }
            | Self::Config(_) => ExitCode::ConfigError,

            Self::InvalidInput(_) => ExitCode::InputError,

            Self::Timeout(_) => ExitCode::Timeout,

            Self::ListNotFound(_)
            | Self::Api { .. }
            | Self::ParseResponse(_)
            | Self::Network(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category for classification and rendering.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::CredentialsNotFound { .. }
            | Self::EdgercNotFound { .. }
            | Self::EdgercParse { .. }
            | Self::SectionNotFound { .. }
            | Self::CredentialFieldMissing { .. } => ErrorCategory::Credentials,

            Self::Config(_) => ErrorCategory::Configuration,

            Self::InvalidInput(_) | Self::ListNotFound(_) => ErrorCategory::Input,

            Self::Api { .. } | Self::ParseResponse(_) => ErrorCategory::Api,

            Self::Timeout(_) | Self::Network(_) => ErrorCategory::Network,

            Self::Io(_) | Self::Json(_) | Self::Other(_) => ErrorCategory::Internal,
        }
    }

    /// Stable error code, `NL-<category prefix><number>`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CredentialsNotFound { .. } => "NL-K001",
            Self::EdgercNotFound { .. } => "NL-K002",
            Self::EdgercParse { .. } => "NL-K003",
            Self::SectionNotFound { .. } => "NL-K004",
            Self::CredentialFieldMissing { .. } => "NL-K005",
            Self::Config(_) => "NL-C001",
            Self::InvalidInput(_) => "NL-I001",
            Self::ListNotFound(_) => "NL-I002",
            Self::Api { .. } => "NL-A001",
            Self::ParseResponse(_) => "NL-A002",
            Self::Timeout(_) => "NL-N001",
            Self::Network(_) => "NL-N002",
            Self::Io(_) => "NL-X001",
            Self::Json(_) => "NL-X002",
            Self::Other(_) => "NL-X999",
        }
    }

    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line hint on how to get past this error.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::CredentialsNotFound { section } => Some(format!(
                "Create ~/.edgerc with a [{section}] section, pass --config PATH, \
                 or export AKAMAI_HOST, AKAMAI_CLIENT_TOKEN, AKAMAI_CLIENT_SECRET \
                 and AKAMAI_ACCESS_TOKEN"
            )),
            Self::EdgercNotFound { .. } => {
                Some("Check the --config path or unset AKAMAI_EDGERC".to_string())
            }
            Self::SectionNotFound { .. } => {
                Some("Pick an existing section with --section NAME".to_string())
            }
            Self::CredentialFieldMissing { field, .. } => Some(format!(
                "Add '{field} = ...' to the section; API clients list all four values"
            )),
            Self::Api { status: 401, .. } => {
                Some("The credentials were rejected; verify the client secret and tokens".to_string())
            }
            Self::Api { status: 403, .. } => Some(
                "The API client lacks access to Network Lists; check its grants or --ask"
                    .to_string(),
            ),
            Self::Api { status: 404, .. } | Self::ListNotFound(_) => {
                Some("Use `netlist get all` to find the list's unique id".to_string())
            }
            Self::Timeout(_) => Some("Retry, or raise the limit with --timeout SECONDS".to_string()),
            _ => None,
        }
    }
}

/// Result type alias for netlist operations.
pub type Result<T> = std::result::Result<T, NetlistError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_errors() -> Vec<NetlistError> {
        vec![
            NetlistError::CredentialsNotFound {
                section: "default".to_string(),
            },
            NetlistError::EdgercNotFound {
                path: "/tmp/missing".to_string(),
            },
            NetlistError::EdgercParse {
                path: "/tmp/bad".to_string(),
                message: "bad".to_string(),
            },
            NetlistError::SectionNotFound {
                section: "prod".to_string(),
                path: "/tmp/.edgerc".to_string(),
            },
            NetlistError::CredentialFieldMissing {
                section: "default".to_string(),
                field: "host".to_string(),
            },
            NetlistError::Config("bad".to_string()),
            NetlistError::InvalidInput("empty".to_string()),
            NetlistError::ListNotFound("corp-allow".to_string()),
            NetlistError::Api {
                status: 400,
                message: "bad request".to_string(),
                body: "{}".to_string(),
            },
            NetlistError::ParseResponse("eof".to_string()),
            NetlistError::Timeout(30),
            NetlistError::Network("refused".to_string()),
            NetlistError::Io(std::io::Error::other("disk")),
            NetlistError::Other(anyhow::anyhow!("boom")),
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let errors = sample_errors();
        let codes: HashSet<_> = errors.iter().map(NetlistError::error_code).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn error_codes_match_category_prefix() {
        for err in sample_errors() {
            let expected = format!("NL-{}", err.category().code_prefix());
            assert!(
                err.error_code().starts_with(&expected),
                "{} should start with {expected}",
                err.error_code()
            );
        }
    }

    #[test]
    fn credential_errors_exit_with_config_code() {
        let err = NetlistError::CredentialsNotFound {
            section: "default".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::ConfigError);
        assert_eq!(i32::from(err.exit_code()), 2);
    }

    #[test]
    fn api_error_display_keeps_service_message() {
        let err = NetlistError::Api {
            status: 409,
            message: "List is active on PRODUCTION".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "API error (HTTP 409): List is active on PRODUCTION"
        );
        assert_eq!(err.http_status(), Some(409));
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn hints_cover_auth_failures() {
        let err = NetlistError::Api {
            status: 401,
            message: "unauthorized".to_string(),
            body: String::new(),
        };
        assert!(err.hint().unwrap().contains("credentials"));
        assert!(NetlistError::Network("x".to_string()).hint().is_none());
    }
}
