//! API client credentials.
//!
//! Sources, in order of use:
//! - an explicit `.edgerc` path (`--config`), read strictly;
//! - otherwise `AKAMAI_[SECTION_]HOST`, `..._CLIENT_TOKEN`, `..._CLIENT_SECRET`
//!   and `..._ACCESS_TOKEN` environment variables;
//! - otherwise the `.edgerc` in the home directory.

use std::fmt;
use std::path::Path;

use config::{Config, FileFormat, Map, Value};

use crate::error::{NetlistError, Result};

/// Section used when none is given.
pub const DEFAULT_SECTION: &str = "default";

/// Largest request body the signer hashes, in bytes.
pub const DEFAULT_MAX_BODY: usize = 131_072;

const FIELD_HOST: &str = "host";
const FIELD_CLIENT_TOKEN: &str = "client_token";
const FIELD_CLIENT_SECRET: &str = "client_secret";
const FIELD_ACCESS_TOKEN: &str = "access_token";
const FIELD_MAX_BODY: &str = "max-body";

/// EdgeGrid API client credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
    pub max_body: usize,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("client_token", &self.client_token)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("max_body", &self.max_body)
            .finish()
    }
}

impl Credentials {
    /// Read a section of an `.edgerc` file.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or unparsable, the section is absent,
    /// or a required field is empty.
    pub fn from_file(path: &Path, section: &str) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.is_file() {
            return Err(NetlistError::EdgercNotFound { path: shown });
        }

        tracing::debug!(path = %shown, section, "Reading edgerc");
        let parsed = Config::builder()
            .add_source(config::File::new(&path.to_string_lossy(), FileFormat::Ini))
            .build()
            .map_err(|e| NetlistError::EdgercParse {
                path: shown.clone(),
                message: e.to_string(),
            })?;

        let table = parsed
            .get_table(section)
            .map_err(|_| NetlistError::SectionNotFound {
                section: section.to_string(),
                path: shown,
            })?;

        Self::from_table(&table, section)
    }

    fn from_table(table: &Map<String, Value>, section: &str) -> Result<Self> {
        let field = |name: &str| -> Result<String> {
            table
                .get(name)
                .and_then(|value| value.clone().into_string().ok())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| NetlistError::CredentialFieldMissing {
                    section: section.to_string(),
                    field: name.to_string(),
                })
        };

        let max_body = table
            .get(FIELD_MAX_BODY)
            .or_else(|| table.get("max_body"))
            .and_then(|value| value.clone().into_string().ok())
            .map(|raw| parse_max_body(&raw, section))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_BODY);

        Ok(Self {
            host: field(FIELD_HOST)?,
            client_token: field(FIELD_CLIENT_TOKEN)?,
            client_secret: field(FIELD_CLIENT_SECRET)?,
            access_token: field(FIELD_ACCESS_TOKEN)?,
            max_body,
        })
    }

    /// Read credentials from process environment variables.
    #[must_use]
    pub fn from_env(section: &str) -> Option<Self> {
        Self::from_env_with(section, |key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// All four required variables must be present; `MAX_BODY` is optional.
    pub fn from_env_with(section: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let prefix = env_prefix(section);
        let get = |suffix: &str| {
            lookup(&format!("{prefix}{suffix}"))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let credentials = Self {
            host: get("HOST")?,
            client_token: get("CLIENT_TOKEN")?,
            client_secret: get("CLIENT_SECRET")?,
            access_token: get("ACCESS_TOKEN")?,
            max_body: get("MAX_BODY")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY),
        };
        tracing::debug!(%prefix, "Loaded credentials from environment");
        Some(credentials)
    }

    /// Base URL of the API host.
    ///
    /// `.edgerc` hosts are bare hostnames; a value that already carries a
    /// scheme is used as-is.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("https://") || host.starts_with("http://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }
}

fn parse_max_body(raw: &str, section: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| NetlistError::EdgercParse {
        path: format!("[{section}]"),
        message: format!("max-body must be a positive integer, got '{raw}'"),
    })
}

/// Prefix of the environment variables for a section.
///
/// `default` maps to `AKAMAI_`, any other section to `AKAMAI_<SECTION>_`.
#[must_use]
pub fn env_prefix(section: &str) -> String {
    if section.eq_ignore_ascii_case(DEFAULT_SECTION) {
        "AKAMAI_".to_string()
    } else {
        format!("AKAMAI_{}_", section.to_uppercase().replace(['-', '.'], "_"))
    }
}

/// Resolve credentials for a run.
///
/// An explicit path bypasses auto-discovery and reports its own failures.
/// Without one, the environment is tried first, then `default_edgerc`.
///
/// # Errors
///
/// Returns [`NetlistError::CredentialsNotFound`] when auto-discovery yields
/// nothing, or the file error for an explicit path.
pub fn resolve(
    explicit: Option<&Path>,
    section: &str,
    default_edgerc: Option<&Path>,
) -> Result<Credentials> {
    resolve_with(explicit, section, default_edgerc, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_with(
    explicit: Option<&Path>,
    section: &str,
    default_edgerc: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Credentials> {
    if let Some(path) = explicit {
        return Credentials::from_file(path, section);
    }

    if let Some(credentials) = Credentials::from_env_with(section, lookup) {
        return Ok(credentials);
    }

    default_edgerc
        .and_then(|path| match Credentials::from_file(path, section) {
            Ok(credentials) => Some(credentials),
            Err(e) => {
                tracing::debug!(error = %e, "Default edgerc unusable");
                None
            }
        })
        .ok_or_else(|| NetlistError::CredentialsNotFound {
            section: section.to_string(),
        })
}
