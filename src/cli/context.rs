//! Per-invocation client construction.

use crate::core::api::NetworkListClient;
use crate::core::http::ClientConfig;
use crate::core::logging::LogLevel;
use crate::edgegrid::credentials;
use crate::error::Result;
use crate::storage::ResolvedConfig;

/// Resolve credentials and build the API client.
///
/// Runs before any command touches the network, so missing credentials fail
/// the invocation without a request being sent.
///
/// # Errors
///
/// Returns the credential resolution error, or a configuration error if the
/// credential host is unusable.
pub fn build_client(config: &ResolvedConfig, level: LogLevel) -> Result<NetworkListClient> {
    let credentials = credentials::resolve(
        config.edgerc.as_deref(),
        &config.section,
        config.default_edgerc.as_deref(),
    )?;

    tracing::debug!(
        section = %config.section,
        host = %credentials.host,
        account_switch_key = config.account_switch_key.is_some(),
        "Resolved credentials"
    );

    NetworkListClient::new(
        ClientConfig::new(credentials)
            .with_timeout(config.timeout)
            .with_account_switch_key(config.account_switch_key.clone())
            .with_request_debug(level.dumps_requests()),
    )
}
