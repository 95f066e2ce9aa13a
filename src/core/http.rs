//! Signed HTTP transport.
//!
//! Every request carries an EdgeGrid `Authorization` header and, when
//! configured, the `accountSwitchKey` query parameter.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::ServiceProblem;
use crate::edgegrid::{Credentials, Signer};
use crate::error::{NetlistError, Result};

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameter carrying the account switch key.
pub const ACCOUNT_SWITCH_KEY_PARAM: &str = "accountSwitchKey";

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("netlist/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| setup_failed("build HTTP client", e))
}

/// A local setup failure that fits no other category.
fn setup_failed(step: &str, err: impl std::fmt::Display) -> NetlistError {
    NetlistError::Other(anyhow::anyhow!("{step} failed: {err}"))
}

/// Everything needed to talk to the API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub timeout: Duration,
    pub account_switch_key: Option<String>,
    /// Log request and response bodies at debug level.
    pub request_debug: bool,
}

impl ClientConfig {
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: DEFAULT_TIMEOUT,
            account_switch_key: None,
            request_debug: false,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_account_switch_key(mut self, key: Option<String>) -> Self {
        self.account_switch_key = key;
        self
    }

    #[must_use]
    pub const fn with_request_debug(mut self, enabled: bool) -> Self {
        self.request_debug = enabled;
        self
    }
}

/// HTTP client that signs every request.
#[derive(Debug, Clone)]
pub struct EdgeGridTransport {
    client: Client,
    base_url: Url,
    signer: Signer,
    account_switch_key: Option<String>,
    timeout: Duration,
    request_debug: bool,
}

impl EdgeGridTransport {
    /// Build a transport from a client configuration.
    ///
    /// # Errors
    ///
    /// Fails if the credential host is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = config.credentials.base_url();
        let base_url = Url::parse(&base)
            .map_err(|e| NetlistError::Config(format!("invalid API host '{base}': {e}")))?;

        Ok(Self {
            client: build_client(config.timeout)?,
            base_url,
            signer: Signer::new(config.credentials),
            account_switch_key: config.account_switch_key,
            timeout: config.timeout,
            request_debug: config.request_debug,
        })
    }

    /// Absolute URL for an API path with query parameters.
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be joined onto the base URL.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| NetlistError::Config(format!("invalid API path '{path}': {e}")))?;

        if !query.is_empty() || self.account_switch_key.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(key) = &self.account_switch_key {
                pairs.append_pair(ACCOUNT_SWITCH_KEY_PARAM, key);
            }
        }

        Ok(url)
    }

    /// Send a request and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status, or an
    /// undecodable body.
    pub async fn request_json<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let text = self.execute(method, url, body).await?;
        serde_json::from_str(&text).map_err(|e| NetlistError::ParseResponse(e.to_string()))
    }

    /// Send a request and return the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    pub async fn execute<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let payload = body.map(serde_json::to_vec).transpose()?.unwrap_or_default();
        let authorization = self.signer.authorization(&method, &url, &payload);

        tracing::debug!(%method, %url, "Sending request");
        if self.request_debug && !payload.is_empty() {
            tracing::debug!(body = %String::from_utf8_lossy(&payload), "Request body");
        }

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");
        if body.is_some() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(&e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        tracing::debug!(%method, %url, status = status.as_u16(), "Received response");
        if self.request_debug {
            tracing::debug!(body = %text, "Response body");
        }

        if status.is_success() {
            Ok(text)
        } else {
            Err(api_error(status.as_u16(), text))
        }
    }

    fn map_send_error(&self, e: &reqwest::Error) -> NetlistError {
        if e.is_timeout() {
            NetlistError::Timeout(self.timeout.as_secs())
        } else {
            NetlistError::Network(e.to_string())
        }
    }
}

/// Turn a failed response into an error carrying the service's message.
fn api_error(status: u16, body: String) -> NetlistError {
    let message = serde_json::from_str::<ServiceProblem>(&body)
        .ok()
        .and_then(|problem| problem.message().map(str::to_string))
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {status} with empty body")
            } else {
                trimmed.to_string()
            }
        });

    NetlistError::Api {
        status,
        message,
        body,
    }
}
