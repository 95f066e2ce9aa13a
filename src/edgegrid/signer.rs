//! `EG1-HMAC-SHA256` request signing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::{Method, Url};
use sha2::{Digest, Sha256};

use super::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Signing algorithm name carried in the `Authorization` header.
pub const ALGORITHM: &str = "EG1-HMAC-SHA256";

/// Signs requests with a set of API client credentials.
#[derive(Debug, Clone)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// `Authorization` header value for a request, using the current time and
    /// a fresh nonce.
    #[must_use]
    pub fn authorization(&self, method: &Method, url: &Url, body: &[u8]) -> String {
        let timestamp = edgegrid_timestamp(Utc::now());
        let nonce = uuid::Uuid::new_v4().to_string();
        self.authorization_with(method, url, body, &timestamp, &nonce)
    }

    /// Deterministic signing with a caller-supplied timestamp and nonce.
    #[must_use]
    pub fn authorization_with(
        &self,
        method: &Method,
        url: &Url,
        body: &[u8],
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let auth_data = format!(
            "{ALGORITHM} client_token={};access_token={};timestamp={timestamp};nonce={nonce};",
            self.credentials.client_token, self.credentials.access_token,
        );

        let signing_key = hmac_base64(
            self.credentials.client_secret.as_bytes(),
            timestamp.as_bytes(),
        );
        let data_to_sign = self.data_to_sign(method, url, body, &auth_data);
        let signature = hmac_base64(signing_key.as_bytes(), data_to_sign.as_bytes());

        format!("{auth_data}signature={signature}")
    }

    fn data_to_sign(&self, method: &Method, url: &Url, body: &[u8], auth_data: &str) -> String {
        let host = url.host_str().unwrap_or_default();
        let path_and_query = match url.query() {
            Some(query) => format!("{}?{query}", url.path()),
            None => url.path().to_string(),
        };
        let hash = content_hash(method, body, self.credentials.max_body);

        [
            method.as_str(),
            url.scheme(),
            host,
            path_and_query.as_str(),
            // no headers are signed
            "",
            hash.as_str(),
            auth_data,
        ]
        .join("\t")
    }
}

/// Timestamp in the `yyyyMMddTHH:mm:ss+0000` form the service expects.
#[must_use]
pub fn edgegrid_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H:%M:%S+0000").to_string()
}

/// Base64 SHA-256 of the body, truncated to `max_body`. Only POST bodies are
/// hashed.
#[must_use]
pub fn content_hash(method: &Method, body: &[u8], max_body: usize) -> String {
    if *method != Method::POST || body.is_empty() {
        return String::new();
    }
    let hashed = &body[..body.len().min(max_body)];
    STANDARD.encode(Sha256::digest(hashed))
}

fn hmac_base64(key: &[u8], data: &[u8]) -> String {
    // Keys longer than the block size are hashed, shorter ones padded.
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    STANDARD.encode(mac.finalize().into_bytes())
}
