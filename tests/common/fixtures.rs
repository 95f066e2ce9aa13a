//! Test fixtures and factory functions for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use wiremock::MockServer;

use netlist::core::api::NetworkListClient;
use netlist::core::http::ClientConfig;
use netlist::edgegrid::{Credentials, DEFAULT_MAX_BODY};

pub const CLIENT_TOKEN: &str = "akab-client-token-xxx-xxxxxxxxxxxxxxxx";
pub const CLIENT_SECRET: &str = "SOMESECRET+c2VjcmV0/value=";
pub const ACCESS_TOKEN: &str = "akab-access-token-xxx-xxxxxxxxxxxxxxxx";

/// Credentials pointing at `host` (a bare host or a full base URL).
pub fn credentials(host: &str) -> Credentials {
    Credentials {
        host: host.to_string(),
        client_token: CLIENT_TOKEN.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        access_token: ACCESS_TOKEN.to_string(),
        max_body: DEFAULT_MAX_BODY,
    }
}

/// Client aimed at a mock server.
pub fn client(server: &MockServer) -> NetworkListClient {
    client_with(ClientConfig::new(credentials(&server.uri())))
}

/// Client aimed at a mock server with an account switch key.
pub fn client_with_key(server: &MockServer, key: &str) -> NetworkListClient {
    client_with(
        ClientConfig::new(credentials(&server.uri()))
            .with_account_switch_key(Some(key.to_string())),
    )
}

pub fn client_with(config: ClientConfig) -> NetworkListClient {
    NetworkListClient::new(config).expect("client build")
}

/// Write an `.edgerc` with `[default]` aimed at `host` and an incomplete
/// `[broken]` section.
pub fn write_edgerc(dir: &Path, host: &str) -> PathBuf {
    let path = dir.join(".edgerc");
    let content = format!(
        "[default]\n\
         client_secret = {CLIENT_SECRET}\n\
         host = {host}\n\
         access_token = {ACCESS_TOKEN}\n\
         client_token = {CLIENT_TOKEN}\n\
         \n\
         [broken]\n\
         host = {host}\n\
         client_token = {CLIENT_TOKEN}\n"
    );
    fs::write(&path, content).expect("write edgerc");
    path
}

/// A list as the service returns it.
pub fn list_json(id: &str, name: &str, list_type: &str, elements: &[&str]) -> Value {
    json!({
        "uniqueId": id,
        "name": name,
        "type": list_type,
        "description": format!("{name} list"),
        "elementCount": elements.len(),
        "list": elements,
        "syncPoint": 3,
        "readOnly": false,
        "shared": false,
        "links": { "activateInProduction": { "href": format!("/network-list/v2/network-lists/{id}/environments/PRODUCTION/activate") } },
    })
}

/// The collection envelope.
pub fn collection_json(lists: Vec<Value>) -> Value {
    json!({
        "networkLists": lists,
        "links": { "create": { "href": "/network-list/v2/network-lists/", "method": "POST" } },
    })
}

/// An activation record.
pub fn activation_json(id: &str, status: &str) -> Value {
    json!({
        "activationId": 12_345,
        "activationComments": "activated via akamai-cli",
        "activationStatus": status,
        "syncPoint": 3,
        "uniqueId": id,
        "networkListId": id,
        "fast": false,
        "dispatchCount": 1,
    })
}
