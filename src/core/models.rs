//! Wire types for the Network Lists v2 API.
//!
//! Field names follow the service's camelCase JSON. Everything beyond the
//! identifying fields is optional because `extended` and `includeElements`
//! change which fields the service sends.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Type of a network list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListType {
    /// IPv4/IPv6 addresses and CIDR blocks.
    #[value(name = "IP")]
    Ip,
    /// ISO country or region codes.
    #[value(name = "GEO")]
    Geo,
}

impl ListType {
    /// Wire name (`IP` or `GEO`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Geo => "GEO",
        }
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List type filter accepted by the read commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListTypeFilter {
    /// Both IP and GEO lists.
    #[default]
    #[value(name = "ANY")]
    Any,
    #[value(name = "IP")]
    Ip,
    #[value(name = "GEO")]
    Geo,
}

impl ListTypeFilter {
    /// Value of the `listType` query parameter, `None` for `ANY`.
    #[must_use]
    pub const fn query_value(self) -> Option<ListType> {
        match self {
            Self::Any => None,
            Self::Ip => Some(ListType::Ip),
            Self::Geo => Some(ListType::Geo),
        }
    }

    /// Whether a list of the given type passes the filter.
    #[must_use]
    pub fn matches(self, list_type: ListType) -> bool {
        self.query_value().is_none_or(|wanted| wanted == list_type)
    }
}

impl From<ListType> for ListTypeFilter {
    fn from(list_type: ListType) -> Self {
        match list_type {
            ListType::Ip => Self::Ip,
            ListType::Geo => Self::Geo,
        }
    }
}

/// Activation target network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Staging,
    Production,
}

impl Network {
    /// `--prd` selects production, staging otherwise.
    #[must_use]
    pub const fn from_prd_flag(prd: bool) -> Self {
        if prd { Self::Production } else { Self::Staging }
    }

    /// Path segment used by the environments endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staging => "STAGING",
            Self::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A network list as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkList {
    pub unique_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub list_type: ListType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<u64>,
    /// Elements; only sent with `includeElements=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_point: Option<u64>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub shared: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_activation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_activation_status: Option<String>,
}

impl NetworkList {
    /// Element count, falling back to the element array when present.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.element_count.unwrap_or_else(|| {
            self.list
                .as_ref()
                .map_or(0, |elements| elements.len() as u64)
        })
    }

    /// Elements, empty when the service did not send them.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        self.list.as_deref().unwrap_or_default()
    }
}

/// Envelope of the collection endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkListCollection {
    #[serde(default)]
    pub network_lists: Vec<NetworkList>,
}

/// Body of `POST /network-lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub list_type: ListType,
    pub description: String,
    pub list: Vec<String>,
}

/// Body of `POST /network-lists/{id}/append`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendRequest {
    pub list: Vec<String>,
}

/// Body of the activate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    pub comments: String,
    pub notification_recipients: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fast: bool,
}

/// Activation record returned by the activate and status endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_id: Option<u64>,
    pub activation_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_point: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_comments: Option<String>,
}

/// Body of the notification subscribe/unsubscribe endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSubscription {
    pub recipients: Vec<String>,
    pub unique_ids: Vec<String>,
}

/// RFC 7807 problem document the service uses for errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ServiceProblem {
    /// Best human message: `detail`, then `title`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.title.as_deref())
            .filter(|message| !message.trim().is_empty())
    }
}
