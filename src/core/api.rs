//! Network Lists v2 API client.
//!
//! [`NetworkListApi`] is the seam the command handlers and the sync routine
//! are written against; [`NetworkListClient`] is the HTTP implementation.

use reqwest::Method;

use crate::core::http::{ClientConfig, EdgeGridTransport};
use crate::core::models::{
    ActivationRequest, ActivationStatus, AppendRequest, CreateListRequest, ListTypeFilter,
    Network, NetworkList, NetworkListCollection, NotificationSubscription,
};
use crate::error::Result;

#[cfg(test)]
pub(crate) mod fake;

const LISTS_PATH: &str = "/network-list/v2/network-lists";
const NOTIFICATIONS_PATH: &str = "/network-list/v2/notifications";

/// Verbosity of a list read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOptions {
    pub extended: bool,
    pub include_elements: bool,
}

impl DetailOptions {
    /// Detail needed to diff a list's contents.
    pub const ELEMENTS: Self = Self {
        extended: false,
        include_elements: true,
    };

    fn query(self) -> Vec<(&'static str, String)> {
        vec![
            ("extended", self.extended.to_string()),
            ("includeElements", self.include_elements.to_string()),
        ]
    }
}

/// Query for the collection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub list_type: ListTypeFilter,
    pub search: Option<String>,
    pub detail: DetailOptions,
}

impl ListQuery {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.detail.query();
        if let Some(list_type) = self.list_type.query_value() {
            query.push(("listType", list_type.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        query
    }
}

/// Operations of the Network Lists API used by this tool.
#[allow(async_fn_in_trait)]
pub trait NetworkListApi {
    /// List or search network lists. Results honor `query.list_type`.
    async fn list_network_lists(&self, query: &ListQuery) -> Result<Vec<NetworkList>>;

    /// Fetch one list.
    async fn get_network_list(&self, id: &str, detail: DetailOptions) -> Result<NetworkList>;

    /// Create a list.
    async fn create_network_list(&self, request: &CreateListRequest) -> Result<NetworkList>;

    /// Delete a list.
    async fn delete_network_list(&self, id: &str) -> Result<()>;

    /// Append elements to a list.
    async fn append_elements(&self, id: &str, elements: &[String]) -> Result<NetworkList>;

    /// Remove one element from a list.
    async fn remove_element(&self, id: &str, element: &str) -> Result<()>;

    /// Activate a list on a network.
    async fn activate(
        &self,
        id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<ActivationStatus>;

    /// Activation status of a list on a network.
    async fn activation_status(&self, id: &str, network: Network) -> Result<ActivationStatus>;

    /// Subscribe recipients to change notifications.
    async fn subscribe(&self, subscription: &NotificationSubscription) -> Result<()>;

    /// Unsubscribe recipients from change notifications.
    async fn unsubscribe(&self, subscription: &NotificationSubscription) -> Result<()>;
}

/// Keep only lists whose type passes the filter.
#[must_use]
pub fn filter_by_type(lists: Vec<NetworkList>, filter: ListTypeFilter) -> Vec<NetworkList> {
    lists
        .into_iter()
        .filter(|list| filter.matches(list.list_type))
        .collect()
}

/// HTTP implementation of [`NetworkListApi`].
#[derive(Debug, Clone)]
pub struct NetworkListClient {
    transport: EdgeGridTransport,
}

impl NetworkListClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    ///
    /// Fails if the transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: EdgeGridTransport::new(config)?,
        })
    }

    fn list_path(id: &str) -> String {
        format!("{LISTS_PATH}/{id}")
    }
}

impl NetworkListApi for NetworkListClient {
    async fn list_network_lists(&self, query: &ListQuery) -> Result<Vec<NetworkList>> {
        let url = self.transport.url(LISTS_PATH, &query.query())?;
        let collection: NetworkListCollection = self
            .transport
            .request_json(Method::GET, url, None::<&()>)
            .await?;

        tracing::debug!(count = collection.network_lists.len(), "Fetched network lists");
        Ok(filter_by_type(collection.network_lists, query.list_type))
    }

    async fn get_network_list(&self, id: &str, detail: DetailOptions) -> Result<NetworkList> {
        let url = self.transport.url(&Self::list_path(id), &detail.query())?;
        self.transport
            .request_json(Method::GET, url, None::<&()>)
            .await
    }

    async fn create_network_list(&self, request: &CreateListRequest) -> Result<NetworkList> {
        let url = self.transport.url(LISTS_PATH, &[])?;
        tracing::info!(name = %request.name, list_type = %request.list_type, "Creating network list");
        self.transport
            .request_json(Method::POST, url, Some(request))
            .await
    }

    async fn delete_network_list(&self, id: &str) -> Result<()> {
        let url = self.transport.url(&Self::list_path(id), &[])?;
        tracing::info!(id, "Deleting network list");
        self.transport
            .execute(Method::DELETE, url, None::<&()>)
            .await
            .map(drop)
    }

    async fn append_elements(&self, id: &str, elements: &[String]) -> Result<NetworkList> {
        let url = self
            .transport
            .url(&format!("{}/append", Self::list_path(id)), &[])?;
        let body = AppendRequest {
            list: elements.to_vec(),
        };
        tracing::info!(id, count = elements.len(), "Appending elements");
        self.transport
            .request_json(Method::POST, url, Some(&body))
            .await
    }

    async fn remove_element(&self, id: &str, element: &str) -> Result<()> {
        let url = self.transport.url(
            &format!("{}/elements", Self::list_path(id)),
            &[("element", element.to_string())],
        )?;
        tracing::info!(id, element, "Removing element");
        self.transport
            .execute(Method::DELETE, url, None::<&()>)
            .await
            .map(drop)
    }

    async fn activate(
        &self,
        id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<ActivationStatus> {
        let url = self.transport.url(
            &format!("{}/environments/{network}/activate", Self::list_path(id)),
            &[],
        )?;
        tracing::info!(id, %network, "Activating network list");
        self.transport
            .request_json(Method::POST, url, Some(request))
            .await
    }

    async fn activation_status(&self, id: &str, network: Network) -> Result<ActivationStatus> {
        let url = self.transport.url(
            &format!("{}/environments/{network}/status", Self::list_path(id)),
            &[],
        )?;
        self.transport
            .request_json(Method::GET, url, None::<&()>)
            .await
    }

    async fn subscribe(&self, subscription: &NotificationSubscription) -> Result<()> {
        let url = self
            .transport
            .url(&format!("{NOTIFICATIONS_PATH}/subscribe"), &[])?;
        self.transport
            .execute(Method::POST, url, Some(subscription))
            .await
            .map(drop)
    }

    async fn unsubscribe(&self, subscription: &NotificationSubscription) -> Result<()> {
        let url = self
            .transport
            .url(&format!("{NOTIFICATIONS_PATH}/unsubscribe"), &[])?;
        self.transport
            .execute(Method::POST, url, Some(subscription))
            .await
            .map(drop)
    }
}
