//! In-memory [`NetworkListApi`] that records every call.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{DetailOptions, ListQuery, NetworkListApi, filter_by_type};
use crate::core::models::{
    ActivationRequest, ActivationStatus, CreateListRequest, ListType, Network, NetworkList,
    NotificationSubscription,
};
use crate::error::{NetlistError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ListQuery),
    Get(String),
    Create(CreateListRequest),
    Delete(String),
    Append(String, Vec<String>),
    Remove(String, String),
    Activate(String, Network, ActivationRequest),
    Status(String, Network),
    Subscribe(NotificationSubscription),
    Unsubscribe(NotificationSubscription),
}

impl Call {
    const fn is_write(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Get(_) | Self::Status(..))
    }
}

fn make_list(id: &str, name: &str, list_type: ListType, elements: Vec<String>) -> NetworkList {
    NetworkList {
        unique_id: id.to_string(),
        name: name.to_string(),
        list_type,
        description: None,
        element_count: None,
        list: Some(elements),
        sync_point: Some(0),
        read_only: false,
        shared: false,
        create_date: None,
        created_by: None,
        update_date: None,
        updated_by: None,
        staging_activation_status: None,
        production_activation_status: None,
    }
}

#[derive(Default)]
pub struct FakeApi {
    lists: RefCell<BTreeMap<String, NetworkList>>,
    calls: RefCell<Vec<Call>>,
    pub fail_removal: bool,
}

impl FakeApi {
    pub fn with_list(self, id: &str, list_type: ListType, elements: &[&str]) -> Self {
        self.with_named_list(id, id, list_type, elements)
    }

    pub fn with_named_list(
        self,
        id: &str,
        name: &str,
        list_type: ListType,
        elements: &[&str],
    ) -> Self {
        let elements = elements.iter().map(|e| (*e).to_string()).collect();
        self.lists
            .borrow_mut()
            .insert(id.to_string(), make_list(id, name, list_type, elements));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.is_write())
            .cloned()
            .collect()
    }

    pub fn elements(&self, id: &str) -> Vec<String> {
        self.lists
            .borrow()
            .get(id)
            .map(|list| list.elements().to_vec())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn view(list: &NetworkList, detail: DetailOptions) -> NetworkList {
        let mut view = list.clone();
        view.element_count = Some(list.count());
        if !detail.include_elements {
            view.list = None;
        }
        view
    }

    fn not_found(id: &str) -> NetlistError {
        NetlistError::Api {
            status: 404,
            message: format!("Network list {id} not found"),
            body: String::new(),
        }
    }
}

impl NetworkListApi for FakeApi {
    async fn list_network_lists(&self, query: &ListQuery) -> Result<Vec<NetworkList>> {
        self.record(Call::List(query.clone()));
        let lists = self
            .lists
            .borrow()
            .values()
            .filter(|list| {
                query.search.as_deref().is_none_or(|needle| {
                    list.name.contains(needle) || list.elements().iter().any(|e| e == needle)
                })
            })
            .map(|list| Self::view(list, query.detail))
            .collect();
        Ok(filter_by_type(lists, query.list_type))
    }

    async fn get_network_list(&self, id: &str, detail: DetailOptions) -> Result<NetworkList> {
        self.record(Call::Get(id.to_string()));
        self.lists
            .borrow()
            .get(id)
            .map(|list| Self::view(list, detail))
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_network_list(&self, request: &CreateListRequest) -> Result<NetworkList> {
        self.record(Call::Create(request.clone()));
        let id = format!("{}_{}", self.lists.borrow().len() + 1, request.name.to_uppercase());
        let mut list = make_list(&id, &request.name, request.list_type, request.list.clone());
        list.description = Some(request.description.clone());
        self.lists.borrow_mut().insert(id, list.clone());
        Ok(Self::view(&list, DetailOptions::default()))
    }

    async fn delete_network_list(&self, id: &str) -> Result<()> {
        self.record(Call::Delete(id.to_string()));
        self.lists
            .borrow_mut()
            .remove(id)
            .map(drop)
            .ok_or_else(|| Self::not_found(id))
    }

    async fn append_elements(&self, id: &str, elements: &[String]) -> Result<NetworkList> {
        self.record(Call::Append(id.to_string(), elements.to_vec()));
        let mut lists = self.lists.borrow_mut();
        let list = lists.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        let current = list.list.get_or_insert_with(Vec::new);
        for element in elements {
            if !current.contains(element) {
                current.push(element.clone());
            }
        }
        Ok(Self::view(list, DetailOptions::default()))
    }

    async fn remove_element(&self, id: &str, element: &str) -> Result<()> {
        self.record(Call::Remove(id.to_string(), element.to_string()));
        if self.fail_removal {
            return Err(NetlistError::Api {
                status: 409,
                message: "conflict".to_string(),
                body: String::new(),
            });
        }
        let mut lists = self.lists.borrow_mut();
        let list = lists.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        if let Some(current) = list.list.as_mut() {
            current.retain(|e| e != element);
        }
        Ok(())
    }

    async fn activate(
        &self,
        id: &str,
        network: Network,
        request: &ActivationRequest,
    ) -> Result<ActivationStatus> {
        self.record(Call::Activate(id.to_string(), network, request.clone()));
        Ok(ActivationStatus {
            activation_id: Some(1),
            activation_status: "PENDING_ACTIVATION".to_string(),
            network_list_id: Some(id.to_string()),
            sync_point: Some(0),
            dispatch_count: None,
            fast: Some(request.fast),
            activation_comments: Some(request.comments.clone()),
        })
    }

    async fn activation_status(&self, id: &str, network: Network) -> Result<ActivationStatus> {
        self.record(Call::Status(id.to_string(), network));
        if !self.lists.borrow().contains_key(id) {
            return Err(Self::not_found(id));
        }
        Ok(ActivationStatus {
            activation_id: None,
            activation_status: "INACTIVE".to_string(),
            network_list_id: Some(id.to_string()),
            sync_point: None,
            dispatch_count: None,
            fast: None,
            activation_comments: None,
        })
    }

    async fn subscribe(&self, subscription: &NotificationSubscription) -> Result<()> {
        self.record(Call::Subscribe(subscription.clone()));
        Ok(())
    }

    async fn unsubscribe(&self, subscription: &NotificationSubscription) -> Result<()> {
        self.record(Call::Unsubscribe(subscription.clone()));
        Ok(())
    }
}
