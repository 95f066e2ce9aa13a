//! Core data models, API client and list synchronization.

pub mod api;
pub mod http;
pub mod logging;
pub mod models;
pub mod sync;

pub use api::{DetailOptions, ListQuery, NetworkListApi, NetworkListClient};
pub use models::{ListType, ListTypeFilter, Network, NetworkList};
pub use sync::{SyncPlan, SyncReport};
