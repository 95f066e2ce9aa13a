//! `create` command implementation.

use crate::cli::args::CreateArgs;
use crate::core::api::NetworkListApi;
use crate::core::models::CreateListRequest;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Create an empty list.
///
/// # Errors
///
/// Propagates API errors.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    args: &CreateArgs,
    options: RenderOptions,
) -> Result<String> {
    let request = CreateListRequest {
        name: args.name.clone(),
        list_type: args.list_type,
        description: args.description.clone(),
        list: Vec::new(),
    };
    let list = api.create_network_list(&request).await?;
    tracing::info!(id = %list.unique_id, "Created network list");
    render::render_list(&list, options)
}
