//! `search` command implementation.

use crate::cli::args::SearchArgs;
use crate::core::api::{DetailOptions, ListQuery, NetworkListApi};
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Search lists by name or element.
///
/// # Errors
///
/// Propagates API errors.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    args: &SearchArgs,
    options: RenderOptions,
) -> Result<String> {
    let query = ListQuery {
        list_type: args.list_type,
        search: Some(args.search_pattern.clone()),
        detail: DetailOptions {
            extended: args.extended,
            include_elements: false,
        },
    };

    let lists = api.list_network_lists(&query).await?;
    tracing::debug!(pattern = %args.search_pattern, count = lists.len(), "Search complete");
    render::render_lists(&lists, options)
}
