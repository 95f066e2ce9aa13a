//! `delete` command implementation.

use crate::cli::args::DeleteArgs;
use crate::core::api::NetworkListApi;
use crate::error::Result;
use crate::render::{self, ActionOutcome, RenderOptions};

/// Delete a list. The service refuses lists still active on either network.
///
/// # Errors
///
/// Propagates API errors.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    args: &DeleteArgs,
    options: RenderOptions,
) -> Result<String> {
    api.delete_network_list(&args.id).await?;
    let outcome = ActionOutcome::new(
        "delete",
        vec![args.id.clone()],
        format!("Deleted network list {}", args.id),
    );
    render::render_action(&outcome, options)
}
