//! `activate` command implementation.

use crate::cli::args::ActivateCommand;
use crate::core::api::NetworkListApi;
use crate::core::models::ActivationRequest;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Activate a list or show its activation status.
///
/// # Errors
///
/// Propagates API errors.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    command: &ActivateCommand,
    options: RenderOptions,
) -> Result<String> {
    match command {
        ActivateCommand::List(args) => {
            let network = args.network();
            let request = ActivationRequest {
                comments: args.comments.clone(),
                notification_recipients: args.notification_recipients.clone(),
                fast: args.fast,
            };
            let status = api.activate(&args.id, network, &request).await?;
            render::render_activation(&status, network, options)
        }
        ActivateCommand::Status(args) => {
            let network = args.network();
            let status = api.activation_status(&args.id, network).await?;
            render::render_activation(&status, network, options)
        }
    }
}
