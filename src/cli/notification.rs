//! `notification` command implementation.

use crate::cli::args::NotificationArgs;
use crate::core::api::NetworkListApi;
use crate::core::models::NotificationSubscription;
use crate::error::Result;
use crate::render::{self, ActionOutcome, RenderOptions};

/// Subscribe or unsubscribe recipients to list change notifications.
///
/// # Errors
///
/// Propagates API errors.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    args: &NotificationArgs,
    options: RenderOptions,
) -> Result<String> {
    let subscription = NotificationSubscription {
        recipients: args.notification_recipients.clone(),
        unique_ids: args.network_list_ids.clone(),
    };

    let (action, verb) = if args.unsubscribe {
        api.unsubscribe(&subscription).await?;
        ("unsubscribe", "Unsubscribed")
    } else {
        api.subscribe(&subscription).await?;
        ("subscribe", "Subscribed")
    };

    let outcome = ActionOutcome::new(
        action,
        subscription.unique_ids.clone(),
        format!(
            "{verb} {} for {}",
            subscription.recipients.join(", "),
            subscription.unique_ids.join(", ")
        ),
    );
    render::render_action(&outcome, options)
}
