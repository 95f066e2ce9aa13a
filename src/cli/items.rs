//! `items` command implementation.

use crate::cli::args::{ItemsAddArgs, ItemsCommand, ItemsRemoveArgs};
use crate::core::api::NetworkListApi;
use crate::core::sync::{ElementSet, read_elements_file};
use crate::error::{NetlistError, Result};
use crate::render::{self, ActionOutcome, RenderOptions};

/// Execute an `items` subcommand.
///
/// # Errors
///
/// Fails on an empty element set, an unreadable file, or an API error.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    command: &ItemsCommand,
    options: RenderOptions,
) -> Result<String> {
    match command {
        ItemsCommand::Add(args) => add(api, args, options).await,
        ItemsCommand::Remove(args) => remove(api, args, options).await,
    }
}

/// Elements from `--items` and `--from-file`, deduplicated.
fn collect_items(args: &ItemsAddArgs) -> Result<Vec<String>> {
    let mut elements: ElementSet = args
        .items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(path) = &args.from_file {
        elements.extend(read_elements_file(path)?);
    }

    if elements.is_empty() {
        return Err(NetlistError::InvalidInput(
            "no elements to add; pass --items or a non-empty --from-file".to_string(),
        ));
    }
    Ok(elements.into_iter().collect())
}

async fn add<A: NetworkListApi>(
    api: &A,
    args: &ItemsAddArgs,
    options: RenderOptions,
) -> Result<String> {
    let elements = collect_items(args)?;
    let list = api.append_elements(&args.id, &elements).await?;
    render::render_list(&list, options)
}

async fn remove<A: NetworkListApi>(
    api: &A,
    args: &ItemsRemoveArgs,
    options: RenderOptions,
) -> Result<String> {
    api.remove_element(&args.id, &args.element).await?;
    let outcome = ActionOutcome::new(
        "remove-element",
        vec![args.id.clone()],
        format!("Removed {} from {}", args.element, args.id),
    );
    render::render_action(&outcome, options)
}
