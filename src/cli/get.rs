//! `get` command implementation.

use crate::cli::args::{DetailArgs, GetAllArgs, GetByIdArgs, GetByNameArgs, GetCommand};
use crate::core::api::{DetailOptions, ListQuery, NetworkListApi};
use crate::core::models::NetworkList;
use crate::error::{NetlistError, Result};
use crate::render::{self, RenderOptions};

impl From<DetailArgs> for DetailOptions {
    fn from(args: DetailArgs) -> Self {
        Self {
            extended: args.extended,
            include_elements: args.include_elements,
        }
    }
}

/// Execute a `get` subcommand and return its rendered output.
///
/// # Errors
///
/// Propagates API errors; `by-name` also fails when no list has that exact name.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    command: &GetCommand,
    options: RenderOptions,
) -> Result<String> {
    match command {
        GetCommand::All(args) => {
            let lists = get_all(api, args).await?;
            render::render_lists(&lists, options)
        }
        GetCommand::ById(args) => {
            let list = get_by_id(api, args).await?;
            render::render_list(&list, options)
        }
        GetCommand::ByName(args) => {
            let lists = get_by_name(api, args).await?;
            if let [list] = lists.as_slice() {
                render::render_list(list, options)
            } else {
                render::render_lists(&lists, options)
            }
        }
    }
}

async fn get_all<A: NetworkListApi>(api: &A, args: &GetAllArgs) -> Result<Vec<NetworkList>> {
    let query = ListQuery {
        list_type: args.list_type,
        search: None,
        detail: args.detail.into(),
    };
    api.list_network_lists(&query).await
}

async fn get_by_id<A: NetworkListApi>(api: &A, args: &GetByIdArgs) -> Result<NetworkList> {
    api.get_network_list(&args.id, args.detail.into()).await
}

/// Search by name and keep exact matches only; the service search also
/// matches substrings and elements.
async fn get_by_name<A: NetworkListApi>(api: &A, args: &GetByNameArgs) -> Result<Vec<NetworkList>> {
    let query = ListQuery {
        list_type: args.list_type.into(),
        search: Some(args.name.clone()),
        detail: args.detail.into(),
    };

    let matches: Vec<NetworkList> = api
        .list_network_lists(&query)
        .await?
        .into_iter()
        .filter(|list| list.name == args.name)
        .collect();

    if matches.is_empty() {
        return Err(NetlistError::ListNotFound(format!(
            "no {} list named '{}'",
            args.list_type, args.name
        )));
    }
    if matches.len() > 1 {
        tracing::warn!(name = %args.name, count = matches.len(), "Several lists share this name");
    }
    Ok(matches)
}
