//! CLI argument parsing and command dispatch.

pub mod activate;
pub mod args;
pub mod context;
pub mod create;
pub mod delete;
pub mod get;
pub mod items;
pub mod notification;
pub mod search;
pub mod sync;

pub use args::{Cli, Commands, OutputFormat};

use crate::core::api::NetworkListApi;
use crate::error::Result;
use crate::render::RenderOptions;

/// Run one command against the API and return what should be printed.
///
/// # Errors
///
/// Returns the command's error.
pub async fn dispatch<A: NetworkListApi>(
    api: &A,
    command: &Commands,
    options: RenderOptions,
) -> Result<String> {
    match command {
        Commands::Get(cmd) => get::execute(api, cmd, options).await,
        Commands::Search(args) => search::execute(api, args, options).await,
        Commands::Sync(cmd) => sync::execute(api, cmd, options).await,
        Commands::Items(cmd) => items::execute(api, cmd, options).await,
        Commands::Create(args) => create::execute(api, args, options).await,
        Commands::Activate(cmd) => activate::execute(api, cmd, options).await,
        Commands::Delete(args) => delete::execute(api, args, options).await,
        Commands::Notification(args) => notification::execute(api, args, options).await,
    }
}
