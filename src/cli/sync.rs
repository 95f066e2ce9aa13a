//! `sync` command implementation.

use crate::cli::args::SyncCommand;
use crate::core::api::NetworkListApi;
use crate::core::sync;
use crate::error::Result;
use crate::render::{self, RenderOptions};

/// Run a sync and render its report.
///
/// # Errors
///
/// Fails on an unreadable source file or the first API error.
pub async fn execute<A: NetworkListApi>(
    api: &A,
    command: &SyncCommand,
    options: RenderOptions,
) -> Result<String> {
    let report = match command {
        SyncCommand::Aka(args) => {
            sync::sync_from_list(api, &args.id_src, &args.id_dst, args.force).await?
        }
        SyncCommand::Local(args) => {
            sync::sync_from_file(api, &args.from_file, &args.id_dst, args.force).await?
        }
    };
    render::render_sync_report(&report, options)
}
