//! netlist - Akamai Network Lists CLI
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use netlist::cli::{self, Cli, Commands, OutputFormat, context};
use netlist::core::logging;
use netlist::error::NetlistError;
use netlist::render::{RenderOptions, error::render_error};
use netlist::storage::ResolvedConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = logging::resolve_level(cli.debug.as_deref(), cli.verbose);
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    logging::init(log_level, log_format, logging::parse_log_file_from_env());

    // Flags alone decide the error format until the config file is loaded.
    let mut error_format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format.unwrap_or_default()
    };
    let mut no_color = cli.no_color;
    let mut pretty = cli.pretty;

    let result = match ResolvedConfig::resolve(&cli) {
        Ok(config) => {
            error_format = config.format;
            no_color = config.no_color;
            pretty = config.pretty;
            run(cli.command, &config, log_level).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.error_code(), error = %e, "Command failed");
            println!("{}", render_error(&e, error_format, no_color, pretty));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(
    command: Option<Commands>,
    config: &ResolvedConfig,
    log_level: logging::LogLevel,
) -> Result<(), NetlistError> {
    let Some(command) = command else {
        print_quickstart();
        return Ok(());
    };

    let api = context::build_client(config, log_level)?;
    let output = cli::dispatch(&api, &command, RenderOptions::from_config(config)).await?;
    println!("{output}");
    Ok(())
}

fn print_quickstart() {
    println!(
        r"netlist - Akamai Network Lists CLI

USAGE:
    netlist [OPTIONS] <COMMAND>

COMMANDS:
    get           List network lists (all, by-id, by-name)
    search        Find lists by name or element
    sync          Synchronize a list from another list or a local file
    items         Add or remove list elements
    create        Create a network list
    activate      Activate a list or show its activation status
    delete        Delete a network list
    notification  Manage change notification subscriptions

QUICK START:
    netlist get all --listType IP                     # IP lists in the account
    netlist get by-id --id 1024_CORP --includeElements
    netlist sync local --from-file allow.txt --id-dst 1024_CORP
    netlist activate list --id 1024_CORP --prd        # Publish to production

CREDENTIALS:
    ~/.edgerc [default] section, or --config PATH --section NAME,
    or AKAMAI_HOST / AKAMAI_CLIENT_TOKEN / AKAMAI_CLIENT_SECRET / AKAMAI_ACCESS_TOKEN

For more help: netlist --help"
    );
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
}
