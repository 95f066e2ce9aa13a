//! CLI argument definitions using clap.
//!
//! Flag spellings follow the original `akamai netlist` tool (`--listType`,
//! `--includeElements`, ...); kebab-case aliases are accepted as well.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use crate::core::models::{ListType, ListTypeFilter, Network};

/// Default comment attached to activations.
pub const DEFAULT_ACTIVATION_COMMENT: &str = "activated via akamai-cli";
/// Default description for newly created lists.
pub const DEFAULT_LIST_DESCRIPTION: &str = "created via akamai-cli-networklist";

/// A CLI to interact with Akamai network lists.
#[derive(Parser, Debug)]
#[command(name = "netlist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Credentials ===
    /// Location of the credentials file (skips auto-discovery)
    #[arg(long, value_name = "PATH", env = "AKAMAI_EDGERC", global = true)]
    pub config: Option<PathBuf>,

    /// Section of the credentials file
    #[arg(long, value_name = "NAME", env = "AKAMAI_EDGERC_SECTION", global = true)]
    pub section: Option<String>,

    /// Account switch key
    #[arg(long, value_name = "KEY", env = "AKAMAI_ACCOUNT_SWITCH_KEY", global = true)]
    pub ask: Option<String>,

    /// Log level (error, warn, info, debug, trace); debug also dumps requests
    #[arg(long, value_name = "LEVEL", global = true)]
    pub debug: Option<String>,

    /// Request timeout in seconds (1-300)
    #[arg(
        long,
        value_name = "SECONDS",
        env = "NETLIST_TIMEOUT",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    pub timeout: Option<u64>,

    // === Output ===
    /// Output format
    #[arg(long, value_enum, env = "NETLIST_FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List network lists objects
    #[command(subcommand)]
    Get(GetCommand),

    /// Finds all network lists that match a name or network element
    Search(SearchArgs),

    /// Synchronizes items into a destination list (without activation)
    #[command(subcommand)]
    Sync(SyncCommand),

    /// Manages items in network lists
    #[command(subcommand)]
    Items(ItemsCommand),

    /// Creates new network list
    Create(CreateArgs),

    /// Manages network list activation/status
    #[command(subcommand)]
    Activate(ActivateCommand),

    /// Deletes network list (list must be inactive on both networks)
    Delete(DeleteArgs),

    /// Manages network list subscription notifications (subscribe by default)
    Notification(NotificationArgs),
}

/// Verbosity flags shared by the read commands.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DetailArgs {
    /// Return more verbose data such as creation date and activation status
    #[arg(long)]
    pub extended: bool,

    /// Include the full list of IP or GEO elements
    #[arg(long = "includeElements", alias = "include-elements")]
    pub include_elements: bool,
}

/// `get` subcommands.
#[derive(Subcommand, Debug)]
pub enum GetCommand {
    /// Gets all network lists in the account
    All(GetAllArgs),

    /// Gets a network list by unique-id
    ById(GetByIdArgs),

    /// Gets a network list by name
    ByName(GetByNameArgs),
}

/// Arguments for `get all`.
#[derive(Args, Debug)]
pub struct GetAllArgs {
    #[command(flatten)]
    pub detail: DetailArgs,

    /// Filter by the network list type
    #[arg(long = "listType", alias = "list-type", value_enum, ignore_case = true, default_value = "ANY")]
    pub list_type: ListTypeFilter,
}

/// Arguments for `get by-id`.
#[derive(Args, Debug)]
pub struct GetByIdArgs {
    /// List unique-id
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,

    #[command(flatten)]
    pub detail: DetailArgs,
}

/// Arguments for `get by-name`.
#[derive(Args, Debug)]
pub struct GetByNameArgs {
    /// List name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub detail: DetailArgs,

    /// Filter by the network list type
    #[arg(long = "listType", alias = "list-type", value_enum, ignore_case = true, default_value = "IP")]
    pub list_type: ListType,
}

/// Arguments for `search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Include network lists that match this pattern
    #[arg(long = "searchPattern", alias = "search-pattern", value_name = "PATTERN")]
    pub search_pattern: String,

    /// Return more verbose data such as creation date and activation status
    #[arg(long)]
    pub extended: bool,

    /// Filter by the network list type
    #[arg(long = "listType", alias = "list-type", value_enum, ignore_case = true, default_value = "ANY")]
    pub list_type: ListTypeFilter,
}

/// `sync` subcommands.
#[derive(Subcommand, Debug)]
pub enum SyncCommand {
    /// Synchronizes items from a source list into a destination list
    Aka(SyncAkaArgs),

    /// Synchronizes items from a local file into a destination list
    Local(SyncLocalArgs),
}

/// Arguments for `sync aka`.
#[derive(Args, Debug)]
pub struct SyncAkaArgs {
    /// Source list ID to take items from
    #[arg(long = "id-src", value_name = "SOURCE-LIST-ID")]
    pub id_src: String,

    /// Target list ID to synchronize
    #[arg(long = "id-dst", value_name = "TARGET-LIST-ID")]
    pub id_dst: String,

    /// Also remove items missing from the source
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `sync local`.
#[derive(Args, Debug)]
pub struct SyncLocalArgs {
    /// File with one element per line
    #[arg(long = "from-file", value_name = "PATH")]
    pub from_file: PathBuf,

    /// Target list ID to synchronize
    #[arg(long = "id-dst", value_name = "TARGET-LIST-ID")]
    pub id_dst: String,

    /// Also remove items missing from the file
    #[arg(long)]
    pub force: bool,
}

/// `items` subcommands.
#[derive(Subcommand, Debug)]
pub enum ItemsCommand {
    /// Adds elements to a network list
    Add(ItemsAddArgs),

    /// Removes an element from a network list
    Remove(ItemsRemoveArgs),
}

/// Arguments for `items add`.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["items", "from_file"])
))]
pub struct ItemsAddArgs {
    /// List unique-id
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,

    /// Items to add, comma separated
    #[arg(long, value_name = "ITEM1,ITEM2", value_delimiter = ',')]
    pub items: Vec<String>,

    /// File with one item per line
    #[arg(long = "from-file", value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

/// Arguments for `items remove`.
#[derive(Args, Debug)]
pub struct ItemsRemoveArgs {
    /// List unique-id
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,

    /// Element to remove
    #[arg(long)]
    pub element: String,
}

/// Arguments for `create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name for the new list
    #[arg(long)]
    pub name: String,

    /// Description for the new list
    #[arg(long, default_value = DEFAULT_LIST_DESCRIPTION)]
    pub description: String,

    /// Type of the new list
    #[arg(long = "type", value_enum, ignore_case = true, default_value = "IP")]
    pub list_type: ListType,
}

/// `activate` subcommands.
#[derive(Subcommand, Debug)]
pub enum ActivateCommand {
    /// Activates a network list on the given network
    List(ActivateListArgs),

    /// Displays activation status for a network list
    Status(ActivationStatusArgs),
}

/// Arguments for `activate list`.
#[derive(Args, Debug)]
pub struct ActivateListArgs {
    /// List unique-id
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,

    /// Activation comments
    #[arg(long, default_value = DEFAULT_ACTIVATION_COMMENT)]
    pub comments: String,

    /// Recipients of the activation e-mail, comma separated
    #[arg(
        long = "notificationRecipients",
        alias = "notification-recipients",
        value_delimiter = ','
    )]
    pub notification_recipients: Vec<String>,

    /// Request a fast activation
    #[arg(long)]
    pub fast: bool,

    /// Activate on production instead of staging
    #[arg(long)]
    pub prd: bool,
}

impl ActivateListArgs {
    /// Target network.
    #[must_use]
    pub const fn network(&self) -> Network {
        Network::from_prd_flag(self.prd)
    }
}

/// Arguments for `activate status`.
#[derive(Args, Debug)]
pub struct ActivationStatusArgs {
    /// List unique-id
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,

    /// Show production status instead of staging
    #[arg(long)]
    pub prd: bool,
}

impl ActivationStatusArgs {
    /// Target network.
    #[must_use]
    pub const fn network(&self) -> Network {
        Network::from_prd_flag(self.prd)
    }
}

/// Arguments for `delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// List unique-id to remove
    #[arg(long, value_name = "UNIQUE-ID")]
    pub id: String,
}

/// Arguments for `notification`.
#[derive(Args, Debug)]
pub struct NotificationArgs {
    /// Network list ids, comma separated
    #[arg(
        long = "networkListsIDs",
        alias = "network-list-ids",
        value_delimiter = ',',
        required = true
    )]
    pub network_list_ids: Vec<String>,

    /// Recipients of notifications, comma separated
    #[arg(
        long = "notificationRecipients",
        alias = "notification-recipients",
        value_delimiter = ',',
        required = true
    )]
    pub notification_recipients: Vec<String>,

    /// Unsubscribe from notifications
    #[arg(long)]
    pub unsubscribe: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn get_all_defaults_to_any() {
        let cli = Cli::try_parse_from(["netlist", "get", "all"]).unwrap();
        match cli.command {
            Some(Commands::Get(GetCommand::All(args))) => {
                assert_eq!(args.list_type, ListTypeFilter::Any);
                assert!(!args.detail.extended);
                assert!(!args.detail.include_elements);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn original_flag_spellings_are_accepted() {
        let cli = Cli::try_parse_from([
            "netlist",
            "get",
            "all",
            "--listType",
            "geo",
            "--includeElements",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Get(GetCommand::All(args))) => {
                assert_eq!(args.list_type, ListTypeFilter::Geo);
                assert!(args.detail.include_elements);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "netlist", "delete", "--id", "1-ABC", "--section", "prod", "--ask", "B-C-1",
        ])
        .unwrap();
        assert_eq!(cli.section.as_deref(), Some("prod"));
        assert_eq!(cli.ask.as_deref(), Some("B-C-1"));
    }

    #[test]
    fn items_add_requires_a_source() {
        assert!(Cli::try_parse_from(["netlist", "items", "add", "--id", "1-ABC"]).is_err());

        let cli = Cli::try_parse_from([
            "netlist", "items", "add", "--id", "1-ABC", "--items", "1.2.3.4,5.6.7.0/24",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Items(ItemsCommand::Add(args))) => {
                assert_eq!(args.items, vec!["1.2.3.4", "5.6.7.0/24"]);
                assert!(args.from_file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn activation_defaults_to_staging() {
        let cli = Cli::try_parse_from(["netlist", "activate", "list", "--id", "1-ABC"]).unwrap();
        match cli.command {
            Some(Commands::Activate(ActivateCommand::List(args))) => {
                assert_eq!(args.network(), Network::Staging);
                assert_eq!(args.comments, DEFAULT_ACTIVATION_COMMENT);
                assert!(args.notification_recipients.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn notification_requires_ids_and_recipients() {
        assert!(
            Cli::try_parse_from(["netlist", "notification", "--networkListsIDs", "1-A"]).is_err()
        );
        let cli = Cli::try_parse_from([
            "netlist",
            "notification",
            "--networkListsIDs",
            "1-A,2-B",
            "--notificationRecipients",
            "ops@example.com",
            "--unsubscribe",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Notification(args)) => {
                assert_eq!(args.network_list_ids, vec!["1-A", "2-B"]);
                assert!(args.unsubscribe);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn timeout_must_be_between_1_and_300() {
        for bad in ["0", "301"] {
            let err = Cli::try_parse_from(["netlist", "--timeout", bad, "get", "all"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
        let cli = Cli::try_parse_from(["netlist", "--timeout", "300", "get", "all"]).unwrap();
        assert_eq!(cli.timeout, Some(300));
    }
}
