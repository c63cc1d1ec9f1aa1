use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "deckid", bin_name = "deckid", version = get_version())]
#[command(
    about = "Keep dense Group@00001 style ordinal labels on grouped records",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory and a default config
    #[command(display_order = 1)]
    Init,

    /// Manage groups
    #[command(subcommand, display_order = 2)]
    Group(GroupCommands),

    /// Add a record to a group
    #[command(alias = "a", display_order = 3)]
    Add {
        /// Group name, nested groups as Parent::Child
        group: String,

        /// Front text of the record
        front: String,

        /// Add the record without a label field
        #[arg(long)]
        no_label: bool,
    },

    /// List records in label order
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Only list this group
        group: Option<String>,
    },

    /// Move the entry at a list position one step up
    #[command(display_order = 5)]
    Up {
        /// Position as shown by `list`
        position: usize,

        /// Group the position refers to (whole list if omitted)
        group: Option<String>,
    },

    /// Move the entry at a list position one step down
    #[command(display_order = 6)]
    Down {
        /// Position as shown by `list`
        position: usize,

        /// Group the position refers to (whole list if omitted)
        group: Option<String>,
    },

    /// Renumber one group to 1..N, keeping its order
    #[command(display_order = 7)]
    Sweep { group: String },

    /// Renumber every group, in label order
    #[command(display_order = 8)]
    Reconcile,

    /// Make labels follow the listed order
    #[command(display_order = 9)]
    Renumber {
        /// Only renumber this group
        group: Option<String>,
    },

    /// Show or set configuration
    #[command(display_order = 10)]
    Config {
        /// Config key (label-field, front-field, reconcile-on-start)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Create a group
    Add {
        name: String,

        /// Parent group, making this a subgroup
        #[arg(long)]
        parent: Option<String>,
    },

    /// List groups with record counts
    #[command(alias = "ls")]
    List,
}
