//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use region_meta::NameComparison;

/// Region reconciler - decide which code regions to add or remove
#[derive(Parser, Debug)]
#[command(name = "regions")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Path to a regions TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate regions even when they would be empty
    #[arg(long)]
    pub insert_even_if_empty: bool,

    /// Split regions by access level
    #[arg(long)]
    pub include_access_level: bool,

    /// Region name comparison (ordinal or ignore-case)
    #[arg(long, value_name = "MODE")]
    pub name_comparison: Option<NameComparison>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the regions the configuration asks for
    Desired {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show member-type tiers and their labels
    Tiers {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Reconcile the regions in a member list
    ///
    /// The member list is a JSON array of objects with `kind` and `name`,
    /// e.g. [{"kind": "region", "name": "Fields"}, {"kind": "field", "name": "count"}].
    Plan {
        /// Path to the JSON member list
        #[arg(short, long)]
        members: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
