//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use nights_catalog::CinemaId;

#[derive(Parser)]
#[command(name = "bahrain-nights")]
#[command(about = "Reconcile cinema listings for BahrainNights", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where listings are read from and written to.
#[derive(Args, Clone)]
pub(crate) struct StoreArgs {
    /// Use a local SQLite database instead of the managed datastore
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments shared by passes that walk snapshots.
#[derive(Args, Clone)]
pub(crate) struct PassArgs {
    /// Directory of cinema snapshot YAML files
    #[arg(short, long)]
    pub snapshots: Option<PathBuf>,

    /// Only process these cinemas (e.g., vox,cineco)
    #[arg(short, long, value_delimiter = ',')]
    pub cinema: Option<Vec<CinemaId>>,

    /// Show what would change without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add cinema sources to matching listings and promote coming-soon titles
    Reconcile {
        #[command(flatten)]
        args: PassArgs,
    },

    /// Remove cinema sources from listings the cinema no longer shows
    Cleanup {
        #[command(flatten)]
        args: PassArgs,
    },

    /// Show listings with their status and sources
    Listings {
        #[command(flatten)]
        store: StoreArgs,

        /// Only listings marked now showing
        #[arg(long, conflicts_with = "coming_soon")]
        now_showing: bool,

        /// Only listings marked coming soon
        #[arg(long)]
        coming_soon: bool,
    },

    /// Show the cinema snapshots that would be used
    Snapshots {
        /// Directory of cinema snapshot YAML files
        #[arg(short, long)]
        snapshots: Option<PathBuf>,
    },

    /// Load listings from a YAML file into a local SQLite database
    Seed {
        /// SQLite database to create or update
        #[arg(long)]
        db: PathBuf,

        /// YAML file containing a list of listings
        file: PathBuf,
    },

    /// Manage datastore credentials configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current credentials and their sources
    Show,

    /// Print the config file path
    Path,
}
