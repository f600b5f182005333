//! bahrain-nights CLI
//!
//! Reconciles the BahrainNights movie listings against per-cinema snapshots
//! of what each cinema currently shows.

mod cli_types;
mod commands;
mod error;
mod logger;
mod settings;

use clap::Parser;

use nights_import::Pass;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::listings::{StatusFilter, run_listings};
use commands::reconcile::run_sync;
use commands::seed::run_seed;
use commands::snapshots::run_snapshots;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Reconcile { args } => run_sync(Pass::Reconcile, args),
        Commands::Cleanup { args } => run_sync(Pass::Prune, args),
        Commands::Listings {
            store,
            now_showing,
            coming_soon,
        } => run_listings(store, StatusFilter::from_flags(now_showing, coming_soon)),
        Commands::Snapshots { snapshots } => run_snapshots(snapshots),
        Commands::Seed { db, file } => run_seed(&db, &file),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show();
                Ok(())
            }
            ConfigAction::Path => run_config_path(),
        },
    }
}
