use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nights_import::{DriverOptions, LogProgress, Pass, RunReport, run_pass};

use super::{heading, open_store, select_snapshots};
use crate::cli_types::PassArgs;
use crate::error::CliError;
use crate::settings::resolve_snapshot_dir;

/// Run the `reconcile` or `cleanup` command.
///
/// Per-listing write failures are reported but do not fail the command; only
/// configuration problems and a failed read do.
pub(crate) fn run_sync(pass: Pass, args: PassArgs) -> Result<(), CliError> {
    let dir = resolve_snapshot_dir(args.snapshots);
    let snapshots = select_snapshots(&dir, args.cinema.as_deref())?;
    let mut store = open_store(&args.store)?;

    heading(match pass {
        Pass::Reconcile => "Reconciling cinema listings...",
        Pass::Prune => "Cleaning up stale cinema sources...",
    });

    let options = DriverOptions {
        dry_run: args.dry_run,
    };
    let report = run_pass(store.as_mut(), &snapshots, &options, &LogProgress, pass)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &RunReport) {
    log::info!("");
    if report.dry_run {
        log::info!(
            "{}",
            "Dry run: no changes made.".if_supports_color(Stdout, |t| t.yellow()),
        );
    } else {
        heading(match report.pass {
            Pass::Reconcile => "Reconciliation complete",
            Pass::Prune => "Cleanup complete",
        });
    }

    let verb = if report.dry_run { "would update" } else { "updated" };
    for stats in &report.cinemas {
        log::info!(
            "  {} {:>5} checked {:>5} matched {:>5} {}",
            format!("{:<12}", stats.cinema.as_str()).if_supports_color(Stdout, |t| t.bold()),
            stats.checked,
            stats.matched,
            stats.updated,
            verb,
        );
    }

    log::info!("  Listings read:      {:>6}", report.listings);
    log::info!("  Records checked:    {:>6}", report.total_checked());
    log::info!("  Records updated:    {:>6}", report.total_updated());
    match report.pass {
        Pass::Reconcile => {
            log::info!("  Promoted to now:    {:>6}", report.total_promoted());
            log::info!("  Sources added:      {:>6}", report.total_sources_added());
        }
        Pass::Prune => {
            log::info!("  Sources removed:    {:>6}", report.total_sources_removed());
        }
    }
    if report.total_skipped() > 0 {
        log::info!("  Skipped (no title): {:>6}", report.total_skipped());
    }
    if report.ambiguous_status > 0 {
        log::info!(
            "  Ambiguous status:   {:>6} {}",
            report.ambiguous_status,
            "(both or neither flag set, left as-is)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let failed = report.total_failed();
    if failed > 0 {
        log::warn!(
            "{} write{} failed; run again to retry",
            failed,
            if failed == 1 { "" } else { "s" }
        );
        for failure in &report.failures {
            log::warn!(
                "  {} \"{}\" ({}): {}",
                failure.cinema,
                failure.title,
                failure.listing_id,
                failure.error
            );
        }
    }
}
