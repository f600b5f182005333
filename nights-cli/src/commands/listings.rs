use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nights_catalog::MovieListing;

use super::{heading, open_store, truncate_str};
use crate::cli_types::StoreArgs;
use crate::error::CliError;

/// Which listings the `listings` command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusFilter {
    All,
    NowShowing,
    ComingSoon,
}

impl StatusFilter {
    pub(crate) fn from_flags(now_showing: bool, coming_soon: bool) -> Self {
        match (now_showing, coming_soon) {
            (true, _) => Self::NowShowing,
            (false, true) => Self::ComingSoon,
            (false, false) => Self::All,
        }
    }

    fn keeps(self, listing: &MovieListing) -> bool {
        match self {
            Self::All => true,
            Self::NowShowing => listing.is_now_showing,
            Self::ComingSoon => listing.is_coming_soon,
        }
    }
}

/// Run the `listings` command.
pub(crate) fn run_listings(store: StoreArgs, filter: StatusFilter) -> Result<(), CliError> {
    let mut store = open_store(&store)?;
    let listings = store
        .fetch_listings()
        .map_err(|e| CliError::database(format!("Failed to read listings: {e}")))?;

    heading("Movie listings");
    log::info!("");

    let shown: Vec<&MovieListing> = listings.iter().filter(|l| filter.keeps(l)).collect();
    for listing in &shown {
        log::info!(
            "  {:<13} {:<40} {}",
            status_label(listing),
            truncate_str(&listing.title, 40),
            listing.sources.join(", ").if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    log::info!("");
    log::info!("  Shown:        {:>6}", shown.len());
    log::info!("  Total:        {:>6}", listings.len());
    log::info!(
        "  Now showing:  {:>6}",
        listings.iter().filter(|l| l.is_now_showing).count()
    );
    log::info!(
        "  Coming soon:  {:>6}",
        listings.iter().filter(|l| l.is_coming_soon).count()
    );
    Ok(())
}

fn status_label(listing: &MovieListing) -> &'static str {
    match (listing.is_now_showing, listing.is_coming_soon) {
        (true, false) => "now showing",
        (false, true) => "coming soon",
        (true, true) => "both flags",
        (false, false) => "no status",
    }
}
