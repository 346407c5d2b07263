//! Seed, then browse the home feed page by page.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use storefront_core::domains::feed::{CellKind, Feed, FeedFilters, LoadOutcome, QuickFilter};
use storefront_core::domains::listings::models::Category;
use storefront_core::domains::seed::{run_seed, SeedCounts};
use storefront_core::Config;

use super::{dev_gateway, gbp};

pub async fn run(
    config: &Config,
    counts: &SeedCounts,
    category: Option<String>,
    quick: Option<String>,
    pages: usize,
) -> Result<()> {
    let (_gateway, deps, _subject) = dev_gateway();

    // The dev store is per-process, so seed before browsing
    run_seed(&deps, counts, "localhost", config.allow_seed).await?;

    let filters = FeedFilters {
        category: category
            .map(|c| Category::from_str(&c))
            .transpose()
            .context("Unknown category")?,
        quick: quick
            .map(|q| QuickFilter::from_str(&q))
            .transpose()
            .context("Unknown quick filter")?,
    };

    let feed = Arc::new(Feed::new(deps));
    if feed.set_filters(filters.clone()).await.is_err() {
        println!("{}", empty_state(&filters));
        return Ok(());
    }

    // The visibility sentinel: keep asking for the next page
    for _ in 1..pages {
        match feed.load_more().await? {
            LoadOutcome::Loaded => {}
            LoadOutcome::Skipped | LoadOutcome::Stale => break,
        }
    }

    let snapshot = feed.snapshot();
    if snapshot.items.is_empty() {
        println!("{}", empty_state(&filters));
        return Ok(());
    }

    for (index, cell) in feed.cells().iter().enumerate() {
        let listing = &cell.listing;
        let town = listing
            .post_town
            .as_deref()
            .unwrap_or("")
            .to_lowercase();
        let line = format!(
            "{:>3}  {}  {}  {}",
            index,
            listing.title,
            gbp(listing.price),
            town
        );
        match cell.kind {
            CellKind::Premium => {
                println!("{}  {}", line.bold(), "[Premium]".on_bright_cyan())
            }
            CellKind::Listing => println!("{}", line),
        }
    }

    if snapshot.has_more {
        println!("{}", "Loading more available...".dimmed());
    } else {
        println!("{}", "You've reached the end.".dimmed());
    }
    Ok(())
}

fn empty_state(filters: &FeedFilters) -> String {
    let mut message = "No listings found".to_string();
    if let Some(category) = &filters.category {
        message.push_str(&format!(" in {}", category));
    }
    if let Some(quick) = &filters.quick {
        message.push_str(&format!(" • filter: {}", quick));
    }
    message.push('.');
    message
}
