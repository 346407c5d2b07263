// Listing read effects
//
// Thin orchestration over the listing store for the detail page.

use anyhow::{Context, Result};

use crate::common::ListingId;
use crate::domains::listings::models::Listing;
use crate::kernel::StorefrontDeps;

/// Outcome of a detail-page read. An unknown id sends the caller back to
/// the feed root; there is no dedicated not-found view for listings.
#[derive(Debug, Clone)]
pub enum ListingDetail {
    Found(Listing),
    NotFound,
}

/// Read a single listing by id.
pub async fn fetch_detail(deps: &StorefrontDeps, id: ListingId) -> Result<ListingDetail> {
    let listing = deps
        .listings
        .get(id)
        .await
        .context("Failed to load listing")?;

    match listing {
        Some(listing) => Ok(ListingDetail::Found(listing)),
        None => {
            tracing::info!(listing_id = %id, "Listing not found; redirecting to feed root");
            Ok(ListingDetail::NotFound)
        }
    }
}
