// Feed retrieval effects
//
// Thin orchestration over the listing store: issues the page queries for
// the pure state in `machines`, enforces the single-outstanding-request
// rule, and discards responses that resolve for a superseded filter
// generation.

use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::domains::feed::interleave::{interleave, FeedCell};
use crate::domains::feed::machines::{FeedState, PAGE_SIZE};
use crate::domains::feed::models::FeedFilters;
use crate::domains::listings::models::Listing;
use crate::kernel::StorefrontDeps;

/// Outcome of a page-load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was fetched and appended.
    Loaded,
    /// Guarded no-op: a load was in flight, the end was reached, or no
    /// cursor is available yet.
    Skipped,
    /// The response arrived for a superseded filter generation and was
    /// discarded.
    Stale,
}

/// Read-only view of the accumulated feed.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub filters: FeedFilters,
    pub items: Vec<Listing>,
    pub has_more: bool,
}

/// The home feed: accumulated pages for the active filter set.
pub struct Feed {
    deps: StorefrontDeps,
    state: Mutex<FeedState>,
}

impl Feed {
    pub fn new(deps: StorefrontDeps) -> Self {
        Self {
            deps,
            state: Mutex::new(FeedState::new(FeedFilters::default())),
        }
    }

    /// Replace the active filters and fetch the first page. All state
    /// accumulated under the previous filters is cleared first; a response
    /// still in flight for those filters is discarded when it lands.
    pub async fn set_filters(&self, filters: FeedFilters) -> Result<LoadOutcome> {
        let (generation, filters) = {
            let mut state = self.state.lock().unwrap();
            let generation = state.begin_initial(filters);
            (generation, state.filters.clone())
        };

        let result = self
            .deps
            .listings
            .fetch_page(&filters, None, PAGE_SIZE)
            .await;

        self.settle(generation, result)
    }

    /// Fetch the next page after the current cursor. No-op while a load is
    /// outstanding, once the end is reached, or before any initial load -
    /// the scroll sentinel may call this re-entrantly.
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let ticket = {
            let mut state = self.state.lock().unwrap();
            match state.begin_more() {
                Some(ticket) => ticket,
                None => return Ok(LoadOutcome::Skipped),
            }
        };

        let result = self
            .deps
            .listings
            .fetch_page(&ticket.filters, Some(&ticket.cursor), PAGE_SIZE)
            .await;

        self.settle(ticket.generation, result)
    }

    fn settle(
        &self,
        generation: u64,
        result: Result<crate::kernel::QueryPage>,
    ) -> Result<LoadOutcome> {
        let mut state = self.state.lock().unwrap();
        match result {
            Ok(page) => {
                if state.apply_page(generation, page) {
                    Ok(LoadOutcome::Loaded)
                } else {
                    Ok(LoadOutcome::Stale)
                }
            }
            Err(err) => {
                if state.fail(generation) {
                    tracing::warn!(error = %err, "Feed query failed; rendering empty state");
                    Err(err).context("Failed to load listings")
                } else {
                    Ok(LoadOutcome::Stale)
                }
            }
        }
    }

    /// Current accumulated state.
    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.state.lock().unwrap();
        FeedSnapshot {
            filters: state.filters.clone(),
            items: state.items.clone(),
            has_more: state.has_more,
        }
    }

    /// The rendering sequence: accumulated items with premium slots tagged.
    pub fn cells(&self) -> Vec<FeedCell> {
        let items = self.state.lock().unwrap().items.clone();
        interleave(items)
    }
}
