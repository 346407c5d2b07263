//! Feed pagination state machine
//! Pure state transitions - NO IO, only bookkeeping for the effect layer
//!
//! Every load is tagged with the generation current when it was issued;
//! a response whose generation no longer matches is discarded, so results
//! accumulated under one filter set never mix with another's.

use crate::domains::feed::models::FeedFilters;
use crate::domains::listings::models::Listing;
use crate::kernel::{PageCursor, QueryPage};

/// Listings fetched per page.
pub const PAGE_SIZE: usize = 60;

/// Accumulated feed state for one filter combination.
#[derive(Debug, Clone)]
pub struct FeedState {
    pub filters: FeedFilters,
    pub items: Vec<Listing>,
    pub cursor: Option<PageCursor>,
    /// Exact-size heuristic: true while the last page came back full. When
    /// the true remainder is exactly zero this costs one extra empty page
    /// request before settling.
    pub has_more: bool,
    /// Guards against concurrent page requests.
    pub in_flight: bool,
    /// Bumped on every filter change.
    pub generation: u64,
}

/// Everything a continuation request needs, captured under the state lock.
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub generation: u64,
    pub cursor: PageCursor,
    pub filters: FeedFilters,
}

impl FeedState {
    pub fn new(filters: FeedFilters) -> Self {
        Self {
            filters,
            items: Vec::new(),
            cursor: None,
            has_more: true,
            in_flight: false,
            generation: 0,
        }
    }

    /// Start a fresh initial load for a new filter set. Clears everything
    /// accumulated under the previous filters and returns the new
    /// generation tag.
    pub fn begin_initial(&mut self, filters: FeedFilters) -> u64 {
        self.generation += 1;
        self.filters = filters;
        self.items.clear();
        self.cursor = None;
        self.has_more = true;
        self.in_flight = true;
        self.generation
    }

    /// Start a continuation load, or `None` when guarded: a load is
    /// already in flight, the end was reached, or no cursor exists yet.
    pub fn begin_more(&mut self) -> Option<LoadTicket> {
        if self.in_flight || !self.has_more {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.in_flight = true;
        Some(LoadTicket {
            generation: self.generation,
            cursor,
            filters: self.filters.clone(),
        })
    }

    /// Append a page if it belongs to the current generation; a stale page
    /// is discarded untouched and `false` returned.
    pub fn apply_page(&mut self, generation: u64, page: QueryPage) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.has_more = page.listings.len() == PAGE_SIZE;
        self.cursor = page.cursor;
        self.items.extend(page.listings);
        true
    }

    /// Record a failed load for the current generation: empty state, no
    /// automatic retry (a filter change starts over).
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.items.clear();
        self.cursor = None;
        self.has_more = false;
        true
    }
}
