// Trait definitions for the managed backend gateway
//
// These are INFRASTRUCTURE traits only - no storefront logic. The document
// store, blob store, and identity provider are external managed services;
// this crate consumes their contracts and never implements them (the
// in-memory versions in test_dependencies exist for tests and the dev
// harness).
//
// Naming convention: Base* for trait names (e.g. BaseListingStore)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use crate::common::{ListingId, SubjectId};
use crate::domains::feed::models::FeedFilters;
use crate::domains::listings::models::{Listing, ListingPrivate, NewListing, NewListingPrivate};

// =============================================================================
// Document Store Trait (Infrastructure)
// =============================================================================

/// Opaque continuation token for cursor pagination.
///
/// Produced by the listing store - the backend-native position marker of
/// the last document in a page - and handed back verbatim to continue
/// strictly after it. Never inspected by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        PageCursor(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of listings plus the continuation marker of its last document.
#[derive(Debug, Clone)]
pub struct QueryPage {
    pub listings: Vec<Listing>,
    /// Position marker of the last returned document; `None` for an empty
    /// page.
    pub cursor: Option<PageCursor>,
}

/// Counts reported by `delete_owned`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WipeReport {
    pub listings_deleted: usize,
    pub private_deleted: usize,
}

#[async_trait]
pub trait BaseListingStore: Send + Sync {
    /// Execute a filtered page query: equality predicates from `filters`,
    /// creation time descending, at most `limit` documents, continuing
    /// strictly after `after` when present.
    async fn fetch_page(
        &self,
        filters: &FeedFilters,
        after: Option<&PageCursor>,
        limit: usize,
    ) -> Result<QueryPage>;

    /// Read a single listing by id.
    async fn get(&self, id: ListingId) -> Result<Option<Listing>>;

    /// Write a public listing document. The store assigns the id and the
    /// created/updated timestamps (equal at creation, monotonic per write).
    async fn create_listing(&self, new: NewListing) -> Result<Listing>;

    /// Write a private contact record. The store assigns id and timestamp.
    async fn create_private(&self, new: NewListingPrivate) -> Result<ListingPrivate>;

    /// Delete every listing and private record owned by `owner`.
    async fn delete_owned(&self, owner: SubjectId) -> Result<WipeReport>;
}

// =============================================================================
// Blob Store Trait (Infrastructure)
// =============================================================================

/// Progress callback invoked as bytes transfer:
/// `(bytes_transferred, total_bytes)`.
pub type ProgressFn<'a> = &'a (dyn Fn(u64, u64) + Send + Sync);

#[async_trait]
pub trait BaseBlobStore: Send + Sync {
    /// Resumable upload to `path`, reporting progress as bytes transfer.
    /// Returns the durable retrieval URL on completion.
    async fn upload(
        &self,
        path: &str,
        content: Bytes,
        on_progress: ProgressFn<'_>,
    ) -> Result<String>;
}

// =============================================================================
// Identity Service Trait (Infrastructure)
// =============================================================================

/// The authenticated identity subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubject {
    pub uid: SubjectId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Callback invoked whenever the authenticated subject changes.
pub type SubjectListener = Arc<dyn Fn(Option<AuthSubject>) + Send + Sync>;

/// Handle for removing a subject-change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

#[async_trait]
pub trait BaseIdentityService: Send + Sync {
    /// Currently authenticated subject, if any.
    fn current_subject(&self) -> Option<AuthSubject>;

    /// Email/password sign-in.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSubject>;

    /// Email/password account creation; signs the new subject in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSubject>;

    /// Sign the current subject out.
    async fn sign_out(&self) -> Result<()>;

    /// Register a subject-change listener; fires on sign-in and sign-out.
    fn subscribe(&self, listener: SubjectListener) -> SubscriptionId;

    /// Remove a previously registered listener.
    fn unsubscribe(&self, id: SubscriptionId);
}
