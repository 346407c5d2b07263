// In-memory gateway implementations for tests and the dev harness.
//
// These stand in for the managed backend: a document store with
// server-assigned monotonic timestamps and cursor continuation, a blob
// store with chunked progress reporting, and a credential-map identity
// service. Failure injection hooks drive the error-path tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::{ListingId, ListingPrivateId, SubjectId};
use crate::domains::feed::models::{FeedFilters, QuickFilter};
use crate::domains::listings::models::{
    Fuel, Listing, ListingPrivate, NewListing, NewListingPrivate,
};
use crate::kernel::traits::{
    AuthSubject, BaseBlobStore, BaseIdentityService, BaseListingStore, PageCursor, ProgressFn,
    QueryPage, SubjectListener, SubscriptionId, WipeReport,
};
use crate::kernel::StorefrontDeps;

// =============================================================================
// In-Memory Listing Store
// =============================================================================

pub struct InMemoryListingStore {
    docs: Mutex<Vec<Listing>>,
    privates: Mutex<Vec<ListingPrivate>>,
    /// Last server-assigned timestamp; writes are strictly monotonic.
    clock: Mutex<DateTime<Utc>>,
    fetch_calls: Mutex<Vec<FeedFilters>>,
    /// One-shot artificial latency for the next fetch, for interleaving
    /// tests.
    fetch_delay_once: Mutex<Option<Duration>>,
    fail_next_fetch: Mutex<Option<String>>,
    fail_next_create_listing: Mutex<Option<String>>,
    fail_next_create_private: Mutex<Option<String>>,
}

impl InMemoryListingStore {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            privates: Mutex::new(Vec::new()),
            clock: Mutex::new(DateTime::<Utc>::MIN_UTC),
            fetch_calls: Mutex::new(Vec::new()),
            fetch_delay_once: Mutex::new(None),
            fail_next_fetch: Mutex::new(None),
            fail_next_create_listing: Mutex::new(None),
            fail_next_create_private: Mutex::new(None),
        }
    }

    /// All public documents, unordered.
    pub fn listings(&self) -> Vec<Listing> {
        self.docs.lock().unwrap().clone()
    }

    /// All private records, unordered.
    pub fn privates(&self) -> Vec<ListingPrivate> {
        self.privates.lock().unwrap().clone()
    }

    /// Number of page queries executed.
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }

    /// Filters of every page query executed, in order.
    pub fn fetch_calls(&self) -> Vec<FeedFilters> {
        self.fetch_calls.lock().unwrap().clone()
    }

    /// Delay the next fetch by `millis`, once.
    pub fn set_fetch_delay_once(&self, millis: u64) {
        *self.fetch_delay_once.lock().unwrap() = Some(Duration::from_millis(millis));
    }

    /// Fail the next page query with `message`.
    pub fn fail_next_fetch(&self, message: &str) {
        *self.fail_next_fetch.lock().unwrap() = Some(message.to_string());
    }

    /// Fail the next public document write with `message`.
    pub fn fail_next_create_listing(&self, message: &str) {
        *self.fail_next_create_listing.lock().unwrap() = Some(message.to_string());
    }

    /// Fail the next private record write with `message`.
    pub fn fail_next_create_private(&self, message: &str) {
        *self.fail_next_create_private.lock().unwrap() = Some(message.to_string());
    }

    /// Server-assigned timestamp, strictly greater than any previous one.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let mut last = self.clock.lock().unwrap();
        let mut now = Utc::now();
        if now <= *last {
            now = *last + chrono::Duration::microseconds(1);
        }
        *last = now;
        now
    }

    fn encode_cursor(id: ListingId) -> PageCursor {
        PageCursor::new(URL_SAFE_NO_PAD.encode(id.as_uuid().as_bytes()))
    }

    fn decode_cursor(cursor: &PageCursor) -> Result<ListingId> {
        let bytes = URL_SAFE_NO_PAD
            .decode(cursor.as_str())
            .map_err(|_| anyhow::anyhow!("Invalid cursor: not valid base64"))?;
        let uuid = Uuid::from_slice(&bytes)
            .map_err(|_| anyhow::anyhow!("Invalid cursor: not a valid document id"))?;
        Ok(ListingId::from_uuid(uuid))
    }

    fn matches(filters: &FeedFilters, listing: &Listing) -> bool {
        if let Some(category) = &filters.category {
            if &listing.category != category {
                return false;
            }
        }
        match filters.quick {
            Some(QuickFilter::Bargains) => listing.price <= 1500.0,
            Some(QuickFilter::SevenSeats) => listing.seats.map_or(false, |s| s >= 7),
            Some(QuickFilter::Electric) => listing.fuel == Some(Fuel::Electric),
            Some(QuickFilter::TowBar) => listing.has_tow_bar == Some(true),
            Some(QuickFilter::Warranty) => listing.has_warranty == Some(true),
            // Geospatial narrowing is a stub; the predicate matches all
            Some(QuickFilter::Within30Miles) => true,
            None => true,
        }
    }
}

impl Default for InMemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseListingStore for InMemoryListingStore {
    async fn fetch_page(
        &self,
        filters: &FeedFilters,
        after: Option<&PageCursor>,
        limit: usize,
    ) -> Result<QueryPage> {
        let delay = self.fetch_delay_once.lock().unwrap().take();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.fetch_calls.lock().unwrap().push(filters.clone());

        if let Some(message) = self.fail_next_fetch.lock().unwrap().take() {
            anyhow::bail!("{}", message);
        }

        let mut matched: Vec<Listing> = self
            .docs
            .lock()
            .unwrap()
            .iter()
            .filter(|listing| Self::matches(filters, listing))
            .cloned()
            .collect();
        // Creation time descending; document id breaks ties the way the
        // backend's own ordering would
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let start = match after {
            Some(cursor) => {
                let after_id = Self::decode_cursor(cursor)?;
                match matched.iter().position(|l| l.id == after_id) {
                    Some(position) => position + 1,
                    // The cursor document vanished; treat as exhausted
                    None => matched.len(),
                }
            }
            None => 0,
        };

        let page: Vec<Listing> = matched.into_iter().skip(start).take(limit).collect();
        let cursor = page.last().map(|l| Self::encode_cursor(l.id));
        Ok(QueryPage {
            listings: page,
            cursor,
        })
    }

    async fn get(&self, id: ListingId) -> Result<Option<Listing>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn create_listing(&self, new: NewListing) -> Result<Listing> {
        if let Some(message) = self.fail_next_create_listing.lock().unwrap().take() {
            anyhow::bail!("{}", message);
        }
        let created_at = self.next_timestamp();
        let listing = Listing {
            id: ListingId::new(),
            owner_uid: new.owner_uid,
            category: new.category,
            title: new.title,
            make: new.make,
            model: new.model,
            year: new.year,
            mileage: new.mileage,
            fuel: new.fuel,
            transmission: new.transmission,
            body: new.body,
            colour: new.colour,
            description: new.description,
            price: new.price,
            images: new.images,
            status: new.status,
            is_premium: new.is_premium,
            premium_until: new.premium_until,
            post_town: new.post_town,
            seats: new.seats,
            has_tow_bar: new.has_tow_bar,
            has_warranty: new.has_warranty,
            created_at,
            updated_at: created_at,
        };
        self.docs.lock().unwrap().push(listing.clone());
        Ok(listing)
    }

    async fn create_private(&self, new: NewListingPrivate) -> Result<ListingPrivate> {
        if let Some(message) = self.fail_next_create_private.lock().unwrap().take() {
            anyhow::bail!("{}", message);
        }
        let private = ListingPrivate {
            id: ListingPrivateId::new(),
            listing_id: new.listing_id,
            owner_uid: new.owner_uid,
            postcode: new.postcode,
            created_at: self.next_timestamp(),
        };
        self.privates.lock().unwrap().push(private.clone());
        Ok(private)
    }

    async fn delete_owned(&self, owner: SubjectId) -> Result<WipeReport> {
        let mut docs = self.docs.lock().unwrap();
        let before_docs = docs.len();
        docs.retain(|l| l.owner_uid != owner);
        let listings_deleted = before_docs - docs.len();
        drop(docs);

        let mut privates = self.privates.lock().unwrap();
        let before_privates = privates.len();
        privates.retain(|p| p.owner_uid != owner);
        let private_deleted = before_privates - privates.len();

        Ok(WipeReport {
            listings_deleted,
            private_deleted,
        })
    }
}

// =============================================================================
// In-Memory Blob Store
// =============================================================================

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub path: String,
    pub size: usize,
}

pub struct InMemoryBlobStore {
    blobs: Mutex<Vec<StoredBlob>>,
    /// Progress callbacks fired per upload.
    progress_chunks: u64,
    fail_on: Mutex<Option<(String, String)>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: Mutex::new(Vec::new()),
            progress_chunks: 4,
            fail_on: Mutex::new(None),
        }
    }

    /// Fail any upload whose path contains `needle`, with `message`.
    pub fn fail_when_path_contains(&self, needle: &str, message: &str) {
        *self.fail_on.lock().unwrap() = Some((needle.to_string(), message.to_string()));
    }

    /// Every stored blob, in upload order.
    pub fn uploads(&self) -> Vec<StoredBlob> {
        self.blobs.lock().unwrap().clone()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBlobStore for InMemoryBlobStore {
    async fn upload(
        &self,
        path: &str,
        content: Bytes,
        on_progress: ProgressFn<'_>,
    ) -> Result<String> {
        let fail = self.fail_on.lock().unwrap().clone();
        if let Some((needle, message)) = fail {
            if path.contains(&needle) {
                anyhow::bail!("{}", message);
            }
        }

        let total = content.len() as u64;
        if total == 0 {
            on_progress(0, 0);
        } else {
            for chunk in 1..=self.progress_chunks {
                on_progress(total * chunk / self.progress_chunks, total);
            }
        }

        self.blobs.lock().unwrap().push(StoredBlob {
            path: path.to_string(),
            size: content.len(),
        });
        Ok(format!("inmem://{}", path))
    }
}

// =============================================================================
// Mock Identity Service
// =============================================================================

pub struct MockIdentityService {
    /// email -> (password, stable uid)
    accounts: Mutex<HashMap<String, (String, SubjectId)>>,
    current: Mutex<Option<AuthSubject>>,
    listeners: Mutex<HashMap<u64, SubjectListener>>,
    next_subscription: AtomicU64,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            current: Mutex::new(None),
            listeners: Mutex::new(HashMap::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Test shortcut: fabricate a signed-in subject without credentials.
    pub fn sign_in_as(&self, email: &str) -> AuthSubject {
        let subject = AuthSubject {
            uid: SubjectId::new(),
            email: Some(email.to_string()),
            display_name: None,
        };
        *self.current.lock().unwrap() = Some(subject.clone());
        self.notify(Some(subject.clone()));
        subject
    }

    fn notify(&self, subject: Option<AuthSubject>) {
        // Call outside the lock so listeners may re-enter
        let registered: Vec<SubjectListener> =
            self.listeners.lock().unwrap().values().cloned().collect();
        for listener in registered {
            listener(subject.clone());
        }
    }
}

impl Default for MockIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIdentityService for MockIdentityService {
    fn current_subject(&self) -> Option<AuthSubject> {
        self.current.lock().unwrap().clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSubject> {
        let uid = {
            let accounts = self.accounts.lock().unwrap();
            match accounts.get(email) {
                Some((stored, uid)) if stored == password => *uid,
                _ => anyhow::bail!("Invalid email or password."),
            }
        };
        let subject = AuthSubject {
            uid,
            email: Some(email.to_string()),
            display_name: None,
        };
        *self.current.lock().unwrap() = Some(subject.clone());
        self.notify(Some(subject.clone()));
        Ok(subject)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSubject> {
        let uid = SubjectId::new();
        {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.contains_key(email) {
                anyhow::bail!("An account already exists for this email.");
            }
            accounts.insert(email.to_string(), (password.to_string(), uid));
        }
        let subject = AuthSubject {
            uid,
            email: Some(email.to_string()),
            display_name: None,
        };
        *self.current.lock().unwrap() = Some(subject.clone());
        self.notify(Some(subject.clone()));
        Ok(subject)
    }

    async fn sign_out(&self) -> Result<()> {
        let was_signed_in = self.current.lock().unwrap().take().is_some();
        if was_signed_in {
            self.notify(None);
        }
        Ok(())
    }

    fn subscribe(&self, listener: SubjectListener) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().unwrap().insert(id, listener);
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().unwrap().remove(&id.0);
    }
}

// =============================================================================
// TestDependencies - Builder for the in-memory gateway
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub listings: Arc<InMemoryListingStore>,
    pub blobs: Arc<InMemoryBlobStore>,
    pub identity: Arc<MockIdentityService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            listings: Arc::new(InMemoryListingStore::new()),
            blobs: Arc::new(InMemoryBlobStore::new()),
            identity: Arc::new(MockIdentityService::new()),
        }
    }

    /// Assemble the dependency container for effects.
    pub fn deps(&self) -> StorefrontDeps {
        StorefrontDeps::new(
            self.listings.clone(),
            self.blobs.clone(),
            self.identity.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
