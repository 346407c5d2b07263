//! Integration tests for the session context and detail lookup.

mod common;

use std::sync::{Arc, Mutex};

use crate::common::{base_listing, TestHarness};
use storefront_core::common::ListingId;
use storefront_core::domains::listings::{fetch_detail, ListingDetail};
use storefront_core::kernel::{AuthSubject, BaseIdentityService, BaseListingStore, SessionContext};
use test_context::test_context;

// =============================================================================
// Session context
// =============================================================================

/// Sign-in and sign-out flow through the subscription into the cached
/// subject and downstream listeners.
#[test_context(TestHarness)]
#[tokio::test]
async fn session_tracks_subject_changes(ctx: &TestHarness) {
    ctx.gateway.identity.sign_out().await.unwrap();
    let session = SessionContext::start(ctx.gateway.identity.clone());
    assert!(!session.signed_in());

    let seen: Arc<Mutex<Vec<Option<AuthSubject>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.on_change(Arc::new(move |subject| {
        sink.lock().unwrap().push(subject);
    }));

    let subject = session
        .sign_up("seller@motoradverts.test", "hunter2")
        .await
        .unwrap();
    assert_eq!(session.current(), Some(subject.clone()));

    session.sign_out().await.unwrap();
    assert!(session.current().is_none());

    // Signing back in with the same credentials keeps the stable uid
    let again = session
        .sign_in("seller@motoradverts.test", "hunter2")
        .await
        .unwrap();
    assert_eq!(again.uid, subject.uid);

    let events = seen.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(events[0].is_some());
    assert!(events[1].is_none());
    assert!(events[2].is_some());
}

/// Bad credentials surface an error and leave the session signed out.
#[test_context(TestHarness)]
#[tokio::test]
async fn sign_in_rejects_bad_credentials(ctx: &TestHarness) {
    ctx.gateway.identity.sign_out().await.unwrap();
    let session = SessionContext::start(ctx.gateway.identity.clone());

    session
        .sign_up("seller@motoradverts.test", "hunter2")
        .await
        .unwrap();
    session.sign_out().await.unwrap();

    let err = session
        .sign_in("seller@motoradverts.test", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password.");
    assert!(!session.signed_in());
}

/// After shutdown no further notifications are delivered.
#[test_context(TestHarness)]
#[tokio::test]
async fn shutdown_stops_notifications(ctx: &TestHarness) {
    let session = SessionContext::start(ctx.gateway.identity.clone());

    let seen: Arc<Mutex<Vec<Option<AuthSubject>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.on_change(Arc::new(move |subject| {
        sink.lock().unwrap().push(subject);
    }));

    session.shutdown();
    ctx.gateway.identity.sign_out().await.unwrap();
    ctx.gateway.identity.sign_in_as("late@motoradverts.test");

    assert!(seen.lock().unwrap().is_empty());
}

// =============================================================================
// Detail lookup
// =============================================================================

/// A known id returns the listing; an unknown id maps to the feed-root
/// redirect.
#[test_context(TestHarness)]
#[tokio::test]
async fn detail_lookup_finds_or_redirects(ctx: &TestHarness) {
    let created = ctx
        .gateway
        .listings
        .create_listing(base_listing(ctx.subject.uid, "2017 Ford Fiesta", 8_995.0))
        .await
        .unwrap();

    match fetch_detail(&ctx.deps, created.id).await.unwrap() {
        ListingDetail::Found(listing) => {
            assert_eq!(listing.title, "2017 Ford Fiesta");
            assert_eq!(listing.cover_image(), listing.images.first().map(String::as_str));
        }
        ListingDetail::NotFound => panic!("expected the listing to be found"),
    }

    match fetch_detail(&ctx.deps, ListingId::new()).await.unwrap() {
        ListingDetail::NotFound => {}
        ListingDetail::Found(_) => panic!("expected a redirect for an unknown id"),
    }
}
