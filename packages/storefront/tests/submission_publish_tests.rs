//! Integration tests for the submission wizard's publish sequence.
//!
//! Covers the happy path, the auth fail-fast, upload failure mid-sequence,
//! and the documented partial-failure window between the two document
//! writes.

mod common;

use crate::common::TestHarness;
use bytes::Bytes;
use storefront_core::domains::listings::models::{Category, ListingStatus};
use storefront_core::domains::submission::{publish, PhotoFile, PublishError, Step, SubmissionWizard};
use storefront_core::kernel::BaseIdentityService;
use test_context::test_context;

fn filled_wizard(photos: &[&str]) -> SubmissionWizard {
    let mut wizard = SubmissionWizard::new();
    wizard.vehicle.make = "Ford".to_string();
    wizard.vehicle.model = "Fiesta".to_string();
    wizard.vehicle.year = "2017".to_string();
    wizard.vehicle.price = "8995".to_string();
    wizard.add_photos(
        photos
            .iter()
            .map(|name| PhotoFile::new(*name, Bytes::from(vec![0xAB; 2048])))
            .collect(),
    );
    wizard.contact.name = "Alex Seller".to_string();
    wizard.contact.phone = "+447700900000".to_string();
    wizard.contact.postcode = "SW1A 1AA".to_string();
    wizard
}

fn at_review(mut wizard: SubmissionWizard) -> SubmissionWizard {
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();
    assert_eq!(wizard.step(), Step::Review);
    wizard
}

// =============================================================================
// Happy path
// =============================================================================

/// Publishing writes the public document, exactly one linked private
/// record with the normalised postcode, and resets the wizard.
#[test_context(TestHarness)]
#[tokio::test]
async fn publish_writes_both_documents(ctx: &TestHarness) {
    let mut wizard = at_review(filled_wizard(&["front.jpg"]));

    let receipt = publish(&ctx.deps, &mut wizard).await.unwrap();

    assert_eq!(receipt.listing.title, "2017 Ford Fiesta");
    assert_eq!(receipt.listing.images.len(), 1);
    assert_eq!(receipt.listing.status, ListingStatus::Live);
    assert_eq!(receipt.listing.owner_uid, ctx.subject.uid);
    assert!(!receipt.listing.is_premium);
    assert_eq!(receipt.listing.premium_until, None);
    assert_eq!(receipt.listing.created_at, receipt.listing.updated_at);

    let privates = ctx.gateway.listings.privates();
    assert_eq!(privates.len(), 1);
    assert_eq!(privates[0].listing_id, receipt.listing.id);
    assert_eq!(privates[0].postcode, "SW1A1AA");

    // The postcode never reaches the public document
    let public = serde_json::to_string(&receipt.listing).unwrap();
    assert!(!public.contains("SW1A1AA"));

    // Wizard state resets for the next listing
    assert_eq!(wizard.step(), Step::Vehicle);
    assert!(wizard.vehicle.make.is_empty());
    assert!(wizard.photos().is_empty());
}

/// Photos upload sequentially in list order; index 0 becomes the cover.
#[test_context(TestHarness)]
#[tokio::test]
async fn upload_order_is_image_order(ctx: &TestHarness) {
    let wizard = filled_wizard(&["front.jpg", "interior.jpg", "rear.jpg"]);
    // Promote the rear shot to cover before publishing
    wizard.set_cover(2);
    let mut wizard = at_review(wizard);

    let receipt = publish(&ctx.deps, &mut wizard).await.unwrap();

    let uploads = ctx.gateway.blobs.uploads();
    assert_eq!(uploads.len(), 3);
    assert!(uploads[0].path.contains("_0_rear.jpg"));
    assert!(uploads[1].path.contains("_1_front.jpg"));
    assert!(uploads[2].path.contains("_2_interior.jpg"));
    assert!(uploads[0]
        .path
        .starts_with(&format!("user_uploads/{}/", ctx.subject.uid)));

    assert_eq!(receipt.listing.images.len(), 3);
    assert!(receipt.listing.images[0].contains("rear.jpg"));
    assert_eq!(receipt.listing.cover_image(), Some(receipt.listing.images[0].as_str()));
}

// =============================================================================
// Gates
// =============================================================================

/// Publish is only reachable from the review step.
#[test_context(TestHarness)]
#[tokio::test]
async fn publish_requires_review_step(ctx: &TestHarness) {
    let mut wizard = filled_wizard(&["front.jpg"]);
    let err = publish(&ctx.deps, &mut wizard).await.unwrap_err();
    assert!(matches!(err, PublishError::NotAtReview));
    assert!(ctx.gateway.listings.listings().is_empty());
}

/// A wizard with zero photos cannot pass step 2, and a forced publish is
/// blocked by the re-validation with no documents written.
#[test_context(TestHarness)]
#[tokio::test]
async fn zero_photos_blocks_before_any_write(ctx: &TestHarness) {
    let mut wizard = filled_wizard(&[]);
    wizard.next().unwrap();
    assert_eq!(
        wizard.next().unwrap_err().to_string(),
        "Add at least one photo."
    );

    assert!(ctx.gateway.listings.listings().is_empty());
    assert!(ctx.gateway.blobs.uploads().is_empty());
}

/// No signed-in subject fails fast before any upload or write.
#[test_context(TestHarness)]
#[tokio::test]
async fn publish_fails_fast_when_signed_out(ctx: &TestHarness) {
    let mut wizard = at_review(filled_wizard(&["front.jpg"]));
    ctx.gateway.identity.sign_out().await.unwrap();

    let err = publish(&ctx.deps, &mut wizard).await.unwrap_err();
    assert_eq!(err.to_string(), "Please sign in.");
    assert!(ctx.gateway.blobs.uploads().is_empty());
    assert!(ctx.gateway.listings.listings().is_empty());
    // Entered state is preserved for retry
    assert_eq!(wizard.vehicle.make, "Ford");
    assert_eq!(wizard.step(), Step::Review);
}

// =============================================================================
// Failure mid-sequence
// =============================================================================

/// An upload failure aborts the remaining uploads, writes no documents,
/// surfaces the backend message verbatim, and preserves the wizard.
#[test_context(TestHarness)]
#[tokio::test]
async fn upload_failure_aborts_and_preserves_state(ctx: &TestHarness) {
    let mut wizard = at_review(filled_wizard(&["front.jpg", "interior.jpg", "rear.jpg"]));
    ctx.gateway
        .blobs
        .fail_when_path_contains("_1_", "storage quota exceeded");

    let err = publish(&ctx.deps, &mut wizard).await.unwrap_err();
    assert_eq!(err.to_string(), "storage quota exceeded");
    assert!(matches!(err, PublishError::Upload(_)));

    // Photo 0 finished, photo 1 failed, photo 2 never started
    assert_eq!(ctx.gateway.blobs.uploads().len(), 1);
    let photos = wizard.photos();
    assert_eq!(photos[0].progress, 100);
    assert!(photos[0].url.is_some());
    assert!(photos[1].url.is_none());
    assert!(photos[2].url.is_none());

    // No partial listing was written
    assert!(ctx.gateway.listings.listings().is_empty());
    assert!(ctx.gateway.listings.privates().is_empty());
    assert_eq!(wizard.step(), Step::Review);
}

/// A public-write failure surfaces verbatim and leaves nothing behind.
#[test_context(TestHarness)]
#[tokio::test]
async fn public_write_failure_leaves_no_documents(ctx: &TestHarness) {
    let mut wizard = at_review(filled_wizard(&["front.jpg"]));
    ctx.gateway
        .listings
        .fail_next_create_listing("permission denied");

    let err = publish(&ctx.deps, &mut wizard).await.unwrap_err();
    assert_eq!(err.to_string(), "permission denied");
    assert!(matches!(err, PublishError::Write(_)));
    assert!(ctx.gateway.listings.listings().is_empty());
    assert!(ctx.gateway.listings.privates().is_empty());
    assert_eq!(wizard.vehicle.model, "Fiesta");
}

/// The documented gap: a private-write failure after a successful public
/// write is not rolled back and leaves an orphan public listing.
#[test_context(TestHarness)]
#[tokio::test]
async fn private_write_failure_leaves_orphan_public_listing(ctx: &TestHarness) {
    let mut wizard = at_review(filled_wizard(&["front.jpg"]));
    ctx.gateway
        .listings
        .fail_next_create_private("private collection unavailable");

    let err = publish(&ctx.deps, &mut wizard).await.unwrap_err();
    assert_eq!(err.to_string(), "private collection unavailable");

    assert_eq!(ctx.gateway.listings.listings().len(), 1);
    assert!(ctx.gateway.listings.privates().is_empty());
    // The wizard is preserved so the user may retry
    assert_eq!(wizard.step(), Step::Review);
}

// =============================================================================
// Listing fields
// =============================================================================

/// Optional vehicle fields null out exactly as entered: blank strings are
/// omitted, unparseable numerics become null.
#[test_context(TestHarness)]
#[tokio::test]
async fn optional_fields_null_out(ctx: &TestHarness) {
    let mut wizard = filled_wizard(&["front.jpg"]);
    wizard.vehicle.category = Category::Bikes;
    wizard.vehicle.mileage = "unknown".to_string();
    wizard.vehicle.colour = "   ".to_string();
    wizard.vehicle.description = String::new();
    let mut wizard = at_review(wizard);

    let receipt = publish(&ctx.deps, &mut wizard).await.unwrap();
    assert_eq!(receipt.listing.category, Category::Bikes);
    assert_eq!(receipt.listing.mileage, None);
    assert_eq!(receipt.listing.colour, None);
    assert_eq!(receipt.listing.description, None);
    assert_eq!(receipt.listing.fuel, None);
    assert_eq!(receipt.listing.year, Some(2017));
    assert_eq!(receipt.listing.price, 8995.0);
}
