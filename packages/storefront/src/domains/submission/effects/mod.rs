// Publish orchestration
//
// Sequential photo upload followed by the public/private document pair.
// Any failure aborts, surfaces its message, and leaves the wizard state
// untouched so the user can retry.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use thiserror::Error;

use crate::common::utils::normalize_postcode;
use crate::domains::listings::models::{Listing, ListingPrivate, ListingStatus, NewListing, NewListingPrivate};
use crate::domains::submission::machines::photos::{PhotoEvent, PhotoSet};
use crate::domains::submission::machines::{Step, SubmissionWizard, ValidationError};
use crate::kernel::{AuthSubject, StorefrontDeps};

/// Publish failure. `Display` is the message surfaced to the user; upload
/// and write failures pass the backend message through verbatim.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please sign in.")]
    NotSignedIn,
    #[error("Finish the review step before publishing.")]
    NotAtReview,
    #[error("{0}")]
    Upload(anyhow::Error),
    #[error("{0}")]
    Write(anyhow::Error),
}

/// The two documents written by a successful publish.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    pub listing: Listing,
    pub private: ListingPrivate,
}

/// Publish the wizard's listing: re-validate steps 1-3, upload every photo
/// in order, then write the public listing and its private contact record.
///
/// The private write runs only after the public write succeeded and is not
/// rolled back if it fails - that window leaves an orphan public listing
/// with no contact record.
pub async fn publish(
    deps: &StorefrontDeps,
    wizard: &mut SubmissionWizard,
) -> Result<PublishReceipt, PublishError> {
    if wizard.step() != Step::Review {
        return Err(PublishError::NotAtReview);
    }
    wizard.validate_all()?;

    let subject = deps
        .identity
        .current_subject()
        .ok_or(PublishError::NotSignedIn)?;

    // Upload photos in the current order (index 0 is cover)
    let images = upload_all(deps, &subject, wizard.photos_handle()).await?;

    let price = wizard
        .vehicle
        .price_value()
        .ok_or(PublishError::Validation(ValidationError::InvalidPrice))?;

    let title = {
        let suggestion = wizard.vehicle.title_suggestion();
        if suggestion.is_empty() {
            format!("{} {}", wizard.vehicle.make, wizard.vehicle.model)
                .trim()
                .to_string()
        } else {
            suggestion
        }
    };

    // The postcode is omitted from the public document for privacy
    let new_listing = NewListing {
        owner_uid: subject.uid,
        category: wizard.vehicle.category.clone(),
        title,
        make: wizard.vehicle.make.trim().to_string(),
        model: wizard.vehicle.model.trim().to_string(),
        year: wizard.vehicle.year_value(),
        mileage: wizard.vehicle.mileage_value(),
        fuel: wizard.vehicle.fuel.clone(),
        transmission: wizard.vehicle.transmission.clone(),
        body: wizard.vehicle.body.clone(),
        colour: none_if_empty(wizard.vehicle.colour.trim()),
        description: none_if_empty(wizard.vehicle.description.trim()),
        price,
        images,
        status: ListingStatus::Live,
        is_premium: false,
        premium_until: None,
        post_town: None,
        seats: None,
        has_tow_bar: None,
        has_warranty: None,
    };

    let listing = deps
        .listings
        .create_listing(new_listing)
        .await
        .map_err(PublishError::Write)?;
    tracing::info!(listing_id = %listing.id, "Published listing");

    // Store the postcode privately (owner-only)
    let private = deps
        .listings
        .create_private(NewListingPrivate {
            listing_id: listing.id,
            owner_uid: subject.uid,
            postcode: normalize_postcode(&wizard.contact.postcode),
        })
        .await
        .map_err(PublishError::Write)?;

    wizard.reset();
    Ok(PublishReceipt { listing, private })
}

/// Upload every pending photo sequentially, updating its progress and URL
/// in place. File order is the final `images` order; index 0's URL becomes
/// the cover image.
async fn upload_all(
    deps: &StorefrontDeps,
    subject: &AuthSubject,
    photos: Arc<Mutex<PhotoSet>>,
) -> Result<Vec<String>, PublishError> {
    let files = photos.lock().unwrap().files();
    let mut urls = Vec::with_capacity(files.len());

    for (index, file) in files.into_iter().enumerate() {
        let path = format!(
            "user_uploads/{}/{}_{}_{}",
            subject.uid,
            Utc::now().timestamp_millis(),
            index,
            file.file_name
        );

        let progress_photos = Arc::clone(&photos);
        let on_progress = move |transferred: u64, total: u64| {
            let pct = if total == 0 {
                100
            } else {
                ((transferred as f64 / total as f64) * 100.0).round() as u8
            };
            progress_photos
                .lock()
                .unwrap()
                .apply(PhotoEvent::Progress { index, pct });
        };

        let url = deps
            .blobs
            .upload(&path, file.content.clone(), &on_progress)
            .await
            .map_err(PublishError::Upload)?;

        photos.lock().unwrap().apply(PhotoEvent::Uploaded {
            index,
            url: url.clone(),
        });
        urls.push(url);
    }

    Ok(urls)
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
