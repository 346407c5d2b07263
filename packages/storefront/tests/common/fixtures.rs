//! Test fixtures for creating listing documents through the store.

use anyhow::Result;
use storefront_core::common::{ListingId, SubjectId};
use storefront_core::domains::listings::models::{
    Category, Fuel, ListingStatus, NewListing,
};
use storefront_core::kernel::test_dependencies::InMemoryListingStore;
use storefront_core::kernel::BaseListingStore;

/// A minimal live car listing owned by `owner`.
pub fn base_listing(owner: SubjectId, title: &str, price: f64) -> NewListing {
    NewListing {
        owner_uid: owner,
        category: Category::Cars,
        title: title.to_string(),
        make: "Ford".to_string(),
        model: "Fiesta".to_string(),
        year: Some(2017),
        mileage: Some(54_000),
        fuel: Some(Fuel::Petrol),
        transmission: None,
        body: None,
        colour: None,
        description: None,
        price,
        images: vec!["inmem://user_uploads/fixture/cover.jpg".to_string()],
        status: ListingStatus::Live,
        is_premium: false,
        premium_until: None,
        post_town: Some("London".to_string()),
        seats: None,
        has_tow_bar: None,
        has_warranty: None,
    }
}

/// Create `count` sequentially-titled listings and return their ids in
/// creation order (the feed returns them newest first).
pub async fn create_many(
    store: &InMemoryListingStore,
    owner: SubjectId,
    count: usize,
) -> Result<Vec<ListingId>> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let listing = store
            .create_listing(base_listing(owner, &format!("Listing {}", n), 5_000.0))
            .await?;
        ids.push(listing.id);
    }
    Ok(ids)
}
