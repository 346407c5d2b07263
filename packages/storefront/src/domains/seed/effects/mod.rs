// Dev seeder effects: wipe-and-seed synthetic listings.
//
// Gated to loopback/private-LAN hosts (or the explicit override) and to a
// signed-in subject so every seeded document has an owner. Documents are
// written in bounded-size concurrent batches.

use futures::future::join_all;
use thiserror::Error;

use crate::domains::listings::models::{Category, ListingStatus, NewListing, NewListingPrivate};
use crate::domains::seed::factories::{self, POSTCODES, TOWNS};
use crate::domains::seed::guard::seed_allowed;
use crate::kernel::{AuthSubject, StorefrontDeps, WipeReport};

/// Concurrent writes per batch.
const SEED_CHUNK_SIZE: usize = 20;

/// Seeder failure. `Display` is the message surfaced to the user.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seeding is disabled on this host. Run on localhost/your LAN, or set ALLOW_SEED=true to override.")]
    Disabled,
    #[error("Please sign in first so listings are owned by your user.")]
    NotSignedIn,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// How many listings to create per category.
#[derive(Debug, Clone)]
pub struct SeedCounts {
    pub cars: usize,
    pub vans: usize,
    pub bikes: usize,
    pub caravans: usize,
    pub trucks: usize,
    pub farm: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            cars: 10,
            vans: 10,
            bikes: 10,
            caravans: 5,
            trucks: 5,
            farm: 5,
        }
    }
}

impl SeedCounts {
    pub fn total(&self) -> usize {
        self.cars + self.vans + self.bikes + self.caravans + self.trucks + self.farm
    }
}

/// What a wipe-and-seed run did.
#[derive(Debug, Clone, Copy)]
pub struct SeedReport {
    pub wiped: WipeReport,
    pub created: usize,
}

/// Delete every listing (and private record) owned by the signed-in
/// subject.
pub async fn wipe_mine(deps: &StorefrontDeps) -> Result<WipeReport, SeedError> {
    let subject = deps
        .identity
        .current_subject()
        .ok_or(SeedError::NotSignedIn)?;

    tracing::info!("Wiping existing listings");
    let report = deps.listings.delete_owned(subject.uid).await?;
    tracing::info!(
        listings = report.listings_deleted,
        private_records = report.private_deleted,
        "Deleted owned documents"
    );
    Ok(report)
}

/// Wipe the subject's documents, then create `counts` synthetic listings
/// across the six categories in concurrent batches.
pub async fn run_seed(
    deps: &StorefrontDeps,
    counts: &SeedCounts,
    host: &str,
    allow_override: bool,
) -> Result<SeedReport, SeedError> {
    if !seed_allowed(host, allow_override) {
        return Err(SeedError::Disabled);
    }
    let subject = deps
        .identity
        .current_subject()
        .ok_or(SeedError::NotSignedIn)?;

    let wiped = wipe_mine(deps).await?;

    let mut jobs: Vec<(Category, usize)> = Vec::with_capacity(counts.total());
    for i in 0..counts.cars {
        jobs.push((Category::Cars, i));
    }
    for i in 0..counts.vans {
        jobs.push((Category::Vans, i));
    }
    for i in 0..counts.bikes {
        jobs.push((Category::Bikes, i));
    }
    for i in 0..counts.caravans {
        jobs.push((Category::Caravans, i));
    }
    for i in 0..counts.trucks {
        jobs.push((Category::Trucks, i));
    }
    for i in 0..counts.farm {
        jobs.push((Category::FarmPlant, i));
    }

    tracing::info!(total = jobs.len(), "Writing documents in chunks");
    for (chunk_index, chunk) in jobs.chunks(SEED_CHUNK_SIZE).enumerate() {
        let from = chunk_index * SEED_CHUNK_SIZE + 1;
        tracing::info!(from, to = from + chunk.len() - 1, "Writing batch");
        let writes = chunk
            .iter()
            .map(|(category, index)| seed_one(deps, &subject, category, *index));
        for result in join_all(writes).await {
            result?;
        }
    }

    tracing::info!("Seeding done; refresh the home feed to see sample data");
    Ok(SeedReport {
        wiped,
        created: jobs.len(),
    })
}

/// Write one public/private document pair.
async fn seed_one(
    deps: &StorefrontDeps,
    subject: &AuthSubject,
    category: &Category,
    index: usize,
) -> Result<(), SeedError> {
    let vehicle = factories::build(category, index);

    let listing = deps
        .listings
        .create_listing(NewListing {
            owner_uid: subject.uid,
            category: vehicle.category,
            title: vehicle.title,
            make: vehicle.make,
            model: vehicle.model,
            year: Some(vehicle.year),
            mileage: Some(vehicle.mileage),
            fuel: vehicle.fuel,
            transmission: vehicle.transmission,
            body: vehicle.body,
            colour: Some(vehicle.colour),
            description: Some(vehicle.description),
            price: vehicle.price,
            images: vehicle.images,
            status: ListingStatus::Live,
            is_premium: false,
            premium_until: None,
            post_town: Some(TOWNS[index % TOWNS.len()].to_string()),
            seats: None,
            has_tow_bar: None,
            has_warranty: None,
        })
        .await?;

    deps.listings
        .create_private(NewListingPrivate {
            listing_id: listing.id,
            owner_uid: subject.uid,
            postcode: POSTCODES[index % POSTCODES.len()].to_string(),
        })
        .await?;

    Ok(())
}
