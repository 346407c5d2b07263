pub mod effects;
pub mod models;

// Re-export models (domain models)
pub use models::listing::{
    Body, Category, Fuel, Listing, ListingStatus, NewListing, Transmission,
};
pub use models::listing_private::{ListingPrivate, NewListingPrivate};

// Re-export effects
pub use effects::{fetch_detail, ListingDetail};
