pub mod listing;
pub mod listing_private;

pub use listing::{Body, Category, Fuel, Listing, ListingStatus, NewListing, Transmission};
pub use listing_private::{ListingPrivate, NewListingPrivate};
