use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{ListingId, ListingPrivateId, SubjectId};

/// ListingPrivate - owner-only contact record, one per published listing.
///
/// Holds the contact postcode, which must never be rendered on the public
/// advert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPrivate {
    pub id: ListingPrivateId,
    pub listing_id: ListingId,
    pub owner_uid: SubjectId,
    /// Normalised: uppercase, whitespace stripped.
    pub postcode: String,
    pub created_at: DateTime<Utc>,
}

/// The client-built half of a private contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListingPrivate {
    pub listing_id: ListingId,
    pub owner_uid: SubjectId,
    pub postcode: String,
}
