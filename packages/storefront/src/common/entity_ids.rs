//! Typed id definitions for all document entities.
//!
//! # Example
//!
//! ```rust
//! use storefront_core::common::{ListingId, SubjectId};
//!
//! // These are incompatible types - the compiler prevents mixing them up
//! let listing_id: ListingId = ListingId::new();
//! let subject_id: SubjectId = SubjectId::new();
//!
//! // This would be a compile error:
//! // let wrong: ListingId = subject_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for public listing documents.
pub struct Listing;

/// Marker type for private contact records.
pub struct ListingPrivate;

/// Marker type for identity subjects (signed-in users).
pub struct Subject;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed id for public listing documents.
pub type ListingId = Id<Listing>;

/// Typed id for private contact records.
pub type ListingPrivateId = Id<ListingPrivate>;

/// Typed id for identity subjects.
pub type SubjectId = Id<Subject>;
