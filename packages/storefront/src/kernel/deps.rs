//! Storefront dependencies for effects (using traits for testability)
//!
//! Central dependency container handed to all domain effects. Every
//! external service sits behind a trait abstraction so the in-memory
//! gateway can stand in during tests and dev runs.

use std::sync::Arc;

use crate::kernel::{BaseBlobStore, BaseIdentityService, BaseListingStore};

/// Gateway dependencies accessible to effects.
#[derive(Clone)]
pub struct StorefrontDeps {
    pub listings: Arc<dyn BaseListingStore>,
    pub blobs: Arc<dyn BaseBlobStore>,
    pub identity: Arc<dyn BaseIdentityService>,
}

impl StorefrontDeps {
    /// Create new StorefrontDeps with the given gateway services
    pub fn new(
        listings: Arc<dyn BaseListingStore>,
        blobs: Arc<dyn BaseBlobStore>,
        identity: Arc<dyn BaseIdentityService>,
    ) -> Self {
        Self {
            listings,
            blobs,
            identity,
        }
    }
}
