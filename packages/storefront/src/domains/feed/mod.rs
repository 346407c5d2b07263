pub mod effects;
pub mod interleave;
pub mod machines;
pub mod models;

// Re-export models
pub use models::{FeedFilters, QuickFilter};

// Re-export machines
pub use machines::{FeedState, PAGE_SIZE};

// Re-export effects
pub use effects::{Feed, FeedSnapshot, LoadOutcome};

// Re-export interleaving
pub use interleave::{interleave, CellKind, FeedCell, BLOCK_SIZE, PREMIUM_SLOT_IN_BLOCK};
