//! Premium slot interleaving
//!
//! Purely positional: within every block of BLOCK_SIZE rendered tiles, the
//! tile at the PREMIUM_SLOT_IN_BLOCK position renders as a wide premium
//! placement. A listing's stored `is_premium`/`premium_until` fields are
//! not consulted. Given the same input sequence the tagging is a pure
//! function of position.

use crate::domains::listings::models::Listing;

/// Tiles per block.
pub const BLOCK_SIZE: usize = 15;

/// 1-based position within a block that renders as the premium placement.
pub const PREMIUM_SLOT_IN_BLOCK: usize = 11;

/// How a feed cell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Standard tile.
    Listing,
    /// Wide double-column tile.
    Premium,
}

/// One rendered tile.
#[derive(Debug, Clone)]
pub struct FeedCell {
    pub kind: CellKind,
    pub listing: Listing,
}

/// Tag each listing with its rendering slot. No listing is removed,
/// duplicated, or reordered; a trailing partial block only promotes when
/// it reaches the premium position.
pub fn interleave(items: Vec<Listing>) -> Vec<FeedCell> {
    let mut out = Vec::with_capacity(items.len());
    for (i, listing) in items.into_iter().enumerate() {
        let position_in_block = i % BLOCK_SIZE + 1;
        let kind = if position_in_block == PREMIUM_SLOT_IN_BLOCK {
            CellKind::Premium
        } else {
            CellKind::Listing
        };
        out.push(FeedCell { kind, listing });
    }
    out
}
