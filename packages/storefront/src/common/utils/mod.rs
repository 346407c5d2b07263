// Shared utility helpers

pub mod postcode;

pub use postcode::{looks_like_uk_postcode, normalize_postcode};
