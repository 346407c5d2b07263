pub mod effects;
pub mod factories;
pub mod guard;

pub use effects::{run_seed, wipe_mine, SeedCounts, SeedError, SeedReport};
pub use guard::seed_allowed;
