//! Application configuration loaded from the environment.

use anyhow::Result;

/// Runtime configuration for the storefront.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit override that lets the dev seeder run on hosts outside the
    /// loopback/private-LAN allow-list. Set `ALLOW_SEED=true` to enable.
    pub allow_seed: bool,
}

impl Config {
    /// Load configuration from environment variables (reads `.env` first).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let allow_seed = std::env::var("ALLOW_SEED")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self { allow_seed })
    }
}
