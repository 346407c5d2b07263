//! Wipe-and-seed against the in-memory gateway.

use anyhow::Result;
use colored::Colorize;
use storefront_core::domains::seed::{run_seed, SeedCounts};
use storefront_core::Config;

use super::dev_gateway;

pub async fn run(config: &Config, counts: &SeedCounts, host: &str) -> Result<()> {
    let (gateway, deps, subject) = dev_gateway();

    println!("Seeding as {} on host {}", subject.uid, host);
    let report = run_seed(&deps, counts, host, config.allow_seed).await?;

    println!(
        "{} wiped {} listing(s) / {} private record(s), created {} listing(s)",
        "Done!".bright_green().bold(),
        report.wiped.listings_deleted,
        report.wiped.private_deleted,
        report.created
    );
    println!(
        "Store now holds {} public documents and {} private records (in-memory, this process only).",
        gateway.listings.listings().len(),
        gateway.listings.privates().len()
    );
    Ok(())
}
