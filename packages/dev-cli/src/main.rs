// MotorAdverts dev harness
//
// Wires the in-memory gateway, signs in a dev subject, and drives the
// storefront core from the terminal: seeding, the paginated home feed with
// premium slots, and a scripted wizard publish.

mod cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront_core::domains::seed::SeedCounts;
use storefront_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dev", about = "MotorAdverts storefront dev harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
struct CountArgs {
    #[arg(long, default_value_t = 10)]
    cars: usize,
    #[arg(long, default_value_t = 10)]
    vans: usize,
    #[arg(long, default_value_t = 10)]
    bikes: usize,
    #[arg(long, default_value_t = 5)]
    caravans: usize,
    #[arg(long, default_value_t = 5)]
    trucks: usize,
    #[arg(long, default_value_t = 5)]
    farm: usize,
}

impl CountArgs {
    fn to_counts(&self) -> SeedCounts {
        SeedCounts {
            cars: self.cars,
            vans: self.vans,
            bikes: self.bikes,
            caravans: self.caravans,
            trucks: self.trucks,
            farm: self.farm,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Wipe and seed synthetic listings, then print a report
    Seed {
        #[command(flatten)]
        counts: CountArgs,
        /// Pretend to run on this host (defaults to the machine hostname)
        #[arg(long)]
        host: Option<String>,
    },
    /// Seed, then browse the home feed page by page
    Feed {
        #[command(flatten)]
        counts: CountArgs,
        /// Category filter, e.g. "Cars" or "Farm & Plant"
        #[arg(long)]
        category: Option<String>,
        /// Quick filter key: bargains, seats7, electric, tow, warranty, within30
        #[arg(long)]
        quick: Option<String>,
        /// Pages to load via the scroll sentinel
        #[arg(long, default_value_t = 2)]
        pages: usize,
    },
    /// Run the submission wizard end to end and show the detail page
    Publish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let cli = Cli::parse();

    match cli.command {
        Command::Seed { counts, host } => {
            let host = match host {
                Some(host) => host,
                None => local_hostname(),
            };
            cmd::seed::run(&config, &counts.to_counts(), &host).await
        }
        Command::Feed {
            counts,
            category,
            quick,
            pages,
        } => cmd::feed::run(&config, &counts.to_counts(), category, quick, pages).await,
        Command::Publish => cmd::publish::run().await,
    }
}

fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "localhost".to_string())
}
