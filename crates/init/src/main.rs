//! Seeding host entry point.
//!
//! Runs exactly one bootstrap pass at startup and exits. A fatal
//! bootstrap error is a startup failure: the process exits non-zero.

mod config;

use bootstrap::{Bootstrapper, InMemoryTradingStore, SeedDataset};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Build the store and the dataset
    let store = InMemoryTradingStore::new();
    let dataset = SeedDataset::demo().with_synthetic_entries(config.synthetic_entries);
    tracing::info!(
        users = dataset.users.len(),
        entries = dataset.catalog_entries.len(),
        "starting bootstrap run"
    );

    // 3. Run one bootstrap pass
    let mut bootstrapper = Bootstrapper::new(store.clone(), store.clone(), store);
    if let Err(e) = bootstrapper.run(&dataset).await {
        tracing::error!(error = %e, state = %bootstrapper.state(), "bootstrap failed");
        std::process::exit(1);
    }

    // 4. Smoke-test the result
    let summary = bootstrapper.summarize().await;
    tracing::info!(state = %bootstrapper.state(), %summary, "store ready");
}
