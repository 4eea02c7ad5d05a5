//! Declarative seed data consumed by the orchestrator.

use serde::{Deserialize, Serialize};

/// One user account to create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    pub display_name: String,
    pub login_name: String,
    pub secret: String,
}

impl UserSeed {
    /// Creates a user seed whose secret equals its login name, the
    /// convention the demo dataset uses.
    pub fn with_login_secret(display_name: impl Into<String>, login_name: impl Into<String>) -> Self {
        let login_name = login_name.into();
        Self {
            display_name: display_name.into(),
            secret: login_name.clone(),
            login_name,
        }
    }
}

/// One trade catalog entry to create.
///
/// The owner is not part of the seed: it is the identifier captured from
/// the first user created in the same run, threaded in at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u32,
}

impl CatalogSeed {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

/// The full dataset a bootstrap run seeds.
///
/// Kept declarative and externally supplied so the sequencer can be
/// exercised with alternate datasets in tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDataset {
    pub users: Vec<UserSeed>,
    pub catalog_entries: Vec<CatalogSeed>,
}

impl SeedDataset {
    /// The fixed demo dataset: four users and three catalog entries, all
    /// entries owned by the first user created.
    pub fn demo() -> Self {
        Self {
            users: vec![
                UserSeed::with_login_secret("Buyer One", "buyer1"),
                UserSeed::with_login_secret("Buyer two", "buyer2"),
                UserSeed::with_login_secret("Buyer three", "buyer3"),
                UserSeed::with_login_secret("Admin One", "admin1"),
            ],
            catalog_entries: vec![
                CatalogSeed::new("Philips", 1000, 10_000),
                CatalogSeed::new("Shell", 500, 5_000),
                CatalogSeed::new("Bp", 15_000, 100_000),
            ],
        }
    }

    /// Appends `count` synthetic catalog entries named `Stock {i}`, for
    /// load testing the seeding path.
    pub fn with_synthetic_entries(mut self, count: usize) -> Self {
        for i in 0..count {
            self.catalog_entries
                .push(CatalogSeed::new(format!("Stock {i}"), 15_000, 100_000));
        }
        self
    }
}
