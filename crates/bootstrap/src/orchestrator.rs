//! Bootstrap orchestrator driving the full reset-and-seed sequence.

use common::EntityId;

use crate::admin::StoreAdmin;
use crate::dataset::SeedDataset;
use crate::dispatch::CommandBus;
use crate::error::BootstrapError;
use crate::query::CatalogQuery;
use crate::reset::StoreReset;
use crate::seeders::{BookSeeder, CatalogSeeder, UserSeeder};
use crate::state::BootstrapState;

/// Drives one bootstrap run: reset, seed users, seed catalog entries,
/// seed order books, finalize indexes.
///
/// A single, non-reentrant pass per process lifetime; there is no mutual
/// exclusion against a second concurrent run. Only the reset and
/// user-seeding steps can fail the run; everything after them is
/// fire-and-forget by contract.
pub struct Bootstrapper<B, Q, A>
where
    B: CommandBus,
    Q: CatalogQuery,
    A: StoreAdmin,
{
    reset: StoreReset<A>,
    users: UserSeeder<B>,
    catalog: CatalogSeeder<B>,
    books: BookSeeder<B, Q>,
    admin: A,
    state: BootstrapState,
}

impl<B, Q, A> Bootstrapper<B, Q, A>
where
    B: CommandBus + Clone,
    Q: CatalogQuery,
    A: StoreAdmin + Clone,
{
    /// Creates a new orchestrator over the three store ports.
    pub fn new(bus: B, query: Q, admin: A) -> Self {
        Self {
            reset: StoreReset::new(admin.clone()),
            users: UserSeeder::new(bus.clone()),
            catalog: CatalogSeeder::new(bus.clone()),
            books: BookSeeder::new(bus, query),
            admin,
            state: BootstrapState::Idle,
        }
    }

    /// Returns the current run state.
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    /// Runs the full bootstrap sequence once.
    ///
    /// Best-effort and single-shot: no retries, no compensation. A fatal
    /// error during reset or user seeding leaves the store partially
    /// reset/seeded and the run in `Aborted`.
    #[tracing::instrument(skip(self, dataset), fields(users = dataset.users.len(), entries = dataset.catalog_entries.len()))]
    pub async fn run(&mut self, dataset: &SeedDataset) -> Result<(), BootstrapError> {
        metrics::counter!("bootstrap_runs_total").increment(1);
        let run_start = std::time::Instant::now();

        // 1. Reset every persisted collection before any command goes out.
        self.state = BootstrapState::Resetting;
        if let Err(e) = self.reset.reset_all().await {
            self.state = BootstrapState::Aborted;
            tracing::error!(error = %e, "bootstrap aborted during reset");
            return Err(e);
        }

        // 2. Create users, awaiting each result. Only the first identifier
        // is kept: later catalog entries are all owned by that user. The
        // other users are valid entities, just unreferenced afterwards.
        self.state = BootstrapState::SeedingUsers;
        let mut primary_owner: Option<EntityId> = None;
        for seed in &dataset.users {
            match self.users.create_user(seed).await {
                Ok(id) => {
                    if primary_owner.is_none() {
                        primary_owner = Some(id);
                    }
                }
                Err(e) => {
                    self.state = BootstrapState::Aborted;
                    tracing::error!(error = %e, "bootstrap aborted during user seeding");
                    return Err(e);
                }
            }
        }

        // 3. Catalog entries, fire-and-forget, all owned by the primary
        // user.
        self.state = BootstrapState::SeedingCatalog;
        match primary_owner {
            Some(owner) => {
                self.catalog.seed(owner, &dataset.catalog_entries).await;
            }
            None => {
                if !dataset.catalog_entries.is_empty() {
                    tracing::warn!("no users in dataset, skipping catalog entries");
                }
            }
        }

        // 4. One order book per catalog entry the query side can see.
        self.state = BootstrapState::SeedingBooks;
        let books = self.books.seed_order_books().await;

        // 5. Index construction, requested exactly once. A failure here
        // cannot abort the run anymore; it is logged and left to store
        // maintenance.
        self.state = BootstrapState::FinalizingIndexes;
        if let Err(e) = self.admin.ensure_indexes().await {
            tracing::warn!(error = %e, "event log index build failed, continuing");
        }

        self.state = BootstrapState::Done;
        let duration = run_start.elapsed().as_secs_f64();
        metrics::histogram!("bootstrap_duration_seconds").record(duration);
        tracing::info!(
            users = dataset.users.len(),
            entries = dataset.catalog_entries.len(),
            books,
            duration,
            "bootstrap run complete"
        );
        Ok(())
    }

    /// Human-readable listing of collection names currently present in
    /// the store; a quick smoke test that the reset/seed cycle touched
    /// what it should have.
    pub async fn summarize(&self) -> String {
        self.admin.collection_names().await.join("  ")
    }
}
