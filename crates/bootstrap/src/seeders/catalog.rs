//! Catalog-entry seeding through fire-and-forget dispatch.

use common::EntityId;

use crate::command::TraderCommand;
use crate::dataset::CatalogSeed;
use crate::dispatch::CommandBus;

/// Creates trade catalog entries, all tagged with one owner identifier.
///
/// Every dispatch here is fire-and-forget: the call returns immediately
/// and handler failures are discarded at the dispatch boundary. A failed
/// creation simply means one fewer catalog entry (and later one fewer
/// order book), with no diagnostic trail beyond the store summary.
pub struct CatalogSeeder<B: CommandBus> {
    bus: B,
}

impl<B: CommandBus> CatalogSeeder<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Dispatches one `CreateCatalogEntry` command owned by `owner_id`.
    ///
    /// The entry becomes eventually visible through the query port;
    /// timing relative to this call is not guaranteed.
    pub async fn create_catalog_entry(&self, owner_id: EntityId, seed: &CatalogSeed) {
        let command = TraderCommand::create_catalog_entry(
            owner_id,
            seed.name.clone(),
            seed.quantity,
            seed.unit_price,
        );
        self.bus.dispatch(command).await;
        metrics::counter!("bootstrap_catalog_commands").increment(1);
    }

    /// Dispatches the whole batch, all entries owned by `owner_id`.
    #[tracing::instrument(skip(self, seeds), fields(count = seeds.len()))]
    pub async fn seed(&self, owner_id: EntityId, seeds: &[CatalogSeed]) {
        for seed in seeds {
            self.create_catalog_entry(owner_id, seed).await;
        }
        tracing::info!(%owner_id, count = seeds.len(), "catalog commands dispatched");
    }
}
