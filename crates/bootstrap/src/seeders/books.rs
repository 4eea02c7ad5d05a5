//! Order-book seeding driven by the catalog read model.

use crate::command::TraderCommand;
use crate::dispatch::CommandBus;
use crate::query::CatalogQuery;

/// Creates one order book per catalog entry visible on the query side.
///
/// The catalog writes in the previous step are asynchronous relative to
/// the snapshot read taken here, and nothing synchronizes the two. If the
/// query projection lags behind command processing, entries missing from
/// the snapshot silently never get an order book: no error, no retry.
/// That blind spot is part of the fire-and-forget contract, not a bug in
/// this seeder.
pub struct BookSeeder<B: CommandBus, Q: CatalogQuery> {
    bus: B,
    query: Q,
}

impl<B: CommandBus, Q: CatalogQuery> BookSeeder<B, Q> {
    pub fn new(bus: B, query: Q) -> Self {
        Self { bus, query }
    }

    /// Snapshots the catalog once, then dispatches one fire-and-forget
    /// `CreateOrderBook` command per entry. Returns the number of
    /// dispatches made, for diagnostics.
    #[tracing::instrument(skip(self))]
    pub async fn seed_order_books(&self) -> usize {
        let entries = self.query.list_all_catalog_entries().await;

        for entry in &entries {
            self.bus
                .dispatch(TraderCommand::create_order_book(entry.identifier))
                .await;
            metrics::counter!("bootstrap_book_commands").increment(1);
        }

        tracing::info!(count = entries.len(), "order book commands dispatched");
        entries.len()
    }
}
