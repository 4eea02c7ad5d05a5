//! Query port for the catalog read model.

use async_trait::async_trait;
use common::EntityId;
use serde::{Deserialize, Serialize};

/// Query-side projection of one trade catalog entry.
///
/// Read-only from this crate's perspective. A view appears asynchronously
/// some time after the corresponding `CreateCatalogEntry` command has been
/// processed; nothing here waits for that to happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntryView {
    /// Identifier of the catalog entry aggregate.
    pub identifier: EntityId,
    /// Identifier of the owning user.
    pub owner_id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u32,
}

/// Port to the query side listing created catalog entries.
#[async_trait]
pub trait CatalogQuery: Send + Sync {
    /// Returns a full snapshot of all catalog entry views at call time,
    /// in insertion order.
    ///
    /// The snapshot is finite and not restartable; callers iterate it
    /// once. Entries whose creation commands are still being processed
    /// (or whose projection lags) are absent without error.
    async fn list_all_catalog_entries(&self) -> Vec<CatalogEntryView>;
}
