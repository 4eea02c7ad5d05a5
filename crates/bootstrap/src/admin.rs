//! Store administration port: collection drops and index maintenance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BootstrapError;

/// The persisted collections making up the trading store.
///
/// Five query-side collections plus the event log and its snapshot log.
/// [`Collection::ALL`] fixes the order resets and summaries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Users,
    CatalogEntries,
    OrderBooks,
    Orders,
    TradesExecuted,
    DomainEvents,
    SnapshotEvents,
}

impl Collection {
    /// All collections, in reset order.
    pub const ALL: [Collection; 7] = [
        Collection::Users,
        Collection::CatalogEntries,
        Collection::OrderBooks,
        Collection::Orders,
        Collection::TradesExecuted,
        Collection::DomainEvents,
        Collection::SnapshotEvents,
    ];

    /// Returns the collection name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::CatalogEntries => "catalog_entries",
            Collection::OrderBooks => "order_books",
            Collection::Orders => "orders",
            Collection::TradesExecuted => "trades_executed",
            Collection::DomainEvents => "domain_events",
            Collection::SnapshotEvents => "snapshot_events",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Administration port over the persisted store.
///
/// Offers only the maintenance operations bootstrap needs: dropping
/// collections before seeding, building event-log indexes after it, and
/// naming whatever collections currently hold data.
#[async_trait]
pub trait StoreAdmin: Send + Sync {
    /// Drops one collection. Dropping an absent or empty collection
    /// succeeds with no observable difference.
    async fn drop_collection(&self, collection: Collection) -> Result<(), BootstrapError>;

    /// (Re)builds secondary indexes on the event log after a bulk load.
    async fn ensure_indexes(&self) -> Result<(), BootstrapError>;

    /// Returns the names of collections currently holding data, in
    /// [`Collection::ALL`] order.
    async fn collection_names(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_seven_collections() {
        assert_eq!(Collection::ALL.len(), 7);
        let names: Vec<&str> = Collection::ALL.iter().map(Collection::as_str).collect();
        assert_eq!(
            names,
            [
                "users",
                "catalog_entries",
                "order_books",
                "orders",
                "trades_executed",
                "domain_events",
                "snapshot_events",
            ]
        );
    }

    #[test]
    fn display_matches_as_str() {
        for collection in Collection::ALL {
            assert_eq!(collection.to_string(), collection.as_str());
        }
    }
}
