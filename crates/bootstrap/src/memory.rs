//! In-memory trading store implementing all three bootstrap ports.
//!
//! Commands are processed inline on dispatch, which makes the store
//! deterministic for tests; the `set_projection_lag` switch reintroduces
//! the lag a real query projection can exhibit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::EntityId;
use tokio::sync::RwLock;

use crate::admin::{Collection, StoreAdmin};
use crate::command::TraderCommand;
use crate::dispatch::{CommandBus, DispatchMode};
use crate::error::BootstrapError;
use crate::query::{CatalogEntryView, CatalogQuery};

/// One entry in the in-memory event log.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub command_type: &'static str,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

/// One dispatch observed by the bus, with the discipline it was made under.
#[derive(Debug, Clone)]
pub struct DispatchRecord {
    pub mode: DispatchMode,
    pub command: TraderCommand,
}

#[derive(Debug, Clone)]
struct UserRecord {
    display_name: String,
    login_name: String,
}

#[derive(Debug, Clone)]
struct OrderBookRecord {
    book_id: EntityId,
    catalog_entry_id: EntityId,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<EntityId, UserRecord>,
    catalog_entries: Vec<CatalogEntryView>,
    order_books: Vec<OrderBookRecord>,
    orders: Vec<serde_json::Value>,
    trades_executed: Vec<serde_json::Value>,
    domain_events: Vec<RecordedEvent>,
    snapshot_events: Vec<RecordedEvent>,

    dispatch_log: Vec<DispatchRecord>,
    indexes_built: bool,
    ensure_indexes_calls: u32,

    unreachable: bool,
    fail_create_user: bool,
    fail_next_fire_and_forget: bool,
    fail_ensure_indexes: bool,
    projection_lag: bool,
}

impl StoreState {
    fn record_event(&mut self, command: &TraderCommand) -> Result<(), BootstrapError> {
        let payload = serde_json::to_value(command)?;
        self.domain_events.push(RecordedEvent {
            command_type: command.command_type(),
            payload,
            recorded_at: Utc::now(),
        });
        Ok(())
    }

    /// Processes one command, mutating collections and appending to the
    /// event log. Returns the identifier of the created entity, if the
    /// command produces one.
    fn process(&mut self, command: TraderCommand) -> Result<Option<EntityId>, BootstrapError> {
        match &command {
            TraderCommand::CreateUser(data) => {
                if self.fail_create_user {
                    return Err(BootstrapError::AwaitedDispatch {
                        command: command.command_type().to_string(),
                        reason: "simulated handler failure".to_string(),
                    });
                }
                let id = EntityId::new();
                self.users.insert(
                    id,
                    UserRecord {
                        display_name: data.display_name.clone(),
                        login_name: data.login_name.clone(),
                    },
                );
                self.record_event(&command)?;
                Ok(Some(id))
            }
            TraderCommand::CreateCatalogEntry(data) => {
                if !self.users.contains_key(&data.owner_id) {
                    return Err(BootstrapError::AwaitedDispatch {
                        command: command.command_type().to_string(),
                        reason: format!("unknown owner {}", data.owner_id),
                    });
                }
                let id = EntityId::new();
                self.catalog_entries.push(CatalogEntryView {
                    identifier: id,
                    owner_id: data.owner_id,
                    name: data.name.clone(),
                    quantity: data.quantity,
                    unit_price: data.unit_price,
                });
                self.record_event(&command)?;
                Ok(Some(id))
            }
            TraderCommand::CreateOrderBook(data) => {
                if !self
                    .catalog_entries
                    .iter()
                    .any(|e| e.identifier == data.catalog_entry_id)
                {
                    return Err(BootstrapError::AwaitedDispatch {
                        command: command.command_type().to_string(),
                        reason: format!("unknown catalog entry {}", data.catalog_entry_id),
                    });
                }
                self.order_books.push(OrderBookRecord {
                    book_id: EntityId::new(),
                    catalog_entry_id: data.catalog_entry_id,
                });
                self.record_event(&command)?;
                Ok(None)
            }
        }
    }
}

/// In-memory trading store backing the command, query, and admin ports.
#[derive(Clone, Default)]
pub struct InMemoryTradingStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryTradingStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every admin operation fail as if the store were down.
    pub async fn set_unreachable(&self, unreachable: bool) {
        self.state.write().await.unreachable = unreachable;
    }

    /// Makes `CreateUser` handling fail, simulating an awaited dispatch
    /// failure.
    pub async fn set_fail_create_user(&self, fail: bool) {
        self.state.write().await.fail_create_user = fail;
    }

    /// Makes the next fire-and-forget dispatch fail on the handler side.
    /// The failure is discarded at the dispatch boundary, per contract.
    pub async fn set_fail_next_fire_and_forget(&self) {
        self.state.write().await.fail_next_fire_and_forget = true;
    }

    /// Makes `ensure_indexes` return an error.
    pub async fn set_fail_ensure_indexes(&self, fail: bool) {
        self.state.write().await.fail_ensure_indexes = fail;
    }

    /// Hides catalog entries from the query port, simulating a projection
    /// that lags behind command processing.
    pub async fn set_projection_lag(&self, lag: bool) {
        self.state.write().await.projection_lag = lag;
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn catalog_entry_count(&self) -> usize {
        self.state.read().await.catalog_entries.len()
    }

    pub async fn order_book_count(&self) -> usize {
        self.state.read().await.order_books.len()
    }

    /// Identifiers of the order books themselves, in creation order.
    pub async fn order_book_ids(&self) -> Vec<EntityId> {
        self.state
            .read()
            .await
            .order_books
            .iter()
            .map(|b| b.book_id)
            .collect()
    }

    /// Catalog-entry identifiers the order books reference, in creation
    /// order.
    pub async fn order_book_entry_ids(&self) -> Vec<EntityId> {
        self.state
            .read()
            .await
            .order_books
            .iter()
            .map(|b| b.catalog_entry_id)
            .collect()
    }

    /// Login names of all stored users, sorted.
    pub async fn login_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .read()
            .await
            .users
            .values()
            .map(|u| u.login_name.clone())
            .collect();
        names.sort();
        names
    }

    /// Display names of all stored users, sorted.
    pub async fn display_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .read()
            .await
            .users
            .values()
            .map(|u| u.display_name.clone())
            .collect();
        names.sort();
        names
    }

    /// Total number of events in the event log.
    pub async fn event_count(&self) -> usize {
        self.state.read().await.domain_events.len()
    }

    /// Every dispatch the bus has seen, in order, with its mode.
    pub async fn dispatch_log(&self) -> Vec<DispatchRecord> {
        self.state.read().await.dispatch_log.clone()
    }

    pub async fn indexes_built(&self) -> bool {
        self.state.read().await.indexes_built
    }

    pub async fn ensure_indexes_calls(&self) -> u32 {
        self.state.read().await.ensure_indexes_calls
    }
}

#[async_trait]
impl CommandBus for InMemoryTradingStore {
    async fn dispatch(&self, command: TraderCommand) {
        let mut state = self.state.write().await;
        state.dispatch_log.push(DispatchRecord {
            mode: DispatchMode::FireAndForget,
            command: command.clone(),
        });

        if state.fail_next_fire_and_forget {
            state.fail_next_fire_and_forget = false;
            return;
        }

        // Fire-and-forget: the outcome is discarded at the boundary.
        let _ = state.process(command);
    }

    async fn dispatch_for_result(
        &self,
        command: TraderCommand,
    ) -> Result<EntityId, BootstrapError> {
        let mut state = self.state.write().await;
        state.dispatch_log.push(DispatchRecord {
            mode: DispatchMode::AwaitResult,
            command: command.clone(),
        });

        let command_type = command.command_type();
        match state.process(command)? {
            Some(id) => Ok(id),
            None => Err(BootstrapError::AwaitedDispatch {
                command: command_type.to_string(),
                reason: "command produced no identifier".to_string(),
            }),
        }
    }
}

#[async_trait]
impl CatalogQuery for InMemoryTradingStore {
    async fn list_all_catalog_entries(&self) -> Vec<CatalogEntryView> {
        let state = self.state.read().await;
        if state.projection_lag {
            return Vec::new();
        }
        state.catalog_entries.clone()
    }
}

#[async_trait]
impl StoreAdmin for InMemoryTradingStore {
    async fn drop_collection(&self, collection: Collection) -> Result<(), BootstrapError> {
        let mut state = self.state.write().await;
        if state.unreachable {
            return Err(BootstrapError::Reset(format!(
                "store unreachable, cannot drop {collection}"
            )));
        }
        match collection {
            Collection::Users => state.users.clear(),
            Collection::CatalogEntries => state.catalog_entries.clear(),
            Collection::OrderBooks => state.order_books.clear(),
            Collection::Orders => state.orders.clear(),
            Collection::TradesExecuted => state.trades_executed.clear(),
            Collection::DomainEvents => state.domain_events.clear(),
            Collection::SnapshotEvents => state.snapshot_events.clear(),
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> Result<(), BootstrapError> {
        let mut state = self.state.write().await;
        if state.unreachable {
            return Err(BootstrapError::IndexBuild("store unreachable".to_string()));
        }
        state.ensure_indexes_calls += 1;
        if state.fail_ensure_indexes {
            return Err(BootstrapError::IndexBuild(
                "simulated index build failure".to_string(),
            ));
        }
        state.indexes_built = true;
        Ok(())
    }

    async fn collection_names(&self) -> Vec<String> {
        let state = self.state.read().await;
        Collection::ALL
            .iter()
            .filter(|collection| match collection {
                Collection::Users => !state.users.is_empty(),
                Collection::CatalogEntries => !state.catalog_entries.is_empty(),
                Collection::OrderBooks => !state.order_books.is_empty(),
                Collection::Orders => !state.orders.is_empty(),
                Collection::TradesExecuted => !state.trades_executed.is_empty(),
                Collection::DomainEvents => !state.domain_events.is_empty(),
                Collection::SnapshotEvents => !state.snapshot_events.is_empty(),
            })
            .map(|collection| collection.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_user_produces_identifier() {
        let store = InMemoryTradingStore::new();
        let id = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();

        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.event_count().await, 1);
        assert_eq!(store.login_names().await, ["buyer1"]);
        assert_eq!(store.display_names().await, ["Buyer One"]);

        // Identifier is stable: creating another user yields a different one.
        let other = store
            .dispatch_for_result(TraderCommand::create_user("Buyer two", "buyer2", "buyer2"))
            .await
            .unwrap();
        assert_ne!(id, other);
    }

    #[tokio::test]
    async fn test_catalog_entry_requires_known_owner() {
        let store = InMemoryTradingStore::new();

        // Fire-and-forget with an unknown owner is silently dropped.
        store
            .dispatch(TraderCommand::create_catalog_entry(
                EntityId::new(),
                "Philips",
                1000,
                10_000,
            ))
            .await;
        assert_eq!(store.catalog_entry_count().await, 0);

        let owner = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();
        store
            .dispatch(TraderCommand::create_catalog_entry(
                owner, "Philips", 1000, 10_000,
            ))
            .await;
        assert_eq!(store.catalog_entry_count().await, 1);

        let views = store.list_all_catalog_entries().await;
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].owner_id, owner);
        assert_eq!(views[0].name, "Philips");
    }

    #[tokio::test]
    async fn test_fire_and_forget_failure_is_swallowed() {
        let store = InMemoryTradingStore::new();
        let owner = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();

        store.set_fail_next_fire_and_forget().await;
        store
            .dispatch(TraderCommand::create_catalog_entry(
                owner, "Shell", 500, 5_000,
            ))
            .await;

        // No entry created, no error surfaced, but the dispatch was seen.
        assert_eq!(store.catalog_entry_count().await, 0);
        assert_eq!(store.dispatch_log().await.len(), 2);

        // The failure switch is one-shot.
        store
            .dispatch(TraderCommand::create_catalog_entry(
                owner, "Shell", 500, 5_000,
            ))
            .await;
        assert_eq!(store.catalog_entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_awaited_failure_surfaces() {
        let store = InMemoryTradingStore::new();
        store.set_fail_create_user(true).await;

        let result = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await;
        assert!(matches!(
            result,
            Err(BootstrapError::AwaitedDispatch { .. })
        ));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_drop_collection_is_idempotent() {
        let store = InMemoryTradingStore::new();
        store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();
        assert_eq!(store.user_count().await, 1);

        store.drop_collection(Collection::Users).await.unwrap();
        assert_eq!(store.user_count().await, 0);
        // Dropping an already-empty collection succeeds.
        store.drop_collection(Collection::Users).await.unwrap();
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_drops() {
        let store = InMemoryTradingStore::new();
        store.set_unreachable(true).await;

        let result = store.drop_collection(Collection::Users).await;
        assert!(matches!(result, Err(BootstrapError::Reset(_))));
    }

    #[tokio::test]
    async fn test_collection_names_reflect_contents() {
        let store = InMemoryTradingStore::new();
        assert!(store.collection_names().await.is_empty());

        let owner = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();
        store
            .dispatch(TraderCommand::create_catalog_entry(
                owner, "Bp", 15_000, 100_000,
            ))
            .await;

        assert_eq!(
            store.collection_names().await,
            ["users", "catalog_entries", "domain_events"]
        );
    }

    #[tokio::test]
    async fn test_projection_lag_hides_entries() {
        let store = InMemoryTradingStore::new();
        let owner = store
            .dispatch_for_result(TraderCommand::create_user("Buyer One", "buyer1", "buyer1"))
            .await
            .unwrap();
        store
            .dispatch(TraderCommand::create_catalog_entry(
                owner, "Philips", 1000, 10_000,
            ))
            .await;

        store.set_projection_lag(true).await;
        assert!(store.list_all_catalog_entries().await.is_empty());
        // The write itself happened; only the view lags.
        assert_eq!(store.catalog_entry_count().await, 1);

        store.set_projection_lag(false).await;
        assert_eq!(store.list_all_catalog_entries().await.len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_indexes_counts_calls() {
        let store = InMemoryTradingStore::new();
        assert!(!store.indexes_built().await);

        store.ensure_indexes().await.unwrap();
        assert!(store.indexes_built().await);
        assert_eq!(store.ensure_indexes_calls().await, 1);

        store.set_fail_ensure_indexes(true).await;
        assert!(store.ensure_indexes().await.is_err());
        assert_eq!(store.ensure_indexes_calls().await, 2);
    }
}
