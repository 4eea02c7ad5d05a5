//! Bootstrap sequencer for the event-sourced trading store.
//!
//! Seeds a fresh dataset by issuing commands through the command bus in a
//! fixed, single-pass sequence:
//! 1. Reset every persisted collection
//! 2. Create users (await-result; first identifier captured as owner)
//! 3. Create catalog entries (fire-and-forget, owner-tagged)
//! 4. Create one order book per catalog entry the query side lists
//! 5. Request event-log index construction
//!
//! The command-handling layer, the real event store, and the query-side
//! storage are external collaborators reached through the [`CommandBus`],
//! [`CatalogQuery`], and [`StoreAdmin`] ports; [`InMemoryTradingStore`]
//! implements all three for tests and local runs.

pub mod admin;
pub mod command;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod memory;
pub mod orchestrator;
pub mod query;
pub mod reset;
pub mod seeders;
pub mod state;

pub use admin::{Collection, StoreAdmin};
pub use command::TraderCommand;
pub use common::EntityId;
pub use dataset::{CatalogSeed, SeedDataset, UserSeed};
pub use dispatch::{CommandBus, DispatchMode};
pub use error::{BootstrapError, Result};
pub use memory::InMemoryTradingStore;
pub use orchestrator::Bootstrapper;
pub use query::{CatalogEntryView, CatalogQuery};
pub use reset::StoreReset;
pub use seeders::{BookSeeder, CatalogSeeder, UserSeeder};
pub use state::BootstrapState;
