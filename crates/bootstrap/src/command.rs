//! Commands issued against the trading store during bootstrap.

use common::EntityId;
use serde::{Deserialize, Serialize};

/// A state-changing command submitted to the command bus.
///
/// Commands are intents; the command-handling layer external to this crate
/// decides how they mutate state and assigns identifiers to created
/// entities. This crate only constructs, dispatches, and threads the
/// resulting identifiers forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TraderCommand {
    /// Create a user account. Produces the new user's [`EntityId`].
    CreateUser(CreateUserData),

    /// Create a trade catalog entry owned by an existing user.
    ///
    /// Produces an identifier for the entry, but the bootstrap sequencer
    /// never consumes it: entries are dispatched fire-and-forget and picked
    /// up again through the query side.
    CreateCatalogEntry(CreateCatalogEntryData),

    /// Create an order book for an existing catalog entry. Produces no
    /// value observed by this crate.
    CreateOrderBook(CreateOrderBookData),
}

/// Payload for [`TraderCommand::CreateUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserData {
    pub display_name: String,
    pub login_name: String,
    pub secret: String,
}

/// Payload for [`TraderCommand::CreateCatalogEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCatalogEntryData {
    /// Identifier of the owning user. Must come from a completed
    /// `CreateUser` dispatch in the same run.
    pub owner_id: EntityId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: u32,
}

/// Payload for [`TraderCommand::CreateOrderBook`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderBookData {
    /// Identifier of the underlying catalog entry, as returned by the
    /// query side.
    pub catalog_entry_id: EntityId,
}

impl TraderCommand {
    /// Builds a `CreateUser` command.
    pub fn create_user(
        display_name: impl Into<String>,
        login_name: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self::CreateUser(CreateUserData {
            display_name: display_name.into(),
            login_name: login_name.into(),
            secret: secret.into(),
        })
    }

    /// Builds a `CreateCatalogEntry` command owned by `owner_id`.
    pub fn create_catalog_entry(
        owner_id: EntityId,
        name: impl Into<String>,
        quantity: u32,
        unit_price: u32,
    ) -> Self {
        Self::CreateCatalogEntry(CreateCatalogEntryData {
            owner_id,
            name: name.into(),
            quantity,
            unit_price,
        })
    }

    /// Builds a `CreateOrderBook` command for `catalog_entry_id`.
    pub fn create_order_book(catalog_entry_id: EntityId) -> Self {
        Self::CreateOrderBook(CreateOrderBookData { catalog_entry_id })
    }

    /// Returns the command type name used in logs and event payloads.
    pub fn command_type(&self) -> &'static str {
        match self {
            TraderCommand::CreateUser(_) => "CreateUser",
            TraderCommand::CreateCatalogEntry(_) => "CreateCatalogEntry",
            TraderCommand::CreateOrderBook(_) => "CreateOrderBook",
        }
    }
}
