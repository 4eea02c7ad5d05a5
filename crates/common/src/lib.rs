//! Shared types used across the bootstrap workspace.

pub mod types;

pub use types::EntityId;
