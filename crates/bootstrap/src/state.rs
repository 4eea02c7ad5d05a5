//! Bootstrap run state machine.

use serde::{Deserialize, Serialize};

/// The state of a bootstrap run in its lifecycle.
///
/// Transitions are strictly sequential, single pass, no retries:
/// ```text
/// Idle ──► Resetting ──► SeedingUsers ──► SeedingCatalog
///              │               │
///              ▼               ▼
///           Aborted         Aborted
///
/// SeedingCatalog ──► SeedingBooks ──► FinalizingIndexes ──► Done
/// ```
/// Only the reset and user-seeding steps can raise a fatal failure, so
/// `Aborted` is reachable from those two states alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BootstrapState {
    /// Run has not started yet.
    #[default]
    Idle,

    /// All persisted collections are being dropped.
    Resetting,

    /// User-creation commands are being dispatched (await-result).
    SeedingUsers,

    /// Catalog-entry commands are being dispatched (fire-and-forget).
    SeedingCatalog,

    /// Order-book commands are being dispatched (fire-and-forget).
    SeedingBooks,

    /// Event-log index construction has been requested.
    FinalizingIndexes,

    /// Run completed (terminal state).
    Done,

    /// A fatal failure stopped the run (terminal state).
    Aborted,
}

impl BootstrapState {
    /// Returns true if a fatal failure can occur in this state.
    pub fn can_abort(&self) -> bool {
        matches!(self, BootstrapState::Resetting | BootstrapState::SeedingUsers)
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootstrapState::Done | BootstrapState::Aborted)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapState::Idle => "Idle",
            BootstrapState::Resetting => "Resetting",
            BootstrapState::SeedingUsers => "SeedingUsers",
            BootstrapState::SeedingCatalog => "SeedingCatalog",
            BootstrapState::SeedingBooks => "SeedingBooks",
            BootstrapState::FinalizingIndexes => "FinalizingIndexes",
            BootstrapState::Done => "Done",
            BootstrapState::Aborted => "Aborted",
        }
    }
}

impl std::fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(BootstrapState::default(), BootstrapState::Idle);
    }

    #[test]
    fn test_can_abort_only_from_reset_and_user_seeding() {
        assert!(!BootstrapState::Idle.can_abort());
        assert!(BootstrapState::Resetting.can_abort());
        assert!(BootstrapState::SeedingUsers.can_abort());
        assert!(!BootstrapState::SeedingCatalog.can_abort());
        assert!(!BootstrapState::SeedingBooks.can_abort());
        assert!(!BootstrapState::FinalizingIndexes.can_abort());
        assert!(!BootstrapState::Done.can_abort());
        assert!(!BootstrapState::Aborted.can_abort());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BootstrapState::Idle.is_terminal());
        assert!(!BootstrapState::Resetting.is_terminal());
        assert!(!BootstrapState::SeedingUsers.is_terminal());
        assert!(!BootstrapState::SeedingCatalog.is_terminal());
        assert!(!BootstrapState::SeedingBooks.is_terminal());
        assert!(!BootstrapState::FinalizingIndexes.is_terminal());
        assert!(BootstrapState::Done.is_terminal());
        assert!(BootstrapState::Aborted.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(BootstrapState::Idle.to_string(), "Idle");
        assert_eq!(BootstrapState::Resetting.to_string(), "Resetting");
        assert_eq!(BootstrapState::SeedingUsers.to_string(), "SeedingUsers");
        assert_eq!(BootstrapState::SeedingCatalog.to_string(), "SeedingCatalog");
        assert_eq!(BootstrapState::SeedingBooks.to_string(), "SeedingBooks");
        assert_eq!(
            BootstrapState::FinalizingIndexes.to_string(),
            "FinalizingIndexes"
        );
        assert_eq!(BootstrapState::Done.to_string(), "Done");
        assert_eq!(BootstrapState::Aborted.to_string(), "Aborted");
    }

    #[test]
    fn test_serialization() {
        let state = BootstrapState::SeedingCatalog;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BootstrapState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
