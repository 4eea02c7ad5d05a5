//! Command dispatch port and dispatch disciplines.

use async_trait::async_trait;
use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::command::TraderCommand;
use crate::error::BootstrapError;

/// The discipline a command was dispatched under.
///
/// The mode is chosen by the caller per call, not by command type. The
/// bootstrap sequencer awaits only where a produced identifier must be
/// threaded into a later command (user creation); everything else is
/// fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchMode {
    /// Caller blocks, without timeout, until the handler yields the
    /// produced identifier or a failure.
    AwaitResult,

    /// Caller returns immediately; handler success and failure are both
    /// unobserved. Failures are discarded at the dispatch boundary.
    FireAndForget,
}

impl DispatchMode {
    /// Returns the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchMode::AwaitResult => "AwaitResult",
            DispatchMode::FireAndForget => "FireAndForget",
        }
    }
}

impl std::fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Port to the command bus that processes state-changing commands.
///
/// The bus may process commands on its own workers; this crate interacts
/// with it only through these two calls and holds no other blocking points.
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// Fire-and-forget dispatch.
    ///
    /// Returns as soon as the command is submitted. Handler failures are
    /// intentionally discarded at this boundary and never surfaced to the
    /// caller; a failed creation is detectable only indirectly, through
    /// the query side or the store summary.
    async fn dispatch(&self, command: TraderCommand);

    /// Await-result dispatch.
    ///
    /// Blocks, with no timeout and no cancellation, until the handler
    /// yields the identifier of the created entity or fails. The result
    /// handle is consumed exactly once; failures are wrapped into
    /// [`BootstrapError::AwaitedDispatch`] by callers.
    async fn dispatch_for_result(&self, command: TraderCommand)
    -> Result<EntityId, BootstrapError>;
}
