//! Store reset coordination.

use crate::admin::{Collection, StoreAdmin};
use crate::error::BootstrapError;

/// Clears all persisted collections before a seeding run.
pub struct StoreReset<A: StoreAdmin> {
    admin: A,
}

impl<A: StoreAdmin> StoreReset<A> {
    pub fn new(admin: A) -> Self {
        Self { admin }
    }

    /// Unconditionally drops every named collection, in
    /// [`Collection::ALL`] order.
    ///
    /// Idempotent: resetting an already-empty store succeeds with no
    /// observable difference. Any drop failure is fatal and must abort the
    /// whole bootstrap before a single command is dispatched; seeding on
    /// top of stale state is worse than not seeding at all.
    #[tracing::instrument(skip(self))]
    pub async fn reset_all(&self) -> Result<(), BootstrapError> {
        for collection in Collection::ALL {
            self.admin.drop_collection(collection).await?;
            tracing::debug!(%collection, "collection dropped");
        }
        tracing::info!("store reset complete");
        Ok(())
    }
}
