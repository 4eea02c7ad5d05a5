//! User seeding through await-result dispatch.

use common::EntityId;

use crate::command::TraderCommand;
use crate::dataset::UserSeed;
use crate::dispatch::CommandBus;
use crate::error::BootstrapError;

/// Creates user accounts and returns their identifiers.
///
/// This is the only seeder using the await-result discipline: the owner
/// identifier produced here must be threaded into every catalog-entry
/// command, so the sequencer has to block until the handler yields it.
pub struct UserSeeder<B: CommandBus> {
    bus: B,
}

impl<B: CommandBus> UserSeeder<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Dispatches one `CreateUser` command and waits, without timeout,
    /// for the identifier of the created user.
    ///
    /// A handler failure is fatal: it is wrapped and re-raised, there is
    /// no retry, and the bootstrap run terminates.
    #[tracing::instrument(skip(self, seed), fields(login_name = %seed.login_name))]
    pub async fn create_user(&self, seed: &UserSeed) -> Result<EntityId, BootstrapError> {
        let command = TraderCommand::create_user(
            seed.display_name.clone(),
            seed.login_name.clone(),
            seed.secret.clone(),
        );

        let id = self
            .bus
            .dispatch_for_result(command)
            .await
            .map_err(|e| match e {
                BootstrapError::AwaitedDispatch { .. } => e,
                other => BootstrapError::AwaitedDispatch {
                    command: "CreateUser".to_string(),
                    reason: other.to_string(),
                },
            })?;

        metrics::counter!("bootstrap_users_created").increment(1);
        tracing::info!(%id, "user created");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryTradingStore;

    #[tokio::test]
    async fn test_create_user_returns_identifier() {
        let store = InMemoryTradingStore::new();
        let seeder = UserSeeder::new(store.clone());

        let seed = UserSeed::with_login_secret("Buyer One", "buyer1");
        let id1 = seeder.create_user(&seed).await.unwrap();

        let seed2 = UserSeed::with_login_secret("Buyer two", "buyer2");
        let id2 = seeder.create_user(&seed2).await.unwrap();

        // Distinct login names yield distinct, independent entities.
        assert_ne!(id1, id2);
        assert_eq!(store.user_count().await, 2);
        assert_eq!(store.login_names().await, ["buyer1", "buyer2"]);
    }

    #[tokio::test]
    async fn test_handler_failure_is_fatal() {
        let store = InMemoryTradingStore::new();
        store.set_fail_create_user(true).await;
        let seeder = UserSeeder::new(store.clone());

        let seed = UserSeed::with_login_secret("Buyer One", "buyer1");
        let result = seeder.create_user(&seed).await;
        assert!(matches!(
            result,
            Err(BootstrapError::AwaitedDispatch { .. })
        ));
    }
}
