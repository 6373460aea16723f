//! Trait abstraction for the API gateway to enable mocking in tests

use crate::state::{CreateAccountInput, Episode, LoginInput, Podcast};
use anyhow::Result;
use async_trait::async_trait;

use super::client::{LoginPayload, MutationOutcome};

/// Trait for remote API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// Execute the login mutation with the given input snapshot
    async fn login(&self, input: LoginInput) -> MutationOutcome<LoginPayload>;

    /// Execute the create-account mutation with the given input snapshot
    async fn create_account(&self, input: CreateAccountInput) -> MutationOutcome<()>;

    /// Fetch the podcast catalog
    async fn all_podcasts(&self) -> Result<Vec<Podcast>>;

    /// Fetch one podcast together with its episodes
    async fn podcast_with_episodes(&self, id: i64) -> Result<(Podcast, Vec<Episode>)>;
}
