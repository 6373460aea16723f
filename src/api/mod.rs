//! API client module for GraphQL communication

mod client;
mod traits;

pub use client::{
    ApiClient, LoginPayload, MutationOutcome, ALL_PODCASTS_QUERY, CREATE_ACCOUNT_MUTATION,
    LOGIN_MUTATION, PODCAST_WITH_EPISODES_QUERY,
};
pub use traits::ApiGateway;

#[cfg(test)]
pub use traits::MockApiGateway;
