//! GraphQL client for communicating with the podcast service
//!
//! Every mutation result is normalized into a [`MutationOutcome`] before it
//! leaves this module: transport failures (network, HTTP status, malformed
//! body, top-level GraphQL errors) become `TransportError`, an
//! `{ok: false, error}` payload becomes `ApplicationError`, and only a
//! well-formed `{ok: true, ...}` payload becomes `Success`. Callers never
//! see a transport exception type.

use crate::state::{CreateAccountInput, Episode, LoginInput, Podcast};
use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::traits::ApiGateway;

/// Default API endpoint
const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

pub const LOGIN_MUTATION: &str = "\
mutation Login($loginInput: LoginInput!) {
    login(input: $loginInput) {
        ok
        error
        token
    }
}";

pub const CREATE_ACCOUNT_MUTATION: &str = "\
mutation CreateAccount($createAccountInput: CreateAccountInput!) {
    createAccount(input: $createAccountInput) {
        ok
        error
    }
}";

pub const ALL_PODCASTS_QUERY: &str = "\
query AllPodcasts {
    getAllPodcasts {
        ok
        error
        podcasts {
            id
            title
            category
            thumbnailUrl
            description
            rating
        }
    }
}";

pub const PODCAST_WITH_EPISODES_QUERY: &str = "\
query PodcastWithEpisodes($id: Int!) {
    getPodcast(input: { id: $id }) {
        ok
        error
        podcast {
            id
            title
            category
            thumbnailUrl
            description
            rating
        }
    }
    getEpisodes(input: { id: $id }) {
        ok
        error
        episodes {
            title
            description
            createdAt
        }
    }
}";

/// Result of one mutation attempt. Exactly one variant is produced per
/// `execute` call and consumed once by the outcome handler.
#[derive(Debug)]
pub enum MutationOutcome<T> {
    /// The server accepted the input
    Success(T),
    /// The server explicitly rejected well-formed input (`ok: false`)
    ApplicationError(String),
    /// The request never produced a usable server verdict
    TransportError(anyhow::Error),
}

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    pub token: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct LoginData {
    login: LoginResult,
}

#[derive(Deserialize)]
struct LoginResult {
    ok: bool,
    error: Option<String>,
    token: Option<String>,
}

#[derive(Deserialize)]
struct CreateAccountData {
    #[serde(rename = "createAccount")]
    create_account: CreateAccountResult,
}

#[derive(Deserialize)]
struct CreateAccountResult {
    ok: bool,
    error: Option<String>,
}

#[derive(Deserialize)]
struct AllPodcastsData {
    #[serde(rename = "getAllPodcasts")]
    get_all_podcasts: PodcastsResult,
}

#[derive(Deserialize)]
struct PodcastsResult {
    ok: bool,
    error: Option<String>,
    podcasts: Option<Vec<Podcast>>,
}

#[derive(Deserialize)]
struct PodcastWithEpisodesData {
    #[serde(rename = "getPodcast")]
    get_podcast: PodcastResult,
    #[serde(rename = "getEpisodes")]
    get_episodes: EpisodesResult,
}

#[derive(Deserialize)]
struct PodcastResult {
    ok: bool,
    error: Option<String>,
    podcast: Option<Podcast>,
}

#[derive(Deserialize)]
struct EpisodesResult {
    ok: bool,
    error: Option<String>,
    episodes: Option<Vec<Episode>>,
}

/// Client for communicating with the podcast service GraphQL API
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new API client. The endpoint is resolved from the
    /// `PODCAST_TUI_API_URL` environment variable, then the configured
    /// value, then the default.
    pub fn new(configured: Option<String>) -> Self {
        let endpoint = std::env::var("PODCAST_TUI_API_URL")
            .ok()
            .or(configured)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::with_endpoint(endpoint)
    }

    /// Create a client against an explicit endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One POST round trip: at most one network attempt, no retry. Returns
    /// the operation's `data` or the first failure encountered.
    async fn post<V, D>(&self, query: &str, variables: V) -> Result<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        let body: GraphQlResponse<D> = response.error_for_status()?.json().await?;
        if let Some(errors) = body.errors {
            if let Some(first) = errors.first() {
                bail!("GraphQL error: {}", first.message);
            }
        }
        body.data.ok_or_else(|| anyhow!("response carried no data"))
    }
}

#[async_trait]
impl ApiGateway for ApiClient {
    async fn login(&self, input: LoginInput) -> MutationOutcome<LoginPayload> {
        let variables = serde_json::json!({ "loginInput": input });
        let data: LoginData = match self.post(LOGIN_MUTATION, variables).await {
            Ok(data) => data,
            Err(e) => return MutationOutcome::TransportError(e),
        };
        let result = data.login;
        if !result.ok {
            return MutationOutcome::ApplicationError(
                result.error.unwrap_or_else(|| "Login failed".to_string()),
            );
        }
        match result.token {
            Some(token) => MutationOutcome::Success(LoginPayload { token }),
            None => MutationOutcome::TransportError(anyhow!("login response carried no token")),
        }
    }

    async fn create_account(&self, input: CreateAccountInput) -> MutationOutcome<()> {
        let variables = serde_json::json!({ "createAccountInput": input });
        let data: CreateAccountData = match self.post(CREATE_ACCOUNT_MUTATION, variables).await {
            Ok(data) => data,
            Err(e) => return MutationOutcome::TransportError(e),
        };
        let result = data.create_account;
        if result.ok {
            MutationOutcome::Success(())
        } else {
            MutationOutcome::ApplicationError(
                result
                    .error
                    .unwrap_or_else(|| "Account creation failed".to_string()),
            )
        }
    }

    async fn all_podcasts(&self) -> Result<Vec<Podcast>> {
        let data: AllPodcastsData = self
            .post(ALL_PODCASTS_QUERY, serde_json::Value::Null)
            .await?;
        let result = data.get_all_podcasts;
        if !result.ok {
            bail!(result
                .error
                .unwrap_or_else(|| "Failed to load podcasts".to_string()));
        }
        Ok(result.podcasts.unwrap_or_default())
    }

    async fn podcast_with_episodes(&self, id: i64) -> Result<(Podcast, Vec<Episode>)> {
        let variables = serde_json::json!({ "id": id });
        let data: PodcastWithEpisodesData =
            self.post(PODCAST_WITH_EPISODES_QUERY, variables).await?;

        let podcast_result = data.get_podcast;
        if !podcast_result.ok {
            bail!(podcast_result
                .error
                .unwrap_or_else(|| "Failed to load podcast".to_string()));
        }
        let podcast = podcast_result
            .podcast
            .ok_or_else(|| anyhow!("podcast response carried no podcast"))?;

        let episodes_result = data.get_episodes;
        if !episodes_result.ok {
            bail!(episodes_result
                .error
                .unwrap_or_else(|| "Failed to load episodes".to_string()));
        }
        Ok((podcast, episodes_result.episodes.unwrap_or_default()))
    }
}
