//! Client for the dashboard backend.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use super::fallback::{FallbackSource, MockDataset};
use super::images::ImagePolicy;
use crate::adapters::ReqwestHttpClient;
use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::models::{Post, User};
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Fetches users and posts from the backend.
///
/// [`fetch_users`](Self::fetch_users) and [`fetch_posts`](Self::fetch_posts)
/// never fail: any transport error, non-2xx status or undecodable body is
/// logged and answered with the fallback source's data. The `try_*` variants
/// expose the underlying error instead.
pub struct DashboardApi<C: HttpClient = ReqwestHttpClient> {
    base_url: String,
    client: C,
    fallback: Arc<dyn FallbackSource>,
    image_policy: ImagePolicy,
}

impl DashboardApi<ReqwestHttpClient> {
    /// Client for the default backend URL.
    pub fn new() -> Self {
        Self::with_client(DEFAULT_API_URL, ReqwestHttpClient::new())
    }

    /// Client configured from [`DashboardConfig`].
    pub fn from_config(config: &DashboardConfig) -> Self {
        let client =
            ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs));
        Self::with_client(&config.api_url, client).with_image_policy(config.image_policy)
    }
}

impl Default for DashboardApi<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> DashboardApi<C> {
    /// Create a client over any [`HttpClient`] with the built-in mock fallback.
    pub fn with_client(base_url: &str, client: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            fallback: Arc::new(MockDataset::new()),
            image_policy: ImagePolicy::default(),
        }
    }

    /// Replace the fallback source.
    pub fn with_fallback(mut self, fallback: Arc<dyn FallbackSource>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the curated image policy applied to fetched posts.
    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn image_policy(&self) -> ImagePolicy {
        self.image_policy
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &C {
        &self.client
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url, &Headers::new())
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status,
            });
        }

        response.json().map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }

    /// `GET /users` without fallback.
    pub async fn try_fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.get_json("/users").await
    }

    /// `GET /posts` without fallback. Curated images are applied per the image policy.
    pub async fn try_fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let mut posts: Vec<Post> = self.get_json("/posts").await?;
        self.image_policy.apply(&mut posts);
        Ok(posts)
    }

    /// `GET /users`, answering with fallback users on any failure.
    pub async fn fetch_users(&self) -> Vec<User> {
        match self.try_fetch_users().await {
            Ok(users) => {
                tracing::debug!("Fetched {} users from {}", users.len(), self.base_url);
                users
            }
            Err(e) => {
                tracing::error!("Error fetching users [{}]: {}", e.error_code(), e);
                tracing::info!("Using mock users data since API is unavailable");
                self.fallback.users()
            }
        }
    }

    /// `GET /posts`, answering with fallback posts on any failure.
    pub async fn fetch_posts(&self) -> Vec<Post> {
        match self.try_fetch_posts().await {
            Ok(posts) => {
                tracing::debug!("Fetched {} posts from {}", posts.len(), self.base_url);
                posts
            }
            Err(e) => {
                tracing::error!("Error fetching posts [{}]: {}", e.error_code(), e);
                tracing::info!("Using mock posts data since API is unavailable");
                self.fallback.posts()
            }
        }
    }
}
