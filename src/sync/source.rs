//! Async seam between the fetch tasks and whatever supplies the data.

use async_trait::async_trait;

use crate::api::DashboardApi;
use crate::error::FetchError;
use crate::models::{Post, User};
use crate::traits::HttpClient;

/// Source of the dashboard collections.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, FetchError>;
    async fn posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// The API falls back on failure, so it never reports an error here.
#[async_trait]
impl<C: HttpClient> DataSource for DashboardApi<C> {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        Ok(self.fetch_users().await)
    }

    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        Ok(self.fetch_posts().await)
    }
}
