//! Mock data source for testing views and fetch tasks without HTTP.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::FetchError;
use crate::models::{Post, User};
use crate::sync::DataSource;

#[derive(Debug, Default)]
struct MockDataState {
    users: Vec<User>,
    posts: Vec<Post>,
    users_error: Option<FetchError>,
    posts_error: Option<FetchError>,
    delay: Option<Duration>,
    user_calls: usize,
    post_calls: usize,
}

/// In-memory [`DataSource`] with call counting, injectable failures and latency.
///
/// Clones share state, so a test can keep a handle while the source is owned
/// by a poller or the app.
#[derive(Debug, Clone, Default)]
pub struct MockDataSource {
    state: Arc<Mutex<MockDataState>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.set_users(users);
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.set_posts(posts);
        self
    }

    pub fn set_users(&self, users: Vec<User>) {
        self.state.lock().unwrap().users = users;
    }

    pub fn set_posts(&self, posts: Vec<Post>) {
        self.state.lock().unwrap().posts = posts;
    }

    /// Make every subsequent `users()` call fail with `error`.
    pub fn fail_users(&self, error: FetchError) {
        self.state.lock().unwrap().users_error = Some(error);
    }

    /// Make every subsequent `posts()` call fail with `error`.
    pub fn fail_posts(&self, error: FetchError) {
        self.state.lock().unwrap().posts_error = Some(error);
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock().unwrap();
        state.users_error = None;
        state.posts_error = None;
    }

    /// Delay every call (tokio time, so paused clocks apply).
    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    pub fn user_calls(&self) -> usize {
        self.state.lock().unwrap().user_calls
    }

    pub fn post_calls(&self) -> usize {
        self.state.lock().unwrap().post_calls
    }

    async fn wait(delay: Option<Duration>) {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.user_calls += 1;
            state.delay
        };
        Self::wait(delay).await;

        let state = self.state.lock().unwrap();
        match state.users_error {
            Some(ref e) => Err(e.clone()),
            None => Ok(state.users.clone()),
        }
    }

    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        let delay = {
            let mut state = self.state.lock().unwrap();
            state.post_calls += 1;
            state.delay
        };
        Self::wait(delay).await;

        let state = self.state.lock().unwrap();
        match state.posts_error {
            Some(ref e) => Err(e.clone()),
            None => Ok(state.posts.clone()),
        }
    }
}
