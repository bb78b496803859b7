//! Common test utilities for integration tests.
//!
//! Fixtures for users and posts, a fixed "now", and a builder for apps
//! wired to a [`MockDataSource`].
//!
//! # Example
//!
//! ```ignore
//! let (app, source) = TestAppBuilder::new().with_sample_data().build();
//! ```

#![allow(dead_code)]

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::*;

use std::sync::Arc;

use buzzboard::adapters::MockDataSource;
use buzzboard::api::{FallbackSource, MockDataset};
use buzzboard::app::App;
use buzzboard::config::DashboardConfig;
use buzzboard::models::{Comment, Post, User};
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

/// Fixed reference instant: Monday 2026-10-19 15:45 UTC.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 15, 45, 0).unwrap()
}

pub fn test_now_fixed() -> DateTime<FixedOffset> {
    test_now().fixed_offset()
}

/// Built-in sample data relative to [`test_now`].
pub fn sample_dataset() -> MockDataset {
    MockDataset::at(test_now())
}

pub fn user(id: u64, name: &str, comment_count: u64) -> User {
    User::new(id, name.to_lowercase().replace(' ', ""), name, comment_count)
}

/// A post by `author` with `comments` comments, `minutes_ago` before [`test_now`].
pub fn post(id: u64, author: &User, comments: usize, minutes_ago: i64) -> Post {
    Post {
        id,
        user: author.clone(),
        content: format!("post {}", id),
        comments: (0..comments as u64)
            .map(|i| Comment {
                id: id * 100 + i,
                user: author.clone(),
                content: format!("comment {} on {}", i, id),
                timestamp: test_now() - Duration::minutes(minutes_ago - 1),
            })
            .collect(),
        timestamp: test_now() - Duration::minutes(minutes_ago),
        image_url: None,
    }
}

/// Builder for test [`App`] instances backed by a [`MockDataSource`].
#[derive(Default)]
pub struct TestAppBuilder {
    source: MockDataSource,
    config: DashboardConfig,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data(self) -> Self {
        let dataset = sample_dataset();
        self.source.set_users(dataset.users());
        self.source.set_posts(dataset.posts());
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.source.set_users(users);
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.source.set_posts(posts);
        self
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// The app plus a handle to its data source.
    pub fn build(self) -> (App, MockDataSource) {
        let app = App::new(Arc::new(self.source.clone()), &self.config);
        (app, self.source)
    }
}

/// Deliver every pending message to the app.
pub fn drain_messages(
    app: &mut App,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<buzzboard::app::AppMessage>,
) -> usize {
    let mut delivered = 0;
    while let Ok(message) = rx.try_recv() {
        app.handle_message(message);
        delivered += 1;
    }
    delivered
}
