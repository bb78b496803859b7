//! Posts and their comments as served by `GET /posts`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A comment nested inside a post. Comments have no lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    /// Snapshot of the author at fetch time
    pub user: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A post in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    /// Snapshot of the author at fetch time
    pub user: User,
    pub content: String,
    /// Comments in relevance order (not sorted by time)
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Post {
    /// Number of comments attached to this post.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
