//! User records as served by `GET /users` and embedded in posts and comments.

use serde::{Deserialize, Deserializer, Serialize};

/// A dashboard user.
///
/// `comment_count` is the ranking metric for the leaderboard. It comes straight
/// from the backend record and is not recomputed from fetched posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_comment_count")]
    pub comment_count: u64,
}

impl User {
    /// Create a user without an avatar.
    pub fn new(id: u64, username: impl Into<String>, name: impl Into<String>, comment_count: u64) -> Self {
        Self {
            id,
            username: username.into(),
            name: name.into(),
            avatar: None,
            comment_count,
        }
    }

    /// Set the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// First character of the display name, used when there is no avatar.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Decode `commentCount`, treating any missing or falsy value as zero.
///
/// Accepts non-negative integers and positive floats (truncated). `null`,
/// booleans, strings, negative numbers and `NaN` all become 0.
fn deserialize_comment_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let count = match value {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    };

    Ok(count)
}
