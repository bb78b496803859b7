//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::{Post, User};

/// Messages received from fetch tasks and the poller
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The poller issued a posts fetch
    PostsFetchStarted { seq: u64 },
    /// A users fetch completed
    UsersLoaded {
        seq: u64,
        result: Result<Vec<User>, FetchError>,
    },
    /// A posts fetch completed
    PostsLoaded {
        seq: u64,
        result: Result<Vec<Post>, FetchError>,
    },
}

impl AppMessage {
    pub fn seq(&self) -> u64 {
        match self {
            AppMessage::PostsFetchStarted { seq }
            | AppMessage::UsersLoaded { seq, .. }
            | AppMessage::PostsLoaded { seq, .. } => *seq,
        }
    }
}
