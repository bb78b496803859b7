//! Fallback data served when the backend is unavailable.
//!
//! The data access layer asks a [`FallbackSource`] for a replacement dataset
//! whenever a fetch fails. [`MockDataset`] is the built-in sample data;
//! [`StaticFallback`] serves any fixed dataset.

use chrono::{DateTime, Duration, Utc};

use super::images::CURATED_IMAGES;
use crate::models::{Comment, Post, User};

/// Supplies replacement collections when a fetch fails.
///
/// Implementations must return the same data, in the same order, on every call.
pub trait FallbackSource: Send + Sync {
    /// Users to show when `GET /users` fails.
    fn users(&self) -> Vec<User>;
    /// Posts to show when `GET /posts` fails.
    fn posts(&self) -> Vec<Post>;
}

/// Built-in sample data: five users, five comments and five posts.
///
/// Timestamps are relative to a reference instant captured at construction,
/// so repeated calls return identical data.
#[derive(Debug, Clone)]
pub struct MockDataset {
    reference: DateTime<Utc>,
}

impl MockDataset {
    /// Sample data relative to the current time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Sample data relative to `reference`.
    pub fn at(reference: DateTime<Utc>) -> Self {
        Self { reference }
    }

    /// Reference instant the sample timestamps are relative to.
    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    fn ago(&self, minutes: i64) -> DateTime<Utc> {
        self.reference - Duration::minutes(minutes)
    }

    fn comments(&self) -> Vec<Comment> {
        let users = mock_users();
        let contents = [
            ("Great insights! Thanks for sharing.", 60),
            ("This is really helpful information.", 120),
            ("Interesting perspective on this topic.", 180),
            ("Interesting perspective on this topic.", 180),
            ("Interesting perspective on this topic.", 180),
        ];

        users
            .into_iter()
            .zip(contents)
            .enumerate()
            .map(|(i, (user, (content, minutes)))| Comment {
                id: i as u64 + 1,
                user,
                content: content.to_string(),
                timestamp: self.ago(minutes),
            })
            .collect()
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self::new()
    }
}

fn mock_users() -> Vec<User> {
    vec![
        User::new(1, "johndoe", "John Doe", 5),
        User::new(2, "janedoe", "Jane Doe", 8),
        User::new(3, "techguru", "Tech Guru", 12),
        User::new(4, "techman", "Tech Man", 15),
        User::new(5, "techhub", "Tech Hub", 10),
    ]
}

impl FallbackSource for MockDataset {
    fn users(&self) -> Vec<User> {
        mock_users()
    }

    fn posts(&self) -> Vec<Post> {
        let users = mock_users();
        let comments = self.comments();

        // (id, author index, content, minutes ago, comment range, image index)
        let specs: [(u64, usize, &str, i64, std::ops::Range<usize>, usize); 5] = [
            (1, 0, "Just witnessed the most beautiful moonrise! 🌕 #nightsky #moon", 30, 0..2, 0),
            (2, 1, "Met this adorable baby elephant today! Look at those eyes! 🐘 #wildlife #cute", 60, 0..4, 1),
            (3, 2, "Morning at the farm with this little one 🐄 #farm #animals", 120, 1..5, 2),
            (4, 4, "Morning at the Forest with this big one 🐘 #wildlife #cute", 120, 1..5, 4),
            (5, 0, "Morning at the Farm with this little one #farm #animals", 120, 1..5, 5),
        ];

        specs
            .into_iter()
            .map(|(id, author, content, minutes, range, image)| Post {
                id,
                user: users[author].clone(),
                content: content.to_string(),
                comments: comments[range].to_vec(),
                timestamp: self.ago(minutes),
                image_url: Some(CURATED_IMAGES[image].to_string()),
            })
            .collect()
    }
}

/// Serves a fixed dataset, typically injected by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFallback {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

impl StaticFallback {
    pub fn new(users: Vec<User>, posts: Vec<Post>) -> Self {
        Self { users, posts }
    }
}

impl FallbackSource for StaticFallback {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }
}
