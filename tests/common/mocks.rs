//! HTTP fixtures for integration tests.
//!
//! Re-exports the mock adapters and provides JSON bodies shaped like the
//! backend's responses.

#[allow(unused_imports)]
pub use buzzboard::adapters::mock::{MockDataSource, MockHttpClient, MockResponse};
#[allow(unused_imports)]
pub use buzzboard::traits::{HttpError, Response};

use serde_json::{json, Value};

/// `GET /users` body with three users.
#[allow(dead_code)]
pub fn users_json() -> Value {
    json!([
        {"id": 1, "username": "alice", "name": "Alice", "commentCount": 3},
        {"id": 2, "username": "bob", "name": "Bob", "commentCount": 9},
        {"id": 3, "username": "carol", "name": "Carol", "avatar": "https://a/c.png", "commentCount": 6}
    ])
}

/// `GET /posts` body with two posts; post 11 has the most comments.
#[allow(dead_code)]
pub fn posts_json() -> Value {
    json!([
        {
            "id": 10,
            "user": {"id": 1, "username": "alice", "name": "Alice", "commentCount": 3},
            "content": "Hello from the server",
            "comments": [],
            "timestamp": "2026-10-19T09:00:00.000Z",
            "imageUrl": "https://server/10.png"
        },
        {
            "id": 11,
            "user": {"id": 2, "username": "bob", "name": "Bob", "commentCount": 9},
            "content": "Second post",
            "comments": [
                {
                    "id": 1,
                    "user": {"id": 1, "username": "alice", "name": "Alice"},
                    "content": "nice",
                    "timestamp": "2026-10-19T10:00:00Z"
                }
            ],
            "timestamp": "2026-10-19T08:00:00Z"
        }
    ])
}

/// An HTTP client that answers every request with `ConnectionFailed`.
#[allow(dead_code)]
pub fn unreachable_client() -> MockHttpClient {
    let client = MockHttpClient::new();
    client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
        "connection refused".to_string(),
    )));
    client
}
