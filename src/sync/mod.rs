//! Data-fetching state machines.
//!
//! Views read a [`LoadState`] per collection. Fetches run as tokio tasks
//! against a [`DataSource`] and report back through the app message channel;
//! the [`PostPoller`] keeps posts fresh while a posts view is mounted.

mod fetch;
mod poller;
mod source;
mod state;

pub use fetch::{fetch_collection, spawn_fetch, Collection, FetchSequence};
pub use poller::{PostPoller, POLL_INTERVAL_SECS};
pub use source::DataSource;
pub use state::{LoadState, POSTS_ERROR, USERS_ERROR};
