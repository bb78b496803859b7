//! One-shot fetches reported through the app message channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::source::DataSource;
use crate::app::AppMessage;

/// Which collection a fetch loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Posts,
}

/// Shared, monotonically increasing fetch sequence numbers.
///
/// One counter is shared by manual refreshes and the poller so their
/// completions can be ordered against each other.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence(Arc<AtomicU64>);

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next sequence number (starting at 1).
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The sequence number the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> u64 {
        self.0.load(Ordering::SeqCst) + 1
    }
}

/// Run one fetch and build the completion message.
pub async fn fetch_collection(
    source: &dyn DataSource,
    collection: Collection,
    seq: u64,
) -> AppMessage {
    match collection {
        Collection::Users => AppMessage::UsersLoaded {
            seq,
            result: source.users().await,
        },
        Collection::Posts => AppMessage::PostsLoaded {
            seq,
            result: source.posts().await,
        },
    }
}

/// Spawn one fetch on the runtime; the completion is sent to `message_tx`.
pub fn spawn_fetch(
    source: Arc<dyn DataSource>,
    collection: Collection,
    seq: u64,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = fetch_collection(source.as_ref(), collection, seq).await;
        if message_tx.send(message).is_err() {
            tracing::debug!("Message channel closed, dropping {:?} fetch {}", collection, seq);
        }
    })
}
