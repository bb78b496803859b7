//! Periodic posts refresh.
//!
//! The poller fetches once as soon as it starts, then once per interval.
//! Each tick announces its fetch with [`AppMessage::PostsFetchStarted`] so the
//! app enters the loading state exactly as a manual refresh does. Ticks never wait for earlier fetches, so slow responses may overlap; the
//! sequence numbers sort them out when they land.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use super::fetch::{fetch_collection, Collection, FetchSequence};
use super::source::DataSource;
use crate::app::AppMessage;

/// Polling interval for posts (30 seconds).
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Owned handle to the posts polling loop.
///
/// Dropping the handle (or calling [`stop`](Self::stop)) aborts the loop and
/// every fetch it still has in flight. No fetch is issued afterwards.
#[derive(Debug)]
pub struct PostPoller {
    handle: JoinHandle<()>,
}

impl PostPoller {
    pub fn start(
        source: Arc<dyn DataSource>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        interval: Duration,
        sequence: FetchSequence,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tracing::info!("Posts poller started (interval: {}s)", interval.as_secs());

            let mut ticker = tokio::time::interval(interval);
            // Aborting this task drops the set, which aborts its fetches too
            let mut in_flight: JoinSet<bool> = JoinSet::new();

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let seq = sequence.next();
                        let source = Arc::clone(&source);
                        let tx = message_tx.clone();
                        tracing::debug!("Polling posts (seq {}, {} in flight)", seq, in_flight.len());

                        if message_tx.send(AppMessage::PostsFetchStarted { seq }).is_err() {
                            tracing::debug!("Message channel closed, stopping posts poller");
                            break;
                        }
                        in_flight.spawn(async move {
                            let message = fetch_collection(source.as_ref(), Collection::Posts, seq).await;
                            tx.send(message).is_ok()
                        });
                    }
                    Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                        if let Ok(false) = joined {
                            tracing::debug!("Message channel closed, stopping posts poller");
                            break;
                        }
                    }
                }
            }
        });

        Self { handle }
    }

    /// Stop polling. Equivalent to dropping the handle.
    pub fn stop(self) {}

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PostPoller {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Posts poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;

    const INTERVAL: Duration = Duration::from_secs(POLL_INTERVAL_SECS);

    fn start(source: &MockDataSource) -> (PostPoller, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let poller = PostPoller::start(Arc::new(source.clone()), tx, INTERVAL, FetchSequence::new());
        (poller, rx)
    }

    fn drain_seqs(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> Vec<u64> {
        let mut seqs = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let AppMessage::PostsLoaded { seq, .. } = message {
                seqs.push(seq);
            }
        }
        seqs
    }

    #[test]
    fn test_poll_interval_is_30_seconds() {
        assert_eq!(POLL_INTERVAL_SECS, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_immediately_then_every_interval() {
        let source = MockDataSource::new();
        let (poller, mut rx) = start(&source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.post_calls(), 1);
        assert_eq!(drain_seqs(&mut rx), vec![1]);

        tokio::time::sleep(INTERVAL).await;
        assert_eq!(source.post_calls(), 2);

        tokio::time::sleep(INTERVAL * 2).await;
        assert_eq!(source.post_calls(), 4);
        assert_eq!(drain_seqs(&mut rx), vec![2, 3, 4]);
        assert!(poller.is_running());

        // never touches users
        assert_eq!(source.user_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_announces_each_fetch_before_its_result() {
        let source = MockDataSource::new();
        source.set_delay(Duration::from_secs(5));
        let (_poller, mut rx) = start(&source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(matches!(rx.try_recv(), Ok(AppMessage::PostsFetchStarted { seq: 1 })));
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(matches!(rx.try_recv(), Ok(AppMessage::PostsLoaded { seq: 1, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fetch_after_drop() {
        let source = MockDataSource::new();
        let (poller, _rx) = start(&source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(source.post_calls(), 1);

        drop(poller);
        tokio::time::sleep(INTERVAL * 5).await;

        assert_eq!(source.post_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_overlap_slow_fetches() {
        let source = MockDataSource::new();
        source.set_delay(INTERVAL + Duration::from_secs(10));
        let (_poller, mut rx) = start(&source);

        tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;

        // second tick fired while the first fetch is still pending
        assert_eq!(source.post_calls(), 2);
        assert!(drain_seqs(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(drain_seqs(&mut rx), vec![1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_in_flight_fetch() {
        let source = MockDataSource::new();
        source.set_delay(Duration::from_secs(5));
        let (poller, mut rx) = start(&source);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(source.post_calls(), 1);

        poller.stop();
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert!(drain_seqs(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let source = MockDataSource::new();
        let (poller, rx) = start(&source);
        drop(rx);

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;

        assert!(!poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shares_sequence_with_manual_refreshes() {
        let source = MockDataSource::new();
        let sequence = FetchSequence::new();
        assert_eq!(sequence.next(), 1);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = PostPoller::start(Arc::new(source), tx, INTERVAL, sequence.clone());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(drain_seqs(&mut rx), vec![2]);
        assert_eq!(sequence.peek(), 3);
    }
}
