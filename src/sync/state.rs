//! Observable load state for one fetched collection.

use crate::error::FetchError;

pub const USERS_ERROR: &str = "Failed to fetch users";
pub const POSTS_ERROR: &str = "Failed to fetch posts";

/// `{data, loading, error}` for a collection, plus the bookkeeping that
/// discards stale completions.
///
/// Every fetch carries a sequence number. Once a completion has been applied,
/// completions with an older sequence number are ignored, so the last-issued
/// request wins even when responses arrive out of order.
#[derive(Debug, Clone)]
pub struct LoadState<T> {
    data: Vec<T>,
    loading: bool,
    error: Option<String>,
    error_message: &'static str,
    /// Completions below this sequence number are stale.
    min_seq: u64,
}

impl<T> LoadState<T> {
    /// Initial state: loading, no data, no error.
    pub fn new(error_message: &'static str) -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
            error_message,
            min_seq: 0,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// A fetch was issued.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fetch `seq` was issued elsewhere (the poller).
    ///
    /// Returns `false` without touching the state when `seq` is already stale.
    pub fn begin_fetch(&mut self, seq: u64) -> bool {
        if seq < self.min_seq {
            return false;
        }
        self.begin();
        true
    }

    /// Replace the collection wholesale and clear any earlier error.
    pub fn resolve(&mut self, data: Vec<T>) {
        self.data = data;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Existing data is kept.
    pub fn fail(&mut self) {
        self.error = Some(self.error_message.to_string());
        self.loading = false;
    }

    /// Apply the completion of fetch `seq`.
    ///
    /// Returns `false` when the completion is stale and was discarded.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<T>, FetchError>) -> bool {
        if seq < self.min_seq {
            tracing::debug!("Discarding stale completion (seq {} < {})", seq, self.min_seq);
            return false;
        }
        self.min_seq = seq + 1;

        match result {
            Ok(data) => self.resolve(data),
            Err(e) => {
                tracing::warn!("{} [{}]: {}", self.error_message, e.error_code(), e);
                self.fail();
            }
        }
        true
    }

    /// Back to the initial state, ignoring every fetch issued before `next_seq`.
    ///
    /// Used when a view is mounted again.
    pub fn reset(&mut self, next_seq: u64) {
        self.data.clear();
        self.loading = true;
        self.error = None;
        self.min_seq = next_seq;
    }
}
