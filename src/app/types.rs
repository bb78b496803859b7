//! Type definitions for the application state.
//!
//! - [`Screen`] - Which dashboard view is displayed
//! - [`RefreshIndicator`] - Manual refresh feedback timing

use tokio::time::{Duration, Instant};

use crate::sync::Collection;

/// How long the refresh indicator stays visible after its fetch completes.
pub const MIN_REFRESH_DISPLAY: Duration = Duration::from_millis(500);

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Feed,
    Trending,
    TopUsers,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Feed, Screen::Trending, Screen::TopUsers];

    pub fn index(self) -> usize {
        match self {
            Screen::Feed => 0,
            Screen::Trending => 1,
            Screen::TopUsers => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab identifier
    pub fn id(self) -> &'static str {
        match self {
            Screen::Feed => "feed",
            Screen::Trending => "trending",
            Screen::TopUsers => "top-users",
        }
    }

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            Screen::Feed => "Feed",
            Screen::Trending => "Trending",
            Screen::TopUsers => "Top Users",
        }
    }

    /// Page heading
    pub fn title(self) -> &'static str {
        match self {
            Screen::Feed => "Latest Posts",
            Screen::Trending => "Trending Posts",
            Screen::TopUsers => "Top Users",
        }
    }

    /// The collection this screen is built from
    pub fn collection(self) -> Collection {
        match self {
            Screen::Feed | Screen::Trending => Collection::Posts,
            Screen::TopUsers => Collection::Users,
        }
    }

    /// Posts screens keep their data fresh with the poller
    pub fn polls(self) -> bool {
        self.collection() == Collection::Posts
    }
}

/// Feedback for a manual refresh.
///
/// Visible from the moment the refresh is issued until
/// [`MIN_REFRESH_DISPLAY`] after its fetch has completed.
#[derive(Debug, Clone, Copy)]
pub struct RefreshIndicator {
    pub collection: Collection,
    pub seq: u64,
    pub started_at: Instant,
    /// When the refresh's fetch (or a newer one) completed
    pub settled_at: Option<Instant>,
}

impl RefreshIndicator {
    pub fn new(collection: Collection, seq: u64) -> Self {
        Self {
            collection,
            seq,
            started_at: Instant::now(),
            settled_at: None,
        }
    }

    /// Note a completion; any completion at or after the refresh settles it.
    pub fn observe(&mut self, collection: Collection, seq: u64) {
        if collection == self.collection && seq >= self.seq && self.settled_at.is_none() {
            self.settled_at = Some(Instant::now());
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled_at.is_some()
    }

    pub fn is_done(&self) -> bool {
        self.settled_at
            .is_some_and(|settled_at| settled_at.elapsed() >= MIN_REFRESH_DISPLAY)
    }
}
