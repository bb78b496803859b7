//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which view is currently displayed
//! - [`ErrorBoundary`] - Captured rendering errors
//! - [`AppMessage`] - Messages for async communication

mod boundary;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use boundary::ErrorBoundary;
pub use messages::AppMessage;
pub use types::{RefreshIndicator, Screen, MIN_REFRESH_DISPLAY};

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::DashboardConfig;
use crate::helpers::{get_top_users, get_trending_posts, sort_posts_by_timestamp};
use crate::models::{Post, User};
use crate::sync::{
    spawn_fetch, Collection, DataSource, FetchSequence, LoadState, PostPoller, POSTS_ERROR,
    USERS_ERROR,
};

/// Main application state.
///
/// All state lives here and is only touched from the UI loop; fetch tasks
/// and the poller report back through the message channel.
pub struct App {
    /// Currently mounted screen
    pub screen: Screen,
    /// Users collection (Top Users)
    pub users: LoadState<User>,
    /// Posts collection (Feed, Trending)
    pub posts: LoadState<Post>,
    /// Selected item in the current screen's list
    pub selected: usize,
    /// Posts showing all of their comments
    pub expanded: HashSet<u64>,
    /// Posts the user has liked
    pub liked: HashSet<u64>,
    /// Rendering errors caught around the view tree
    pub boundary: ErrorBoundary,
    /// Manual refresh in progress
    pub refresh: Option<RefreshIndicator>,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Frame tick counter for animations
    pub tick_count: u64,
    /// Leaderboard size
    pub top_user_count: usize,
    poll_interval: Duration,
    source: Arc<dyn DataSource>,
    sequence: FetchSequence,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    poller: Option<PostPoller>,
}

impl App {
    /// Create the app. Nothing is fetched until a screen is mounted.
    pub fn new(source: Arc<dyn DataSource>, config: &DashboardConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            screen: Screen::default(),
            users: LoadState::new(USERS_ERROR),
            posts: LoadState::new(POSTS_ERROR),
            selected: 0,
            expanded: HashSet::new(),
            liked: HashSet::new(),
            boundary: ErrorBoundary::new(),
            refresh: None,
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            top_user_count: config.top_users,
            poll_interval: config.poll_interval(),
            source,
            sequence: FetchSequence::new(),
            message_tx,
            message_rx: Some(message_rx),
            poller: None,
        }
    }

    /// Take the message receiver (the event loop needs ownership for `select!`).
    pub fn take_message_rx(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(PostPoller::is_running)
    }

    /// Mount `screen`: unmount the current one, reset its collection and
    /// card state, then start fetching.
    ///
    /// Posts screens start the poller, which fetches immediately. Must be
    /// called from within a tokio runtime.
    pub fn mount(&mut self, screen: Screen) {
        self.unmount();
        self.screen = screen;
        self.selected = 0;
        self.expanded.clear();
        self.liked.clear();

        let next_seq = self.sequence.peek();
        match screen.collection() {
            Collection::Posts => {
                self.posts.reset(next_seq);
                self.poller = Some(PostPoller::start(
                    Arc::clone(&self.source),
                    self.message_tx.clone(),
                    self.poll_interval,
                    self.sequence.clone(),
                ));
            }
            Collection::Users => {
                self.users.reset(next_seq);
                self.issue_fetch(Collection::Users);
            }
        }

        tracing::debug!("Mounted {:?}", screen);
        self.mark_dirty();
    }

    /// Stop the poller and drop any refresh feedback.
    pub fn unmount(&mut self) {
        self.poller = None;
        self.refresh = None;
    }

    /// Stop all background work before quitting.
    pub fn shutdown(&mut self) {
        self.unmount();
        self.should_quit = true;
    }

    fn state_error(&self, collection: Collection) -> Option<&str> {
        match collection {
            Collection::Users => self.users.error(),
            Collection::Posts => self.posts.error(),
        }
    }

    fn issue_fetch(&mut self, collection: Collection) -> u64 {
        let seq = self.sequence.next();
        match collection {
            Collection::Users => self.users.begin(),
            Collection::Posts => self.posts.begin(),
        }
        spawn_fetch(
            Arc::clone(&self.source),
            collection,
            seq,
            self.message_tx.clone(),
        );
        seq
    }

    /// Manual refresh with the refresh indicator. Ignored while one is running.
    pub fn refresh(&mut self) {
        if self.is_refreshing() {
            return;
        }
        let collection = self.screen.collection();
        let seq = self.issue_fetch(collection);
        self.refresh = Some(RefreshIndicator::new(collection, seq));
        tracing::info!("Manual refresh of {:?} (seq {})", collection, seq);
        self.mark_dirty();
    }

    /// Re-run the current screen's fetch from its error panel.
    pub fn retry(&mut self) {
        let collection = self.screen.collection();
        let seq = self.issue_fetch(collection);
        tracing::info!("Retrying {:?} (seq {})", collection, seq);
        self.mark_dirty();
    }

    /// `r`: retry when the screen shows an error, refresh otherwise.
    pub fn refresh_or_retry(&mut self) {
        if self.state_error(self.screen.collection()).is_some() {
            self.retry();
        } else {
            self.refresh();
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_some()
    }

    /// The current screen shows its loading spinner (loading with no data).
    pub fn is_loading_screen(&self) -> bool {
        match self.screen.collection() {
            Collection::Users => self.users.is_loading() && !self.users.has_data(),
            Collection::Posts => self.posts.is_loading() && !self.posts.has_data(),
        }
    }

    /// Something on screen animates, so every tick needs a redraw.
    pub fn is_animating(&self) -> bool {
        self.is_refreshing() || self.is_loading_screen()
    }

    /// Advance animations and expire the refresh indicator.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.refresh.is_some_and(|r| r.is_done()) {
            self.refresh = None;
            self.mark_dirty();
        }
    }

    /// Posts for the Feed, most recent first.
    pub fn feed_posts(&self) -> Vec<Post> {
        sort_posts_by_timestamp(self.posts.data())
    }

    /// Posts tied for the most comments.
    pub fn trending_posts(&self) -> Vec<Post> {
        get_trending_posts(self.posts.data())
    }

    /// Leaderboard, highest comment count first.
    pub fn top_users(&self) -> Vec<User> {
        get_top_users(self.users.data(), self.top_user_count)
    }

    /// Posts listed on the current screen (empty on Top Users).
    pub fn visible_posts(&self) -> Vec<Post> {
        match self.screen {
            Screen::Feed => self.feed_posts(),
            Screen::Trending => self.trending_posts(),
            Screen::TopUsers => Vec::new(),
        }
    }

    /// Number of selectable items on the current screen.
    pub fn item_count(&self) -> usize {
        match self.screen {
            Screen::TopUsers => self.top_users().len(),
            _ => self.visible_posts().len(),
        }
    }

    pub fn selected_post(&self) -> Option<Post> {
        self.visible_posts().into_iter().nth(self.selected)
    }
}
