//! Page builders for the three screens.
//!
//! A page is a heading plus either a status panel or a list of cards. Pages
//! are built from plain state so the TUI and the `--snapshot` printer share
//! them.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Screen};
use crate::error::RenderError;
use crate::helpers::{get_top_users, get_trending_posts, sort_posts_by_timestamp};
use crate::models::{Post, User};
use crate::sync::LoadState;
use crate::ui::components::{post_card_lines, user_card_lines, CardFlags, StatusPanel};
use crate::ui::theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_HEADER, COLOR_TEXT, COLOR_TRENDING};

pub const FEED_LOADING: &str = "Loading feed...";
pub const TRENDING_LOADING: &str = "Loading trending posts...";
pub const TOP_USERS_LOADING: &str = "Loading top users...";

pub const FEED_EMPTY: &str = "No posts available yet. Check back soon!";
pub const TRENDING_EMPTY: &str = "No trending posts available yet. Check back soon!";
pub const TOP_USERS_EMPTY: &str = "No user data available yet. Check back soon!";

#[derive(Debug, Clone)]
pub enum PageBody {
    Status(StatusPanel),
    Cards {
        cards: Vec<Vec<Line<'static>>>,
        selected: usize,
    },
}

#[derive(Debug, Clone)]
pub struct Page {
    pub heading: Vec<Line<'static>>,
    pub body: PageBody,
}

impl Page {
    /// Every line of the page, cards flattened, for plain-text output.
    pub fn into_lines(self, tick: u64) -> Vec<Line<'static>> {
        let mut lines = self.heading;
        match self.body {
            PageBody::Status(panel) => lines.extend(panel.lines(tick)),
            PageBody::Cards { cards, .. } => lines.extend(cards.into_iter().flatten()),
        }
        lines
    }
}

/// Card-local view state shared by the pages.
#[derive(Debug, Clone, Copy)]
pub struct CardState<'a> {
    pub selected: Option<usize>,
    pub expanded: &'a HashSet<u64>,
    pub liked: &'a HashSet<u64>,
    pub refreshing: bool,
}

impl<'a> CardState<'a> {
    pub fn from_app(app: &'a App) -> Self {
        Self {
            selected: Some(app.selected),
            expanded: &app.expanded,
            liked: &app.liked,
            refreshing: app.is_refreshing(),
        }
    }

    fn flags(&self, index: usize, post_id: u64) -> CardFlags {
        CardFlags {
            selected: self.selected == Some(index),
            expanded: self.expanded.contains(&post_id),
            liked: self.liked.contains(&post_id),
        }
    }
}

/// Loading, error or empty panel for `state`, if one applies.
///
/// Loading wins only while there is nothing to show; an error is shown even
/// over stale data.
fn status_for<T>(
    state: &LoadState<T>,
    visible: usize,
    loading: &'static str,
    empty: &'static str,
) -> Option<StatusPanel> {
    if state.is_loading() && !state.has_data() {
        Some(StatusPanel::Loading { message: loading })
    } else if let Some(error) = state.error() {
        Some(StatusPanel::Error {
            message: error.to_string(),
        })
    } else if visible == 0 {
        Some(StatusPanel::Empty { message: empty })
    } else {
        None
    }
}

/// Title on the left, refresh hint on the right.
fn heading_line(title: &str, refreshing: bool, width: u16) -> Line<'static> {
    let hint = if refreshing {
        Span::styled("⟳ Refreshing...", Style::default().fg(COLOR_ACTIVE))
    } else {
        Span::styled("[r] Refresh", Style::default().fg(COLOR_DIM))
    };
    let pad = usize::from(width)
        .saturating_sub(title.width() + hint.content.width())
        .max(1);

    Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(pad)),
        hint,
    ])
}

fn post_cards(
    posts: &[Post],
    cards: &CardState<'_>,
    width: u16,
    now: &DateTime<FixedOffset>,
) -> Result<Vec<Vec<Line<'static>>>, RenderError> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| post_card_lines(post, cards.flags(i, post.id), width, now))
        .collect()
}

/// Latest posts, most recent first.
pub fn feed_page(
    posts: &LoadState<Post>,
    cards: &CardState<'_>,
    width: u16,
    now: &DateTime<FixedOffset>,
) -> Result<Page, RenderError> {
    let sorted = sort_posts_by_timestamp(posts.data());
    let heading = vec![
        heading_line(Screen::Feed.title(), cards.refreshing, width),
        Line::from(""),
    ];

    let body = match status_for(posts, sorted.len(), FEED_LOADING, FEED_EMPTY) {
        Some(panel) => PageBody::Status(panel),
        None => PageBody::Cards {
            cards: post_cards(&sorted, cards, width, now)?,
            selected: cards.selected.unwrap_or(0),
        },
    };
    Ok(Page { heading, body })
}

/// Posts tied for the most comments.
pub fn trending_page(
    posts: &LoadState<Post>,
    cards: &CardState<'_>,
    width: u16,
    now: &DateTime<FixedOffset>,
) -> Result<Page, RenderError> {
    let trending = get_trending_posts(posts.data());
    let mut heading = vec![heading_line(Screen::Trending.title(), cards.refreshing, width)];
    if let Some(top) = trending.first() {
        heading.push(Line::from(vec![
            Span::styled("Showing posts with ", Style::default().fg(COLOR_TEXT)),
            Span::styled(
                top.comment_count().to_string(),
                Style::default().fg(COLOR_TRENDING).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" comments", Style::default().fg(COLOR_TEXT)),
        ]));
    }
    heading.push(Line::from(""));

    let body = match status_for(posts, trending.len(), TRENDING_LOADING, TRENDING_EMPTY) {
        Some(panel) => PageBody::Status(panel),
        None => PageBody::Cards {
            cards: post_cards(&trending, cards, width, now)?,
            selected: cards.selected.unwrap_or(0),
        },
    };
    Ok(Page { heading, body })
}

/// Leaderboard of the `count` users with the most comments.
pub fn top_users_page(
    users: &LoadState<User>,
    count: usize,
    cards: &CardState<'_>,
    width: u16,
) -> Result<Page, RenderError> {
    let top: Vec<User> = get_top_users(users.data(), count);
    let heading = vec![
        heading_line(Screen::TopUsers.title(), cards.refreshing, width),
        Line::from(""),
    ];

    let body = match status_for(users, top.len(), TOP_USERS_LOADING, TOP_USERS_EMPTY) {
        Some(panel) => PageBody::Status(panel),
        None => PageBody::Cards {
            cards: top
                .iter()
                .enumerate()
                .map(|(i, user)| user_card_lines(user, i + 1, cards.selected == Some(i), width))
                .collect::<Result<_, _>>()?,
            selected: cards.selected.unwrap_or(0),
        },
    };
    Ok(Page { heading, body })
}

/// Page for the app's mounted screen.
pub fn build_page(app: &App, width: u16, now: &DateTime<FixedOffset>) -> Result<Page, RenderError> {
    let cards = CardState::from_app(app);
    match app.screen {
        Screen::Feed => feed_page(&app.posts, &cards, width, now),
        Screen::Trending => trending_page(&app.posts, &cards, width, now),
        Screen::TopUsers => top_users_page(&app.users, app.top_user_count, &cards, width),
    }
}
