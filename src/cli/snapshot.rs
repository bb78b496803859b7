//! `--snapshot`: fetch once and print every screen as plain text.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Local};
use color_eyre::Result;

use crate::api::DashboardApi;
use crate::config::DashboardConfig;
use crate::error::RenderError;
use crate::models::{Post, User};
use crate::sync::{DataSource, LoadState, POSTS_ERROR, USERS_ERROR};
use crate::ui::text::line_to_plain;
use crate::ui::views::{feed_page, top_users_page, trending_page, CardState, Page};

/// Column width of the printed snapshot.
pub const SNAPSHOT_WIDTH: u16 = 80;

fn page_text(page: Page) -> String {
    page.into_lines(0)
        .iter()
        .map(|line| line_to_plain(line).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch both collections from `source` and render all three screens.
pub async fn render_snapshot(
    source: &dyn DataSource,
    top_users: usize,
    width: u16,
    now: &DateTime<FixedOffset>,
) -> Result<String, RenderError> {
    let mut users: LoadState<User> = LoadState::new(USERS_ERROR);
    let mut posts: LoadState<Post> = LoadState::new(POSTS_ERROR);
    users.apply(1, source.users().await);
    posts.apply(2, source.posts().await);

    let none = HashSet::new();
    let cards = CardState {
        selected: None,
        expanded: &none,
        liked: &none,
        refreshing: false,
    };

    let rule = "=".repeat(usize::from(width));
    let sections = [
        page_text(feed_page(&posts, &cards, width, now)?),
        page_text(trending_page(&posts, &cards, width, now)?),
        page_text(top_users_page(&users, top_users, &cards, width)?),
    ];
    Ok(sections.join(format!("\n{}\n", rule).as_str()))
}

/// Handle the --snapshot command against the configured backend.
pub async fn handle_snapshot_command(config: &DashboardConfig) -> Result<()> {
    let api = DashboardApi::from_config(config);
    tracing::info!("Taking snapshot of {}", api.base_url());

    let now = Local::now().fixed_offset();
    let text = render_snapshot(&api, config.top_users, SNAPSHOT_WIDTH, &now).await?;
    println!("{}", text);
    Ok(())
}
