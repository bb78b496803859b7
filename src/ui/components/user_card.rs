//! User Card Component
//!
//! One leaderboard row: rank badge, avatar initial, name, handle and the
//! user's comment count aligned to the right edge.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::error::RenderError;
use crate::models::User;
use crate::ui::components::post_card::avatar_badge;
use crate::ui::text::truncate_to_width;
use crate::ui::theme::{rank_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub const MIN_USER_CARD_WIDTH: u16 = 24;

/// Below this inner width the `@username` handle is dropped.
const HANDLE_MIN_WIDTH: usize = 44;

/// "1 comment", "2 comments".
pub fn comment_label(count: u64) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{} comments", count)
    }
}

/// Build the lines of the leaderboard card for the user at `rank` (1-based).
pub fn user_card_lines(
    user: &User,
    rank: usize,
    selected: bool,
    width: u16,
) -> Result<Vec<Line<'static>>, RenderError> {
    if width < MIN_USER_CARD_WIDTH {
        return Err(RenderError::AreaTooSmall {
            component: "user card".to_string(),
            width,
            height: 1,
            min_width: MIN_USER_CARD_WIDTH,
            min_height: 1,
        });
    }
    if rank == 0 {
        return Err(RenderError::InvalidState {
            component: "user card".to_string(),
            message: "ranks start at 1".to_string(),
        });
    }

    let inner = usize::from(width) - 2;
    let gutter = if selected {
        Span::styled("▌ ", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::styled("│ ", Style::default().fg(COLOR_BORDER))
    };

    let badge = format!("#{:<2} ", rank);
    let count = comment_label(user.comment_count);
    let avatar = format!("{} ", avatar_badge(user));

    let fixed = badge.width() + avatar.width() + count.width() + 1;
    let name_budget = inner.saturating_sub(fixed);
    let name = truncate_to_width(&user.name, name_budget);
    let handle = if inner >= HANDLE_MIN_WIDTH {
        let handle = format!("  @{}", user.username);
        if name.width() + handle.width() <= name_budget {
            handle
        } else {
            String::new()
        }
    } else {
        String::new()
    };

    let used = badge.width() + avatar.width() + name.width() + handle.width() + count.width();
    let pad = inner.saturating_sub(used).max(1);

    let row = Line::from(vec![
        gutter,
        Span::styled(
            badge,
            Style::default().fg(rank_color(rank)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(avatar, Style::default().fg(COLOR_DIM)),
        Span::styled(name, Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)),
        Span::styled(handle, Style::default().fg(COLOR_DIM)),
        Span::raw(" ".repeat(pad)),
        Span::styled(count, Style::default().fg(COLOR_TEXT)),
    ]);

    Ok(vec![row, Line::from("")])
}
