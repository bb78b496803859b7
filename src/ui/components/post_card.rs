//! Post Card Component
//!
//! One post in the Feed or Trending list: author, date, content, image link,
//! comment count, like state and a comment preview that expands on demand.

use chrono::{DateTime, FixedOffset};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::error::RenderError;
use crate::helpers::format_date;
use crate::models::{Comment, Post, User};
use crate::ui::text::{truncate_to_width, wrap_text};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LIKE, COLOR_LINK, COLOR_TEXT,
};

/// Narrowest card that still fits the author line and actions.
pub const MIN_CARD_WIDTH: u16 = 24;

/// Comments shown while a card is collapsed.
pub const COMMENT_PREVIEW: usize = 2;

/// Per-card view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFlags {
    pub selected: bool,
    pub expanded: bool,
    pub liked: bool,
}

/// Avatar badge: the name's initial, or a dot when the user has an avatar image.
pub fn avatar_badge(user: &User) -> String {
    if user.avatar.is_some() {
        "[◉]".to_string()
    } else {
        format!("[{}]", user.initial())
    }
}

fn gutter(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("▌ ", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::styled("│ ", Style::default().fg(COLOR_BORDER))
    }
}

fn comment_lines(comment: &Comment, inner: usize, now: &DateTime<FixedOffset>) -> Vec<Vec<Span<'static>>> {
    let mut rows = vec![vec![
        Span::raw("  "),
        Span::styled(format!("{} ", avatar_badge(&comment.user)), Style::default().fg(COLOR_DIM)),
        Span::styled(
            comment.user.name.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", format_date(&comment.timestamp, now)),
            Style::default().fg(COLOR_DIM),
        ),
    ]];

    for text in wrap_text(&comment.content, inner.saturating_sub(6)) {
        rows.push(vec![
            Span::raw("      "),
            Span::styled(text, Style::default().fg(COLOR_TEXT)),
        ]);
    }
    rows
}

/// Build the lines of a post card `width` columns wide.
pub fn post_card_lines(
    post: &Post,
    flags: CardFlags,
    width: u16,
    now: &DateTime<FixedOffset>,
) -> Result<Vec<Line<'static>>, RenderError> {
    if width < MIN_CARD_WIDTH {
        return Err(RenderError::AreaTooSmall {
            component: "post card".to_string(),
            width,
            height: 1,
            min_width: MIN_CARD_WIDTH,
            min_height: 1,
        });
    }

    let inner = usize::from(width) - 2;
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();

    rows.push(vec![
        Span::styled(format!("{} ", avatar_badge(&post.user)), Style::default().fg(COLOR_LINK)),
        Span::styled(
            truncate_to_width(&post.user.name, inner.saturating_sub(16)),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", format_date(&post.timestamp, now)),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    for text in wrap_text(&post.content, inner) {
        rows.push(vec![Span::styled(text, Style::default().fg(COLOR_TEXT))]);
    }

    if let Some(ref url) = post.image_url {
        rows.push(vec![
            Span::styled("▣ ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                truncate_to_width(url, inner.saturating_sub(2)),
                Style::default().fg(COLOR_LINK).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
    }

    let comments = &post.comments;
    rows.push(vec![
        Span::styled(
            comments.len().to_string(),
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" comments", Style::default().fg(COLOR_DIM)),
    ]);

    let like = if flags.liked {
        Span::styled("♥ Liked", Style::default().fg(COLOR_LIKE).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("♡ Like", Style::default().fg(COLOR_DIM))
    };
    rows.push(vec![
        like,
        Span::styled("   ✎ Comment   ↗ Share", Style::default().fg(COLOR_DIM)),
    ]);

    let visible = if flags.expanded {
        comments.as_slice()
    } else {
        &comments[..comments.len().min(COMMENT_PREVIEW)]
    };
    for comment in visible {
        rows.extend(comment_lines(comment, inner, now));
    }

    if comments.len() > COMMENT_PREVIEW && !flags.expanded {
        rows.push(vec![Span::styled(
            format!("  View all {} comments", comments.len()),
            Style::default().fg(COLOR_LINK),
        )]);
    }
    if flags.expanded && !comments.is_empty() {
        rows.push(vec![Span::styled("  Show less", Style::default().fg(COLOR_LINK))]);
    }

    let mut lines: Vec<Line<'static>> = rows
        .into_iter()
        .map(|mut spans| {
            spans.insert(0, gutter(flags.selected));
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from(""));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::line_to_plain;
    use chrono::{TimeZone, Utc};

    fn now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 45, 0).unwrap().fixed_offset()
    }

    fn comment(id: u64, name: &str) -> Comment {
        Comment {
            id,
            user: User::new(id, name.to_lowercase(), name, 0),
            content: format!("comment {}", id),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        }
    }

    fn post(comments: usize) -> Post {
        Post {
            id: 1,
            user: User::new(1, "johndoe", "John Doe", 5),
            content: "Just witnessed the most beautiful moonrise!".to_string(),
            comments: (1..=comments as u64).map(|i| comment(i, "Jane")).collect(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 15, 15, 0).unwrap(),
            image_url: Some("https://images.example/moon.jpg".to_string()),
        }
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines.iter().map(line_to_plain).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_card_contents() {
        let lines = post_card_lines(&post(1), CardFlags::default(), 60, &now()).unwrap();
        let text = text(&lines);

        assert!(text.contains("[J] John Doe · 15:15"));
        assert!(text.contains("moonrise!"));
        assert!(text.contains("▣ https://images.example/moon.jpg"));
        assert!(text.contains("1 comments"));
        assert!(text.contains("♡ Like"));
        assert!(!text.contains("View all"));
    }

    #[test]
    fn test_collapsed_shows_preview_and_view_all() {
        let lines = post_card_lines(&post(4), CardFlags::default(), 60, &now()).unwrap();
        let text = text(&lines);

        assert!(text.contains("comment 1"));
        assert!(text.contains("comment 2"));
        assert!(!text.contains("comment 3"));
        assert!(text.contains("View all 4 comments"));
    }

    #[test]
    fn test_expanded_shows_everything() {
        let flags = CardFlags {
            expanded: true,
            ..CardFlags::default()
        };
        let text = text(&post_card_lines(&post(4), flags, 60, &now()).unwrap());

        assert!(text.contains("comment 4"));
        assert!(text.contains("Show less"));
        assert!(!text.contains("View all"));
    }

    #[test]
    fn test_liked_and_selected_markers() {
        let flags = CardFlags {
            selected: true,
            liked: true,
            ..CardFlags::default()
        };
        let lines = post_card_lines(&post(0), flags, 60, &now()).unwrap();

        assert!(text(&lines).contains("♥ Liked"));
        assert!(line_to_plain(&lines[0]).starts_with("▌ "));
        // trailing separator has no gutter
        assert_eq!(line_to_plain(lines.last().unwrap()), "");
    }

    #[test]
    fn test_avatar_badge() {
        let user = User::new(1, "jd", "John Doe", 0);
        assert_eq!(avatar_badge(&user), "[J]");
        assert_eq!(avatar_badge(&user.with_avatar("https://a/b.png")), "[◉]");
    }

    #[test]
    fn test_too_narrow_is_render_error() {
        let err = post_card_lines(&post(0), CardFlags::default(), 10, &now()).unwrap_err();
        assert_eq!(err.error_code(), "E_UI_AREA");
        assert_eq!(err.component(), "post card");
    }
}
