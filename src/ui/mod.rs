//! UI rendering for the dashboard
//!
//! Layout, top to bottom:
//! - Header with the brand and the screen tab selector
//! - Body: the mounted screen's page, inside the error boundary
//! - Footer with key hints and the copyright line
//!
//! ## Responsive Layout System
//!
//! Render functions take a `LayoutContext` built from the frame size. Narrow
//! terminals drop side padding and use short tab labels; short terminals
//! drop the copyright line.

pub mod components;
pub mod layout;
pub mod text;
pub mod theme;
pub mod views;

pub use layout::{breakpoints, LayoutContext};
pub use views::{build_page, Page, PageBody};

use chrono::{DateTime, Datelike, FixedOffset, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::error::RenderError;
use components::{render_card_list, render_tab_selector, screen_tabs, StatusPanel};
use theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER};

pub const BRAND: &str = "SocialAnalytics";

/// Smallest body the pages can be drawn in.
const MIN_BODY_WIDTH: u16 = 24;
const MIN_BODY_HEIGHT: u16 = 3;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI for the current frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let now = Local::now().fixed_offset();
    render_at(frame, app, &now);
}

/// Render with an explicit "now" for date formatting.
pub fn render_at(frame: &mut Frame, app: &mut App, now: &DateTime<FixedOffset>) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let footer_height = if ctx.is_short() { 1 } else { 2 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Brand and tabs
            Constraint::Min(1),                // Page
            Constraint::Length(footer_height), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], app, &ctx);
    render_body(frame, chunks[1], app, &ctx, now);
    render_footer(frame, chunks[2], app, &ctx, now);
}

// ============================================================================
// Header Section
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let mut spans = Vec::new();
    if !ctx.is_extra_small() {
        spans.push(Span::styled(
            format!(" ◆ {}", BRAND),
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    spans.extend(render_tab_selector(&screen_tabs(), app.screen.index(), ctx).spans);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

// ============================================================================
// Body Section
// ============================================================================

/// Draw the page, or the boundary's fallback panel if rendering fails.
fn render_body(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    ctx: &LayoutContext,
    now: &DateTime<FixedOffset>,
) {
    let column = ctx.content_column(area);

    if !app.boundary.is_tripped() {
        match draw_page(frame, column, app, now) {
            Ok(()) => return,
            Err(error) => app.boundary.capture(error),
        }
    }

    let message = app
        .boundary
        .error()
        .map(|e| e.to_string())
        .unwrap_or_default();
    let panel = Paragraph::new(StatusPanel::Crashed { message }.lines(app.tick_count))
        .alignment(Alignment::Center);
    frame.render_widget(panel, area);
}

/// Build the page first so nothing is drawn when it fails.
fn draw_page(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    now: &DateTime<FixedOffset>,
) -> Result<(), RenderError> {
    if area.width < MIN_BODY_WIDTH || area.height < MIN_BODY_HEIGHT {
        return Err(RenderError::AreaTooSmall {
            component: app.screen.id().to_string(),
            width: area.width,
            height: area.height,
            min_width: MIN_BODY_WIDTH,
            min_height: MIN_BODY_HEIGHT,
        });
    }

    let page = build_page(app, area.width, now)?;
    let heading_height = (page.heading.len() as u16).min(area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(heading_height), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(page.heading), chunks[0]);

    match page.body {
        PageBody::Status(panel) => {
            frame.render_widget(
                Paragraph::new(panel.lines(app.tick_count)).alignment(Alignment::Center),
                chunks[1],
            );
        }
        PageBody::Cards { cards, selected } => {
            render_card_list(frame, chunks[1], cards, selected);
        }
    }
    Ok(())
}

// ============================================================================
// Footer Section
// ============================================================================

fn key_hints(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let hints: &[(&str, &str)] = if app.boundary.is_tripped() {
        &[("Enter", "try again"), ("q", "quit")]
    } else if ctx.is_narrow() {
        &[("1-3", "screen"), ("↑↓", "select"), ("r", "refresh"), ("q", "quit")]
    } else {
        &[
            ("1-3/Tab", "screen"),
            ("↑↓", "select"),
            ("Enter", "comments"),
            ("l", "like"),
            ("r", "refresh"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    ctx: &LayoutContext,
    now: &DateTime<FixedOffset>,
) {
    let mut lines = vec![key_hints(app, ctx)];
    if !ctx.is_short() {
        lines.push(Line::from(Span::styled(
            format!("© {} SocialPulse. All rights reserved.", now.year()),
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockDataSource;
    use crate::api::{FallbackSource, MockDataset};
    use crate::app::Screen;
    use crate::config::DashboardConfig;
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2026, 10, 19, 15, 45, 0).unwrap().fixed_offset()
    }

    fn create_test_app() -> App {
        let dataset = MockDataset::at(now().with_timezone(&Utc));
        let mut app = App::new(Arc::new(MockDataSource::new()), &DashboardConfig::default());
        app.users.resolve(dataset.users());
        app.posts.resolve(dataset.posts());
        app
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_at(f, app, &now())).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_feed_renders_header_cards_and_footer() {
        let mut app = create_test_app();
        let screen = draw(&mut app, 100, 40);

        assert!(screen.contains("SocialAnalytics"));
        assert!(screen.contains("▶ 1 Feed"));
        assert!(screen.contains("Latest Posts"));
        assert!(screen.contains("[J] John Doe · 15:15"));
        assert!(screen.contains("© 2026 SocialPulse. All rights reserved."));
        assert!(!app.boundary.is_tripped());
    }

    #[test]
    fn test_loading_state() {
        let mut app = App::new(Arc::new(MockDataSource::new()), &DashboardConfig::default());
        let screen = draw(&mut app, 80, 24);
        assert!(screen.contains("Loading feed..."));
    }

    #[test]
    fn test_trending_and_top_users_screens() {
        let mut app = create_test_app();

        app.screen = Screen::Trending;
        assert!(draw(&mut app, 100, 40).contains("Showing posts with 4 comments"));

        app.screen = Screen::TopUsers;
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("Top Users"));
        assert!(screen.contains("Tech Man"));
        assert!(screen.contains("15 comments"));
    }

    #[test]
    fn test_tiny_terminal_trips_boundary() {
        let mut app = create_test_app();
        let screen = draw(&mut app, 20, 12);

        assert!(app.boundary.is_tripped());
        assert!(screen.contains("Something went wrong"));
        assert!(screen.contains("[Enter] Try again"));
    }

    #[test]
    fn test_boundary_panel_persists_until_reset() {
        let mut app = create_test_app();
        draw(&mut app, 20, 12);
        assert!(app.boundary.is_tripped());

        // still tripped after resize until the user resets it
        assert!(draw(&mut app, 100, 40).contains("Something went wrong"));

        app.boundary.reset();
        assert!(draw(&mut app, 100, 40).contains("Latest Posts"));
    }

    #[test]
    fn test_short_terminal_drops_copyright() {
        let mut app = create_test_app();
        let screen = draw(&mut app, 100, 14);
        assert!(!screen.contains("SocialPulse"));
    }
}
