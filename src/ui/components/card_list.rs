//! Card List Component
//!
//! Stacks pre-built cards vertically and scrolls so the selected card stays
//! in view.

use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// First line to draw so that card `selected` is visible in `viewport` rows.
///
/// The list scrolls just far enough to show the whole selected card, or its
/// top when the card is taller than the viewport.
pub fn scroll_offset(heights: &[usize], selected: usize, viewport: usize) -> usize {
    if heights.is_empty() || viewport == 0 {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);

    let start: usize = heights[..selected].iter().sum();
    let end = start + heights[selected];

    if end <= viewport {
        0
    } else if heights[selected] >= viewport {
        start
    } else {
        end - viewport
    }
}

/// Flatten `cards` and draw the window that keeps `selected` visible.
pub fn render_card_list(frame: &mut Frame, area: Rect, cards: Vec<Vec<Line<'static>>>, selected: usize) {
    let heights: Vec<usize> = cards.iter().map(Vec::len).collect();
    let offset = scroll_offset(&heights, selected, usize::from(area.height));

    let lines: Vec<Line<'static>> = cards.into_iter().flatten().skip(offset).collect();
    frame.render_widget(Paragraph::new(lines), area);
}
