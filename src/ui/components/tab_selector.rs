//! Tab Selector Component
//!
//! The screen switcher in the header. The selected tab gets a `▶` marker,
//! every tab shows the number key that selects it.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::Screen;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BRAND, COLOR_DIM, COLOR_HEADER};

/// A single tab in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem<'a> {
    /// Key that selects the tab
    pub key: char,
    /// Full label for normal-sized terminals
    pub label: &'a str,
    /// Label for compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: char, label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(key: char, label: &'a str, short_label: &'a str) -> Self {
        Self {
            key,
            label,
            short_label,
        }
    }
}

/// Tabs for every screen, in key order.
pub fn screen_tabs() -> Vec<TabItem<'static>> {
    Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let key = char::from(b'1' + i as u8);
            match screen {
                Screen::TopUsers => TabItem::with_short_label(key, screen.label(), "Top"),
                _ => TabItem::new(key, screen.label()),
            }
        })
        .collect()
}

/// Render a horizontal tab selector line.
///
/// ```ignore
/// let line = render_tab_selector(&screen_tabs(), app.screen.index(), &ctx);
/// ```
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };
        let key_style = Style::default().fg(COLOR_DIM);

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!("{} ", item.key), key_style));
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("{} ", item.key), key_style));
            spans.push(Span::styled(label.to_string(), Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::text::line_to_plain;

    #[test]
    fn test_screen_tabs_keys() {
        let tabs = screen_tabs();
        let keys: Vec<char> = tabs.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!['1', '2', '3']);
        assert_eq!(tabs[2].label, "Top Users");
        assert_eq!(tabs[2].short_label, "Top");
    }

    #[test]
    fn test_marker_precedes_selected_tab() {
        let ctx = LayoutContext::new(100, 40);
        let text = line_to_plain(&render_tab_selector(&screen_tabs(), 1, &ctx));

        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Feed").unwrap());
        assert!(marker < text.find("Trending").unwrap());
        assert_eq!(text.matches('▶').count(), 1);
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let ctx = LayoutContext::new(50, 14);
        let text = line_to_plain(&render_tab_selector(&screen_tabs(), 0, &ctx));

        assert!(text.contains("Top"));
        assert!(!text.contains("Top Users"));
    }
}
