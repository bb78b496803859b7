//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the terminal size and answers the sizing questions
//! the views ask: compact or not, and how wide the centered content column is.

use ratatui::layout::Rect;

/// Terminal size breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Widest the content column gets on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: use short labels and drop optional chrome.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Horizontal padding on each side of the content column.
    pub fn side_padding(&self) -> u16 {
        if self.is_extra_small() {
            0
        } else if self.is_narrow() {
            1
        } else {
            2
        }
    }

    /// Centered content column inside `area`, capped at [`MAX_CONTENT_WIDTH`].
    pub fn content_column(&self, area: Rect) -> Rect {
        let padding = self.side_padding();
        let width = area
            .width
            .saturating_sub(padding * 2)
            .min(MAX_CONTENT_WIDTH);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        Rect::new(x, area.y, width, area.height)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
