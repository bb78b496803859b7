//! Color theme constants for the dashboard UI.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Selection marker and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Brand and active tab
pub const COLOR_BRAND: Color = Color::Rgb(37, 99, 235); // blue-600

/// Headings
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text (timestamps, usernames, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

// ============================================================================
// States
// ============================================================================

/// Refresh indicator and loading spinner
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error panels and the error boundary
pub const COLOR_ERROR: Color = Color::Rgb(220, 38, 38); // red-600

/// Liked marker
pub const COLOR_LIKE: Color = Color::Rgb(220, 38, 38);

/// Trending heading
pub const COLOR_TRENDING: Color = Color::Rgb(168, 85, 247); // purple-500

/// Comment counts and links
pub const COLOR_LINK: Color = Color::Rgb(96, 165, 250); // blue-400

// ============================================================================
// Leaderboard ranks
// ============================================================================

pub const COLOR_RANK_GOLD: Color = Color::Rgb(234, 179, 8);
pub const COLOR_RANK_SILVER: Color = Color::Rgb(209, 213, 219);
pub const COLOR_RANK_BRONZE: Color = Color::Rgb(180, 83, 9);
pub const COLOR_RANK_OTHER: Color = Color::Rgb(59, 130, 246);

/// Badge color for a 1-based leaderboard rank.
pub fn rank_color(rank: usize) -> Color {
    match rank {
        1 => COLOR_RANK_GOLD,
        2 => COLOR_RANK_SILVER,
        3 => COLOR_RANK_BRONZE,
        _ => COLOR_RANK_OTHER,
    }
}
