//! Status Panel Component
//!
//! Loading, error and empty states shown in place of a view's list, plus
//! the error boundary's fallback panel.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_ACTIVE, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_TEXT};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Spinner character for an animation tick.
pub fn spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[(tick / 4) as usize % SPINNER_FRAMES.len()]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusPanel {
    /// Nothing to show yet
    Loading { message: &'static str },
    /// The view's fetch failed
    Error { message: String },
    /// Fetched, but nothing to list
    Empty { message: &'static str },
    /// The error boundary caught a rendering error
    Crashed { message: String },
}

impl StatusPanel {
    pub fn lines(&self, tick: u64) -> Vec<Line<'static>> {
        match self {
            StatusPanel::Loading { message } => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{} ", spinner_char(tick)), Style::default().fg(COLOR_ACTIVE)),
                    Span::styled(*message, Style::default().fg(COLOR_TEXT)),
                ]),
            ],
            StatusPanel::Error { message } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Error",
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_ERROR))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(COLOR_DIM)),
                    Span::styled("r", Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)),
                    Span::styled(" to try again", Style::default().fg(COLOR_DIM)),
                ]),
            ],
            StatusPanel::Empty { message } => vec![
                Line::from(""),
                Line::from(Span::styled(*message, Style::default().fg(COLOR_DIM))),
            ],
            StatusPanel::Crashed { message } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Something went wrong",
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_ERROR))),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Enter] ", Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)),
                    Span::styled("Try again", Style::default().fg(COLOR_TEXT)),
                ]),
            ],
        }
    }
}
