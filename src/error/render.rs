//! Errors raised by view renderers and caught by the error boundary.

use thiserror::Error;

/// A view could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The allotted area cannot hold the component.
    #[error("{component} needs at least {min_width}x{min_height}, got {width}x{height}")]
    AreaTooSmall {
        component: String,
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// View state that the renderer cannot represent.
    #[error("{component} is in an invalid state: {message}")]
    InvalidState { component: String, message: String },
}

impl RenderError {
    /// Component that failed to render.
    pub fn component(&self) -> &str {
        match self {
            RenderError::AreaTooSmall { component, .. }
            | RenderError::InvalidState { component, .. } => component,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RenderError::AreaTooSmall { .. } => "E_UI_AREA",
            RenderError::InvalidState { .. } => "E_UI_STATE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::AreaTooSmall { min_width, min_height, .. } => format!(
                "The terminal is too small. Resize it to at least {}x{}.",
                min_width, min_height
            ),
            RenderError::InvalidState { .. } => "An unexpected error occurred".to_string(),
        }
    }
}
