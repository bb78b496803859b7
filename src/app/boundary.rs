//! Error boundary around the view tree.

use crate::error::RenderError;

/// Holds the first rendering error until the user dismisses it.
///
/// While tripped, the views are replaced by a "Something went wrong" panel.
/// Resetting only clears the boundary; data is not re-fetched.
#[derive(Debug, Clone, Default)]
pub struct ErrorBoundary {
    error: Option<RenderError>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendering error. Later errors are ignored while tripped.
    pub fn capture(&mut self, error: RenderError) {
        if self.error.is_some() {
            return;
        }
        tracing::error!(
            "Error caught by ErrorBoundary [{}]: {}",
            error.error_code(),
            error
        );
        self.error = Some(error);
    }

    pub fn is_tripped(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&RenderError> {
        self.error.as_ref()
    }

    /// "Try again": clear the captured error.
    pub fn reset(&mut self) {
        self.error = None;
    }
}
