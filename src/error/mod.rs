//! Error types for buzzboard.
//!
//! | Error | Where it is raised | Who handles it |
//! |-------|--------------------|----------------|
//! | [`FetchError`] | data access layer | logged, replaced by fallback data |
//! | [`RenderError`] | view renderers | the UI error boundary |
//! | [`ConfigError`] | config loading | reported at startup |
//!
//! Each type exposes `error_code()` for log lines and, where it reaches a
//! user, `user_message()`.

mod config;
mod fetch;
mod render;

pub use config::ConfigError;
pub use fetch::FetchError;
pub use render::RenderError;
