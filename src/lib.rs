//! buzzboard - a terminal dashboard for a social feed
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod sync;
pub mod terminal;
pub mod traits;
pub mod ui;
