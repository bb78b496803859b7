//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the data access layer

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
