//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`mock::MockHttpClient`] - configurable HTTP test double
//! - [`mock::MockDataSource`] - data source test double

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockDataSource, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
