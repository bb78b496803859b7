//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses and latency
//! - [`MockDataSource`] - in-memory data source with call counting

pub mod data_source;
pub mod http;

pub use data_source::MockDataSource;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
