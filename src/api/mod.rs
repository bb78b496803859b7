//! Data access layer.
//!
//! [`DashboardApi`] issues `GET {base}/users` and `GET {base}/posts` and, on
//! any failure, answers with data from a [`FallbackSource`] so views always
//! have something to render.

mod client;
mod fallback;
mod images;

pub use client::{DashboardApi, DEFAULT_API_URL};
pub use fallback::{FallbackSource, MockDataset, StaticFallback};
pub use images::{curated_image, ImagePolicy, CURATED_IMAGES};
