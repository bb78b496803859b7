//! Curated post images and the policy for applying them to fetched posts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::Post;

/// Curated image collection, assigned to posts by index.
pub const CURATED_IMAGES: [&str; 6] = [
    "https://images.pexels.com/photos/2150/sky-space-dark-galaxy.jpg",
    "https://images.pexels.com/photos/66898/elephant-cub-tsavo-kenya-66898.jpeg",
    "https://images.pexels.com/photos/434090/pexels-photo-434090.jpeg",
    "https://images.pexels.com/photos/1770918/pexels-photo-1770918.jpeg",
    "https://images.pexels.com/photos/247431/pexels-photo-247431.jpeg",
    "https://images.pexels.com/photos/1108099/pexels-photo-1108099.jpeg",
];

/// Curated image for the post at `index` in a fetched list.
pub fn curated_image(index: usize) -> &'static str {
    CURATED_IMAGES[index % CURATED_IMAGES.len()]
}

/// How curated images are applied to posts fetched from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePolicy {
    /// Every post gets the curated image for its index; server images are discarded.
    #[default]
    Curated,
    /// Only posts without an image get the curated image for their index.
    FillMissing,
    /// Server images are kept as they are.
    Preserve,
}

impl ImagePolicy {
    /// Apply the policy to a freshly fetched list, in place.
    pub fn apply(self, posts: &mut [Post]) {
        for (index, post) in posts.iter_mut().enumerate() {
            match self {
                ImagePolicy::Curated => {
                    if let Some(ref server_url) = post.image_url {
                        tracing::debug!(
                            "Replacing server image for post {} ({}) with curated image",
                            post.id,
                            server_url
                        );
                    }
                    post.image_url = Some(curated_image(index).to_string());
                }
                ImagePolicy::FillMissing => {
                    if post.image_url.is_none() {
                        post.image_url = Some(curated_image(index).to_string());
                    }
                }
                ImagePolicy::Preserve => {}
            }
        }
    }
}

impl FromStr for ImagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "curated" => Ok(ImagePolicy::Curated),
            "fill_missing" => Ok(ImagePolicy::FillMissing),
            "preserve" => Ok(ImagePolicy::Preserve),
            other => Err(format!("unknown image policy: {}", other)),
        }
    }
}
