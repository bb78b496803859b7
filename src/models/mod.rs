//! Data model shared by the data access layer, the derivation helpers and the UI.

mod post;
mod user;

pub use post::{Comment, Post};
pub use user::User;
