//! Reusable UI Components
//!
//! Building blocks shared by the three views. Card builders return plain
//! `Line`s so they can be measured, scrolled and printed as text.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal screen selector with key hints
//! - `StatusPanel` - Loading, error, empty and crashed states
//! - `PostCard` - A post with its comment preview
//! - `UserCard` - A leaderboard row
//! - `CardList` - Scrolling list of cards

mod card_list;
pub mod post_card;
mod status_panel;
mod tab_selector;
pub mod user_card;

pub use card_list::{render_card_list, scroll_offset};
pub use post_card::{post_card_lines, CardFlags, MIN_CARD_WIDTH};
pub use status_panel::{spinner_char, StatusPanel};
pub use tab_selector::{render_tab_selector, screen_tabs, TabItem};
pub use user_card::{comment_label, user_card_lines};
