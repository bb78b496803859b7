//! Navigation and card state methods for the App.

use super::{App, Screen};

impl App {
    /// Mount `screen` unless it is already showing.
    pub fn switch_screen(&mut self, screen: Screen) {
        if screen != self.screen {
            self.mount(screen);
        }
    }

    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Keep the selection inside the list after the data changed.
    pub fn clamp_selection(&mut self) {
        let count = self.item_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    /// Show all comments of the selected post, or collapse them again.
    pub fn toggle_expanded(&mut self) {
        if let Some(post) = self.selected_post() {
            if !self.expanded.remove(&post.id) {
                self.expanded.insert(post.id);
            }
            self.mark_dirty();
        }
    }

    pub fn toggle_liked(&mut self) {
        if let Some(post) = self.selected_post() {
            if !self.liked.remove(&post.id) {
                self.liked.insert(post.id);
            }
            self.mark_dirty();
        }
    }

    pub fn is_expanded(&self, post_id: u64) -> bool {
        self.expanded.contains(&post_id)
    }

    pub fn is_liked(&self, post_id: u64) -> bool {
        self.liked.contains(&post_id)
    }
}
