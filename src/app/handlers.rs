//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, AppMessage, Screen};
use crate::sync::Collection;

impl App {
    /// Apply a poll start or a fetch completion.
    pub fn handle_message(&mut self, msg: AppMessage) {
        let (collection, seq, applied) = match msg {
            AppMessage::PostsFetchStarted { seq } => {
                if self.posts.begin_fetch(seq) {
                    self.mark_dirty();
                }
                return;
            }
            AppMessage::UsersLoaded { seq, result } => {
                (Collection::Users, seq, self.users.apply(seq, result))
            }
            AppMessage::PostsLoaded { seq, result } => {
                (Collection::Posts, seq, self.posts.apply(seq, result))
            }
        };

        if let Some(indicator) = self.refresh.as_mut() {
            indicator.observe(collection, seq);
        }

        if applied {
            self.clamp_selection();
            self.mark_dirty();
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.shutdown();
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.shutdown();
            return;
        }

        // "Try again" is the only action while the boundary is tripped
        if self.boundary.is_tripped() {
            if key.code == KeyCode::Enter {
                self.boundary.reset();
                self.mark_dirty();
            }
            return;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(screen) = Screen::from_index(index) {
                    self.switch_screen(screen);
                }
            }
            KeyCode::Tab => self.switch_screen(self.screen.next()),
            KeyCode::BackTab => self.switch_screen(self.screen.previous()),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.toggle_expanded(),
            KeyCode::Char('l') => self.toggle_liked(),
            KeyCode::Char('r') => self.refresh_or_retry(),
            _ => {}
        }
    }
}
