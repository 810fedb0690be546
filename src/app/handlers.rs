//! Keyboard and mouse dispatch.
//!
//! The run loop feeds crossterm events here; everything else is a method
//! on [`App`].

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AuthField, Screen};
use crate::ui::components::STAR_COUNT;

impl App {
    /// Handle a key press. Returns `true` when the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global bindings first.
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return true;
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.user.is_some() {
                    self.logout();
                }
                return true;
            }
            _ => {}
        }

        match self.screen {
            Screen::Auth => self.handle_auth_key(key),
            Screen::Gallery => self.handle_gallery_key(key),
            Screen::StyleDetail => self.handle_detail_key(key),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_auth_mode();
            }
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.federated_sign_in();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.auth_focus = self.auth_focus.toggled();
                self.mark_dirty();
            }
            KeyCode::Enter => self.submit_auth(),
            KeyCode::Backspace => {
                self.focused_auth_input().backspace();
                self.mark_dirty();
            }
            KeyCode::Delete => {
                self.focused_auth_input().delete_char();
                self.mark_dirty();
            }
            KeyCode::Left => self.focused_auth_input().move_cursor_left(),
            KeyCode::Right => self.focused_auth_input().move_cursor_right(),
            KeyCode::Home => self.focused_auth_input().move_cursor_home(),
            KeyCode::End => self.focused_auth_input().move_cursor_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_auth_input().insert_char(c);
                self.mark_dirty();
            }
            _ => return false,
        }
        true
    }

    fn handle_gallery_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => self.open_selected_style(),
            _ => return false,
        }
        true
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.back_to_gallery(),
            KeyCode::Left => {
                self.set_draft_rating(self.draft_rating.saturating_sub(1));
            }
            KeyCode::Right => {
                self.set_draft_rating((self.draft_rating + 1).min(STAR_COUNT));
            }
            KeyCode::Enter => self.submit_review(),
            KeyCode::Backspace => {
                self.comment.backspace();
                self.mark_dirty();
            }
            KeyCode::Delete => {
                self.comment.delete_char();
                self.mark_dirty();
            }
            KeyCode::Home => self.comment.move_cursor_home(),
            KeyCode::End => self.comment.move_cursor_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.comment.insert_char(c);
                self.mark_dirty();
            }
            _ => return false,
        }
        true
    }

    /// Handle a mouse event. Only the Style-detail screen's star picker
    /// cares about the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::StyleDetail {
            return;
        }
        match mouse.kind {
            MouseEventKind::Moved => {
                if self.star_picker.pointer_moved(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(rating) = self.star_picker.click(mouse.column, mouse.row) {
                    self.set_draft_rating(rating);
                }
            }
            _ => {}
        }
    }

    fn focused_auth_input(&mut self) -> &mut crate::widgets::InputBox {
        match self.auth_focus {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}
