//! Keyboard dispatch: the modal prompt captures everything while active;
//! otherwise keys map to navigation and cell commands.

use super::*;

impl App {
    /// Main key handler. The prompt intercepts all keys while active so
    /// normal navigation and editing are suppressed.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => self.request_quit(),
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => self.save_document(),
            (KeyModifiers::CONTROL, KeyCode::Char('o')) => self.open_document(),
            (KeyModifiers::CONTROL, KeyCode::Char('g')) => self.goto_prompt(),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.copy_cell(),
            (KeyModifiers::CONTROL, KeyCode::Char('v')) => self.paste_cell(),

            // Column resize on the cursor's column
            (KeyModifiers::CONTROL, KeyCode::Right) => self.resize_current_column(1),
            (KeyModifiers::CONTROL, KeyCode::Left) => self.resize_current_column(-1),

            (KeyModifiers::CONTROL, KeyCode::Home) => self.navigate_origin(),
            (_, KeyCode::Up) => self.navigate_up(),
            (_, KeyCode::Down) => self.navigate_down(),
            (_, KeyCode::Left) => self.navigate_left(),
            (_, KeyCode::Right) => self.navigate_right(),
            (_, KeyCode::Home) => self.navigate_home(),

            (_, KeyCode::Enter) => self.edit_cell(None),
            (_, KeyCode::Delete) | (_, KeyCode::Backspace) => self.clear_current_cell(),

            // Typing starts a fresh entry seeded with the typed character
            (m, KeyCode::Char(ch)) if m.is_empty() || m == KeyModifiers::SHIFT => {
                self.edit_cell(Some(ch));
            }
            _ => {}
        }
    }
}
