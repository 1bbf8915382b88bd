//! System clipboard integration for cell text.

use super::*;

impl App {
    // arboard::Clipboard is created on demand (not stored in App — it's not
    // Send and creating it is cheap).

    /// Copies the cursor cell's text to the system clipboard.
    pub(super) fn copy_cell(&mut self) {
        let Pos { x, y } = self.doc.cursor;
        let text = self.doc.cell_text(x, y).to_string();
        match arboard::Clipboard::new().and_then(|mut clip| clip.set_text(text)) {
            Ok(()) => self.set_status("Copied"),
            Err(e) => self.set_status(&format!("Clipboard unavailable: {}", e)),
        }
    }

    /// Pastes clipboard text into the cursor cell. Line breaks collapse to
    /// spaces; cells hold a single line.
    pub(super) fn paste_cell(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clip| clip.get_text()) {
            Ok(text) => {
                let text = text.replace('\r', "").replace('\n', " ");
                let Pos { x, y } = self.doc.cursor;
                self.doc.set_cell(x, y, text.trim_end());
            }
            Err(e) => self.set_status(&format!("Clipboard unavailable: {}", e)),
        }
    }
}
