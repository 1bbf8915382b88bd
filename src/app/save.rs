//! Save and open flows: prompting for a filename when needed, reporting
//! collaborator failures through the status line instead of crashing.

use super::*;

impl App {
    /// Ctrl+S: saves, prompting for a filename first when unnamed.
    pub(super) fn save_document(&mut self) {
        if self.doc.filename.is_empty() {
            self.open_prompt("Save file: ", "", PromptAction::SaveAs);
        } else {
            self.do_save();
        }
    }

    /// Writes the document and clears the dirty flag on success.
    pub(super) fn do_save(&mut self) {
        match self.doc.save() {
            Ok(()) => {
                self.doc.changed = false;
                self.set_status(&format!("Saved {}", self.doc.filename));
            }
            Err(e) => {
                self.set_status(&format!("Could not save document: {}", e));
            }
        }
    }

    /// Ctrl+O: prompts for a file to open.
    pub(super) fn open_document(&mut self) {
        self.open_prompt("Open file: ", "", PromptAction::OpenFile);
    }

    /// Replaces the current document on success; on failure the current
    /// document is left untouched.
    pub(super) fn do_open(&mut self, filename: &str) {
        match Document::load(filename) {
            Ok(doc) => self.doc = doc,
            Err(e) => {
                self.set_status(&format!("Could not open document: {}", e));
            }
        }
    }
}
