//! Cell and column commands: editing, clearing, resizing, goto, quit.

use super::*;

use crate::grid::addr;

impl App {
    /// Opens the edit prompt for the cursor cell, labelled with its
    /// address. A seed character replaces the existing text (typing starts
    /// a fresh entry); Enter edits the text in place.
    pub(super) fn edit_cell(&mut self, seed: Option<char>) {
        let Pos { x: column, y: row } = self.doc.cursor;
        let label = format!("{}: ", addr::cell_name(column, row));
        let initial = match seed {
            Some(ch) => ch.to_string(),
            None => self.doc.cell_text(column, row).to_string(),
        };
        self.open_prompt(&label, &initial, PromptAction::EditCell { column, row });
    }

    pub(super) fn clear_current_cell(&mut self) {
        let Pos { x, y } = self.doc.cursor;
        self.doc.clear_cell(x, y);
    }

    pub(super) fn resize_current_column(&mut self, delta: i32) {
        let column = self.doc.cursor.x;
        self.doc.modify_column_width(column, delta);
    }

    pub(super) fn goto_prompt(&mut self) {
        self.open_prompt("Go to: ", "", PromptAction::GotoCell);
    }

    /// Ctrl+Q always confirms; an empty answer defaults to yes.
    pub(super) fn request_quit(&mut self) {
        self.open_prompt("Quit (Y/n): ", "", PromptAction::ConfirmQuit);
    }
}
