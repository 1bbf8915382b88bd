//! Modal line input: a single prompt captures a line of text on the footer
//! row, then performs its pending action on submit.
//!
//! The pending action is a tagged variant rather than a captured closure so
//! submit and cancel can be exercised in unit tests without a terminal.

use super::*;

use crate::grid::addr;

/// What to do with the submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Store the line as the cell's text; an empty line clears the cell.
    EditCell { column: usize, row: usize },
    /// Adopt the line as the document's filename, then save.
    SaveAs,
    /// Load the named file, replacing the current document.
    OpenFile,
    /// Quit on an empty line or an affirmative answer.
    ConfirmQuit,
    /// Move the cursor to an "A1"-style reference.
    GotoCell,
}

/// State of the active modal prompt.
pub struct Prompt {
    /// Label shown before the captured line, e.g. "Save file: ".
    pub label: String,
    /// The text captured so far.
    pub line: String,
    /// Edit position within `line`, counted in characters.
    pub cursor: usize,
    pub action: PromptAction,
}

/// Byte offset of the `char_idx`-th character of `line`.
fn byte_index(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

impl App {
    /// Requests modal input. The request is dropped when a prompt is
    /// already active, so a pending action is never lost.
    pub(super) fn open_prompt(&mut self, label: &str, initial: &str, action: PromptAction) {
        if self.prompt.is_some() {
            return;
        }

        self.prompt = Some(Prompt {
            label: label.to_string(),
            line: initial.to_string(),
            cursor: initial.chars().count(),
            action,
        });
    }

    /// Handles keypresses while a prompt is active. Enter submits, Esc
    /// cancels, everything else edits the line at the prompt cursor.
    pub(super) fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                return;
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.submit_prompt(prompt);
                }
                return;
            }
            _ => {}
        }

        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Backspace => {
                if prompt.cursor > 0 {
                    prompt.cursor -= 1;
                    let at = byte_index(&prompt.line, prompt.cursor);
                    prompt.line.remove(at);
                }
            }
            KeyCode::Delete => {
                if prompt.cursor < prompt.line.chars().count() {
                    let at = byte_index(&prompt.line, prompt.cursor);
                    prompt.line.remove(at);
                }
            }
            KeyCode::Left => {
                prompt.cursor = prompt.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if prompt.cursor < prompt.line.chars().count() {
                    prompt.cursor += 1;
                }
            }
            KeyCode::Home => {
                prompt.cursor = 0;
            }
            KeyCode::End => {
                prompt.cursor = prompt.line.chars().count();
            }
            KeyCode::Char(ch) => {
                let at = byte_index(&prompt.line, prompt.cursor);
                prompt.line.insert(at, ch);
                prompt.cursor += 1;
            }
            _ => {}
        }
    }

    /// Performs the prompt's pending action with the captured line.
    fn submit_prompt(&mut self, prompt: Prompt) {
        match prompt.action {
            PromptAction::EditCell { column, row } => {
                self.doc.set_cell(column, row, prompt.line);
            }
            PromptAction::SaveAs => {
                if prompt.line.is_empty() {
                    return;
                }
                self.doc.filename = prompt.line;
                self.do_save();
            }
            PromptAction::OpenFile => {
                if prompt.line.is_empty() {
                    return;
                }
                self.do_open(&prompt.line);
            }
            PromptAction::ConfirmQuit => {
                let answer = prompt.line.trim().to_lowercase();
                if answer.is_empty() || answer == "y" || answer == "yes" {
                    self.should_quit = true;
                }
            }
            PromptAction::GotoCell => match addr::parse_cell_ref(&prompt.line) {
                Some((column, row)) if column < MAX_GRID && row < MAX_GRID => {
                    self.jump_to(column, row);
                }
                _ => self.set_status(&format!("Invalid cell reference: {}", prompt.line)),
            },
        }
    }
}
