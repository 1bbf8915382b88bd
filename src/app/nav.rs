//! The navigation and scroll coordinator: guarded transitions over
//! (cursor, scroll). Nothing else mutates either field, so the
//! cursor-visible invariants stay centralized here.

use super::*;

impl App {
    /// Up pulls the viewport along when the cursor climbs above it.
    pub(super) fn navigate_up(&mut self) {
        let doc = &mut self.doc;
        if doc.cursor.y > 0 {
            doc.cursor.y -= 1;

            if doc.cursor.y < doc.scroll.y {
                doc.scroll.y = doc.cursor.y;
            }
        }
    }

    /// Down moves the cursor only; the viewport stays put.
    pub(super) fn navigate_down(&mut self) {
        if self.doc.cursor.y < MAX_GRID - 1 {
            self.doc.cursor.y += 1;
        }
    }

    pub(super) fn navigate_left(&mut self) {
        let doc = &mut self.doc;
        if doc.cursor.x > 0 {
            doc.cursor.x -= 1;

            if doc.cursor.x < doc.scroll.x {
                doc.scroll.x = doc.cursor.x;
            }
        }
    }

    /// Right scrolls one column once the cursor passes the number of
    /// columns the previous frame could show.
    pub(super) fn navigate_right(&mut self) {
        if self.doc.cursor.x < MAX_GRID - 1 {
            self.doc.cursor.x += 1;

            if self.doc.cursor.x >= self.view_columns {
                self.doc.scroll.x += 1;
            }
        }
    }

    /// Home returns to the first column.
    pub(super) fn navigate_home(&mut self) {
        let doc = &mut self.doc;
        doc.cursor.x = 0;
        doc.scroll.x = 0;
    }

    /// Ctrl+Home returns to A1.
    pub(super) fn navigate_origin(&mut self) {
        let doc = &mut self.doc;
        doc.cursor = Pos::default();
        doc.scroll = Pos::default();
    }

    /// Jumps to an explicit target (goto). The target becomes the viewport
    /// origin so it is visible regardless of the previous scroll.
    pub(super) fn jump_to(&mut self, column: usize, row: usize) {
        let doc = &mut self.doc;
        doc.cursor = Pos { x: column, y: row };
        doc.scroll = doc.cursor;
    }
}
