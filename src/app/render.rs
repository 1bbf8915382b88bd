//! Frame composition: one full redraw per event — column and row headers,
//! the visible workspace, and the two-row footer with the modal input line.

use super::*;

use ratatui::layout::Position;
use ratatui::Frame;

use crate::grid::addr;
use crate::grid::layout::{visible_columns, ColumnInfo, ROW_HEADER_WIDTH};
use crate::grid::text::draw_text;
use crate::grid::Align;
use crate::theme;

/// Width of the footer's cursor address readout.
const ADDRESS_WIDTH: u16 = 8;

impl App {
    /// Runs one frame of the main loop: draw + tick.
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.tick();
        Ok(())
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// One full-screen redraw. The buffer starts cleared; a document with a
    /// degenerate extent draws only the footer.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.doc.width > 0 && self.doc.height > 0 {
            let info = visible_columns(&self.doc, area.width);
            if !info.is_empty() {
                self.view_columns = info.len();
            }
            self.draw_headers(frame, &info);
            self.draw_workspace(frame, &info);
        }

        self.draw_footer(frame);
    }

    /// Column headers along the top, row headers down the left band; each
    /// highlighted iff it lines up with the cursor.
    fn draw_headers(&self, frame: &mut Frame, info: &[ColumnInfo]) {
        let area = frame.area();
        let footer_y = area.height.saturating_sub(2);
        let doc = &self.doc;
        let buf = frame.buffer_mut();

        for ci in info {
            let style = theme::header_style(doc.cursor.x == ci.column);
            draw_text(
                buf,
                ci.x,
                0,
                Some(ci.width),
                style,
                &addr::column_label(ci.column),
                Align::Center,
            );
        }

        // Row headers exist only for rows inside the document
        for y in 1..footer_y {
            let row = doc.scroll.y + y as usize - 1;
            if row >= doc.height {
                break;
            }
            let style = theme::header_style(doc.cursor.y == row);
            let label = format!("{} ", addr::row_label(row));
            draw_text(buf, 0, y, Some(ROW_HEADER_WIDTH), style, &label, Align::Right);
        }
    }

    /// Every visible row × every visible column, left-aligned, with the
    /// cursor cell highlighted.
    fn draw_workspace(&self, frame: &mut Frame, info: &[ColumnInfo]) {
        let area = frame.area();
        let footer_y = area.height.saturating_sub(2);
        let doc = &self.doc;
        let buf = frame.buffer_mut();

        for y in 1..footer_y {
            let row = doc.scroll.y + y as usize - 1;
            if row >= doc.height {
                break;
            }
            for ci in info {
                let selected = doc.cursor.x == ci.column && doc.cursor.y == row;
                let style = theme::header_style(selected);
                draw_text(
                    buf,
                    ci.x,
                    y,
                    Some(ci.width),
                    style,
                    doc.cell_text(ci.column, row),
                    Align::Left,
                );
            }
        }
    }

    /// Two-row footer: filename bar with the cursor address readout, then
    /// the input row — prompt and visible edit cursor while modal input is
    /// active, otherwise the cell's raw text (or a transient status).
    fn draw_footer(&self, frame: &mut Frame) {
        let area = frame.area();
        let w = area.width;
        let footer_y = area.height.saturating_sub(2);
        let input_y = footer_y.saturating_add(1);
        let doc = &self.doc;

        let mut name = if doc.filename.is_empty() {
            "[No Name]".to_string()
        } else {
            doc.filename.clone()
        };
        if doc.changed {
            name.push('*');
        }
        let address = format!(" {} ", addr::cell_name(doc.cursor.x, doc.cursor.y));

        let (input_text, input_cursor) = match &self.prompt {
            Some(prompt) => {
                let x = (prompt.label.chars().count() + prompt.cursor)
                    .min(w.saturating_sub(1) as usize) as u16;
                (
                    format!("{}{}", prompt.label, prompt.line),
                    Some(Position::new(x, input_y)),
                )
            }
            None if !self.status_message.is_empty() => (self.status_message.clone(), None),
            None => (doc.cell_text(doc.cursor.x, doc.cursor.y).to_string(), None),
        };

        let bar = theme::footer_style();
        let buf = frame.buffer_mut();
        draw_text(buf, 0, footer_y, Some(w), bar, &name, Align::Left);
        draw_text(
            buf,
            w.saturating_sub(ADDRESS_WIDTH),
            footer_y,
            Some(ADDRESS_WIDTH),
            bar,
            &address,
            Align::Right,
        );
        draw_text(
            buf,
            0,
            input_y,
            Some(w),
            theme::input_style(),
            &input_text,
            Align::Left,
        );

        // The terminal cursor is shown only while capturing modal input
        if let Some(position) = input_cursor {
            frame.set_cursor_position(position);
        }
    }
}
