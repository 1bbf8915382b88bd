//! Fixed-width text painting into the shared screen buffer.

use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// Horizontal alignment of text within a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Paints `text` into a horizontal run of cells starting at (x, y).
///
/// With `length = Some(n)` exactly `n` cells are painted: the text is placed
/// according to `align`, characters falling outside the field are clipped,
/// and uncovered cells are space-filled so the style covers the whole field.
/// With `length = None` the text is painted one cell per character with no
/// padding or clipping.
///
/// All measurement and indexing is in characters, never bytes, so multi-byte
/// text cannot be split mid-character. Writes outside the buffer area are
/// silently dropped.
pub fn draw_text(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    length: Option<u16>,
    style: Style,
    text: &str,
    align: Align,
) {
    let Some(length) = length else {
        for (i, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            if let Some(cell) = buf.cell_mut((cx, y)) {
                cell.set_char(ch).set_style(style);
            }
        }
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let content_len = chars.len() as i32;

    // Center and Right may start left of the field, clipping the head.
    let start = match align {
        Align::Left => 0,
        Align::Center => (length as i32 / 2) - (content_len / 2),
        Align::Right => length as i32 - content_len,
    };

    for i in 0..length as i32 {
        let char_idx = i - start;
        let ch = if (0..content_len).contains(&char_idx) {
            chars[char_idx as usize]
        } else {
            ' '
        };
        let Some(cx) = x.checked_add(i as u16) else {
            break;
        };
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}
