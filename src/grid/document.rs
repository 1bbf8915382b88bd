//! The grid document: a sparse cell store with a realized logical extent,
//! per-column display widths, cursor/scroll position, and CSV persistence.

use std::collections::HashMap;
use std::io;

/// Columns a fresh document realizes before any growth.
pub const DEFAULT_WIDTH: usize = 10;
/// Rows a fresh document realizes before any growth.
pub const DEFAULT_HEIGHT: usize = 100;
/// Display width for columns that were never resized.
pub const DEFAULT_COLUMN_WIDTH: u16 = 10;

/// Widest a column can be made via resize.
const MAX_COLUMN_WIDTH: u16 = 120;

/// A 2-D logical grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

pub struct Document {
    /// Realized logical extent. The grid is navigable beyond it; setting a
    /// cell outside grows it.
    pub width: usize,
    pub height: usize,
    /// Top-left logical coordinate currently shown in the viewport.
    pub scroll: Pos,
    /// The selected cell. Mutated only by the navigation coordinator (and
    /// goto), which keeps it consistent with `scroll`.
    pub cursor: Pos,
    /// Empty string means the document has never been named.
    pub filename: String,
    /// Set by any mutation, cleared by a successful save.
    pub changed: bool,
    column_width: Vec<u16>,
    cells: HashMap<(usize, usize), String>,
}

impl Document {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            scroll: Pos::default(),
            cursor: Pos::default(),
            filename: String::new(),
            changed: false,
            column_width: vec![DEFAULT_COLUMN_WIDTH; width],
            cells: HashMap::new(),
        }
    }

    /// Display width of a column. Columns beyond the realized extent fall
    /// back to the default so rendering never indexes out of bounds.
    pub fn column_width(&self, column: usize) -> u16 {
        self.column_width
            .get(column)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    pub fn set_column_width(&mut self, column: usize, width: u16) {
        if column >= self.column_width.len() {
            self.column_width.resize(column + 1, DEFAULT_COLUMN_WIDTH);
        }
        self.column_width[column] = width.clamp(1, MAX_COLUMN_WIDTH);
        self.changed = true;
    }

    /// Widens (positive delta) or narrows (negative delta) a column,
    /// clamped to a sane range.
    pub fn modify_column_width(&mut self, column: usize, delta: i32) {
        let current = i32::from(self.column_width(column));
        let target = (current + delta).clamp(1, i32::from(MAX_COLUMN_WIDTH));
        self.set_column_width(column, target as u16);
    }

    /// Display text for a cell. Unset cells render as empty.
    pub fn cell_text(&self, column: usize, row: usize) -> &str {
        self.cells
            .get(&(column, row))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Stores a cell's text; an empty string clears the cell. The realized
    /// extent grows to cover the index (sparse growth model).
    pub fn set_cell(&mut self, column: usize, row: usize, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear_cell(column, row);
            return;
        }

        if column >= self.width {
            self.width = column + 1;
            self.column_width.resize(self.width, DEFAULT_COLUMN_WIDTH);
        }
        if row >= self.height {
            self.height = row + 1;
        }

        self.cells.insert((column, row), text);
        self.changed = true;
    }

    pub fn clear_cell(&mut self, column: usize, row: usize) {
        if self.cells.remove(&(column, row)).is_some() {
            self.changed = true;
        }
    }

    /// Smallest (rows, columns) rectangle covering every non-empty cell.
    pub fn used_extent(&self) -> (usize, usize) {
        let mut rows = 0;
        let mut columns = 0;
        for &(column, row) in self.cells.keys() {
            rows = rows.max(row + 1);
            columns = columns.max(column + 1);
        }
        (rows, columns)
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Writes the used extent to `filename` as CSV, row-major. The caller
    /// clears `changed` on success; saving does not mutate the document.
    pub fn save(&self) -> io::Result<()> {
        if self.filename.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "document has no filename",
            ));
        }

        let (rows, columns) = self.used_extent();
        let mut writer = csv::Writer::from_path(&self.filename).map_err(io::Error::other)?;
        for row in 0..rows {
            let record: Vec<&str> = (0..columns).map(|col| self.cell_text(col, row)).collect();
            writer.write_record(&record).map_err(io::Error::other)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Reads a CSV file into a fresh document. The realized extent covers
    /// the data but never shrinks below the defaults, so a small file still
    /// presents a workable grid.
    pub fn load(filename: &str) -> io::Result<Document> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(filename)
            .map_err(io::Error::other)?;

        let mut doc = Document::new();
        let mut rows = 0;
        let mut columns = 0;
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(io::Error::other)?;
            for (column, field) in record.iter().enumerate() {
                if !field.is_empty() {
                    doc.cells.insert((column, row), field.to_string());
                }
                columns = columns.max(column + 1);
            }
            rows = row + 1;
        }

        doc.width = columns.max(DEFAULT_WIDTH);
        doc.height = rows.max(DEFAULT_HEIGHT);
        doc.column_width = vec![DEFAULT_COLUMN_WIDTH; doc.width];
        doc.filename = filename.to_string();
        doc.changed = false;
        Ok(doc)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
