//! Application state and event dispatch for the spreadsheet editor.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::grid::document::Document;
use crate::grid::Pos;

pub use prompt::{Prompt, PromptAction};

/// How long status line messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// Hard ceiling on navigable rows and columns. An explicit constant rather
/// than a machine integer limit; the sparse grid never realizes this much.
pub const MAX_GRID: usize = 1_048_576;

/// Right-navigation threshold before the first frame measures the terminal.
const INITIAL_VIEW_COLUMNS: usize = 8;

pub struct App {
    // --- Core state ---
    pub doc: Document,
    /// The active modal prompt, if any. While set, all keys edit its line.
    pub prompt: Option<Prompt>,
    pub should_quit: bool,

    // --- Status line ---
    pub status_message: String,
    pub status_time: Option<Instant>,

    // --- Internal tracking ---
    /// Grid columns the last frame could show; the Right-navigation scroll
    /// threshold. Refreshed by the frame composer each redraw.
    pub view_columns: usize,
}

impl App {
    /// Builds the initial state. An existing file is loaded; a missing one
    /// starts an empty document that will be created on first save.
    pub fn new(filename: Option<String>) -> Self {
        let mut app = Self {
            doc: Document::new(),
            prompt: None,
            should_quit: false,
            status_message:
                "Ctrl+S: save | Ctrl+O: open | Ctrl+G: go to | Ctrl+Q: quit | Enter: edit"
                    .to_string(),
            status_time: Some(Instant::now()),
            view_columns: INITIAL_VIEW_COLUMNS,
        };

        if let Some(name) = filename {
            if std::path::Path::new(&name).exists() {
                app.do_open(&name);
            } else {
                app.doc.filename = name;
            }
        }

        app
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Exactly one redraw follows each event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            // Layout is derived fresh every redraw, so resize needs no bookkeeping
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called every 100ms from the main loop; expires transient status text.
    pub fn tick(&mut self) {
        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    /// Shows a temporary message on the footer input row.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }
}

mod clipboard;
mod edit;
mod input;
mod nav;
mod prompt;
mod render;
mod save;
