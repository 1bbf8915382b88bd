use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use cella::app::App;
use cella::grid::Pos;
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────────────

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_char(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn char_key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

fn type_line(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_event(char_key(ch));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// A. Navigation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn arrow_keys_move_the_cursor() {
    let mut app = App::new(None);
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Right));
    assert_eq!(app.doc.cursor, Pos { x: 1, y: 2 });

    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.doc.cursor, Pos { x: 0, y: 1 });
}

#[test]
fn boundary_moves_are_silently_ignored() {
    let mut app = App::new(None);
    app.handle_event(key(KeyCode::Up));
    app.handle_event(key(KeyCode::Left));
    assert_eq!(app.doc.cursor, Pos { x: 0, y: 0 });
    assert!(!app.doc.changed);
}

#[test]
fn cursor_may_travel_beyond_the_realized_extent() {
    let mut app = App::new(None);
    let height = app.doc.height;
    for _ in 0..height + 5 {
        app.handle_event(key(KeyCode::Down));
    }
    assert_eq!(app.doc.cursor.y, height + 5);
}

// ═══════════════════════════════════════════════════════════════════════
// B. Editing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn enter_edit_submit_stores_the_cell() {
    let mut app = App::new(None);
    app.handle_event(key(KeyCode::Enter));
    type_line(&mut app, "hello");
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.doc.cell_text(0, 0), "hello");
    assert!(app.doc.changed);
}

#[test]
fn edits_land_on_the_cursor_cell() {
    let mut app = App::new(None);
    app.handle_event(key(KeyCode::Right));
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));
    type_line(&mut app, "b2");
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.doc.cell_text(1, 1), "b2");
    assert_eq!(app.doc.cell_text(0, 0), "");
}

#[test]
fn esc_cancels_an_edit() {
    let mut app = App::new(None);
    app.handle_event(key(KeyCode::Enter));
    type_line(&mut app, "nope");
    app.handle_event(key(KeyCode::Esc));

    assert_eq!(app.doc.cell_text(0, 0), "");
    assert!(app.prompt.is_none());
}

#[test]
fn backspace_clears_the_cursor_cell() {
    let mut app = App::new(None);
    app.doc.set_cell(0, 0, "x");
    app.handle_event(key(KeyCode::Backspace));
    assert_eq!(app.doc.cell_text(0, 0), "");
}

// ═══════════════════════════════════════════════════════════════════════
// C. File commands
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ctrl_s_saves_a_named_document_without_prompting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");

    let mut app = App::new(Some(path.to_str().unwrap().to_string()));
    app.handle_event(key(KeyCode::Enter));
    type_line(&mut app, "v1");
    app.handle_event(key(KeyCode::Enter));

    app.handle_event(ctrl_char('s'));
    assert!(app.prompt.is_none());
    assert!(!app.doc.changed);
    assert!(std::fs::read_to_string(&path).unwrap().contains("v1"));
}

#[test]
fn ctrl_o_prompts_and_loads_the_named_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.csv");
    std::fs::write(&path, "one,two\nthree,four\n").unwrap();

    let mut app = App::new(None);
    app.handle_event(ctrl_char('o'));
    type_line(&mut app, path.to_str().unwrap());
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.doc.cell_text(0, 0), "one");
    assert_eq!(app.doc.cell_text(1, 1), "four");
    assert_eq!(app.doc.filename, path.to_str().unwrap());
    assert!(!app.doc.changed);
}

#[test]
fn quit_requires_confirmation() {
    let mut app = App::new(None);
    app.handle_event(ctrl_char('q'));
    assert!(!app.should_quit);
    app.handle_event(key(KeyCode::Enter));
    assert!(app.should_quit);
}

// ═══════════════════════════════════════════════════════════════════════
// D. Goto
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn ctrl_g_jumps_to_a_reference() {
    let mut app = App::new(None);
    app.handle_event(ctrl_char('g'));
    type_line(&mut app, "aa15");
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.doc.cursor, Pos { x: 26, y: 14 });
}
