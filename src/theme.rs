use ratatui::style::{Color, Modifier, Style};

// Base colors — Color::Reset inherits terminal defaults
pub const BG: Color = Color::Reset;
pub const FG: Color = Color::Reset;

// Pre-built styles
pub fn base_style() -> Style {
    Style::default()
}

/// Reverse video: used for the footer bar and for headers/cells aligned
/// with the cursor.
pub fn highlight_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Header and workspace cells highlight iff they line up with the cursor.
pub fn header_style(selected: bool) -> Style {
    if selected {
        highlight_style()
    } else {
        base_style()
    }
}

pub fn footer_style() -> Style {
    highlight_style()
}

pub fn input_style() -> Style {
    base_style()
}
