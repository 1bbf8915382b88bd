use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cella::app;

#[derive(Parser)]
#[command(name = "cella", version, about = "A terminal spreadsheet editor")]
struct Cli {
    /// CSV file to open for editing
    file: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    run_editor(cli.file)
}

/// Sets up the terminal, runs the TUI editor, and restores the terminal on exit.
fn run_editor(file: Option<String>) -> io::Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, file);

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    file: Option<String>,
) -> io::Result<()> {
    let mut app = app::App::new(file);

    loop {
        app.render_frame(terminal)?;

        // Block up to 100ms waiting for the first event (prevents busy-loop,
        // gives tick() a chance to run ~10x/sec for timer expiry).
        if event::poll(Duration::from_millis(100))? {
            // Drain all queued events without blocking, then render immediately.
            loop {
                let ev = event::read()?;
                app.handle_event(ev);
                if app.should_quit {
                    break;
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
