mod app;
mod input;
mod render;
mod terminal;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event as TermEvent};
use crossterm::terminal::SetTitle;
use crossterm::ExecutableCommand;
use tomatimer_core::storage::UiConfig;
use tomatimer_core::CuePlayer;

/// Run the interactive timer until the user quits.
///
/// Single-threaded: key presses and cadence deadlines are handled one at a
/// time from this loop.
pub fn run<P: CuePlayer>(app: &mut App<P>, ui: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = terminal::setup_terminal()?;

    loop {
        if ui.set_window_title {
            if let Some(title) = app.take_title_change() {
                io::stdout().execute(SetTitle(title))?;
            }
        }

        let snapshot = app.snapshot();
        terminal.draw(|frame| render::draw(frame, &snapshot, ui.show_help))?;
        if app.should_quit() {
            break;
        }

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let TermEvent::Key(key) = event::read()? {
                if let Some(action) = input::action_for(key) {
                    app.dispatch(action, Instant::now());
                }
            }
        }
        app.on_deadline(Instant::now());
    }

    drop(guard);
    Ok(())
}
