use crate::config::Config;
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runs the UI until the user quits. Owns the terminal for the whole
/// duration; the guard restores it even across a panic.
pub fn run(store: Store, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(store);
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_rate_ms = config.tick_rate_ms, "ui started");

    loop {
        if app.take_dirty() {
            let view = app.view();
            terminal.draw(|frame| draw(frame, &view))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(_, _)) => app.mark_dirty(),
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("ui stopped");
    drop(guard);
    Ok(())
}
