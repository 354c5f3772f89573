use crate::session::SearchSession;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Run the interactive search screen until the user quits.
///
/// Blocks the calling thread; searches run as tasks on `runtime`.
pub fn run(session: SearchSession, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let forwarder = forward_state_changes(&session, &runtime, &events);
    let mut app = App::new(session, runtime);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.insert_text(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                app.refresh();
            }
            Ok(AppEvent::StateChanged) => app.refresh(),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("terminal input closed, leaving search screen");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    forwarder.abort();
    drop(guard);
    Ok(())
}

/// Wake the UI loop whenever background searches change the session state.
fn forward_state_changes(
    session: &SearchSession,
    runtime: &Handle,
    events: &EventHandler,
) -> tokio::task::JoinHandle<()> {
    let mut rx = session.subscribe();
    let tx = events.sender();
    runtime.spawn(async move {
        while rx.changed().await.is_ok() {
            if tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    })
}
