use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// The search session state changed.
    StateChanged,
    /// Terminal input failed; no further keys will arrive.
    InputClosed,
}

/// Reads terminal input on a dedicated thread and merges it with ticks
/// and externally sent events.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, read_terminal)
    }

    /// Like [`new`](Self::new), but pulls events from `source` instead of
    /// the terminal. `source` waits up to the given timeout and returns
    /// `Ok(None)` when nothing arrived.
    pub fn with_source<F>(tick_rate: Duration, source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);

        let reader = thread::Builder::new()
            .name("tui-events".to_string())
            .spawn(move || read_loop(event_tx, stop_flag, tick_rate, source))
            .map_err(|err| tracing::error!(error = %err, "failed to spawn event thread"))
            .ok();
        if reader.is_none() {
            let _ = tx.send(AppEvent::InputClosed);
        }

        Self {
            rx,
            tx,
            stop,
            reader,
        }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}

fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn read_loop<F>(tx: Sender<AppEvent>, stop: Arc<AtomicBool>, tick_rate: Duration, mut source: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(POLL_INTERVAL);

        let forwarded = match source(timeout) {
            Ok(Some(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                Some(AppEvent::Key(key))
            }
            Ok(Some(Event::Paste(text))) => Some(AppEvent::Paste(text)),
            Ok(Some(Event::Resize(cols, rows))) => Some(AppEvent::Resize(cols, rows)),
            Ok(_) => None,
            Err(err) => {
                tracing::error!(error = %err, "terminal input failed");
                let _ = tx.send(AppEvent::InputClosed);
                return;
            }
        };
        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
