use crate::session::SearchSession;
use crate::ui::search::SearchState;
use tokio::runtime::Handle;

/// Interactive search screen.
///
/// Holds a snapshot of the session state for rendering; the session itself
/// is the source of truth and is updated from background tasks.
pub struct App {
    should_quit: bool,
    session: SearchSession,
    runtime: Handle,
    state: SearchState,
    scroll: usize,
    tick: u8,
}

impl App {
    pub fn new(session: SearchSession, runtime: Handle) -> Self {
        let state = session.snapshot();
        Self {
            should_quit: false,
            session,
            runtime,
            state,
            scroll: 0,
            tick: 0,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// First visible result row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        if self.state.loading {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Pull the latest session state.
    pub fn refresh(&mut self) {
        let previous_generation = self.state.generation;
        self.state = self.session.snapshot();
        if self.state.generation != previous_generation {
            self.scroll = 0;
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.state.query.clone();
        text.push(ch);
        self.set_query(text);
    }

    /// Insert pasted text; line breaks become spaces.
    pub fn insert_text(&mut self, pasted: &str) {
        let mut text = self.state.query.clone();
        text.extend(pasted.chars().map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch }));
        self.set_query(text);
    }

    pub fn delete_char(&mut self) {
        let mut text = self.state.query.clone();
        if text.pop().is_some() {
            self.set_query(text);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn set_query(&mut self, text: String) {
        self.session.set_query(text);
        self.refresh();
    }

    /// Submit the input text in the background.
    ///
    /// Ignored while a request is already in flight.
    pub fn submit(&mut self) {
        if self.state.loading {
            return;
        }
        if let Some((generation, query)) = self.session.begin(&self.state.query) {
            let session = self.session.clone();
            self.runtime.spawn(async move {
                session.execute(generation, query).await;
            });
        }
        self.refresh();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let next = self.scroll.saturating_add_signed(delta);
        self.scroll = next.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.state.results.len().saturating_sub(1)
    }
}
