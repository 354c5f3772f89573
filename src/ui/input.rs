use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PgUp/PgDn.
const PAGE: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE),
        KeyCode::PageDown => app.scroll_by(PAGE),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{SearchError, SearchRequest, SearchResponse, SearchService};
    use crate::session::SearchSession;
    use crate::ui::search::EMPTY_QUERY_MESSAGE;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait]
    impl SearchService for Unreachable {
        async fn search(&self, _: &SearchRequest) -> Result<SearchResponse, SearchError> {
            panic!("no request expected");
        }
    }

    fn app() -> App {
        let session = SearchSession::new(Arc::new(Unreachable));
        App::new(session, tokio::runtime::Handle::current())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            handle_key(app, press(KeyCode::Char(ch)));
        }
    }

    #[tokio::test]
    async fn typing_edits_the_session_query() {
        let mut app = app();
        type_text(&mut app, "vipx");
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.state().query, "vip");
        assert_eq!(app.session().snapshot().query, "vip");
    }

    #[tokio::test]
    async fn ctrl_u_clears_input() {
        let mut app = app();
        type_text(&mut app, "lockers");
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.state().query, "");
    }

    #[tokio::test]
    async fn control_chords_do_not_insert_text() {
        let mut app = app();
        handle_key(&mut app, ctrl('x'));
        assert_eq!(app.state().query, "");
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn enter_on_blank_input_shows_error() {
        let mut app = app();
        type_text(&mut app, "   ");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.state().error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        assert!(!app.state().loading);
    }

    #[tokio::test]
    async fn quit_keys() {
        for key in [press(KeyCode::Esc), ctrl('c'), ctrl('q')] {
            let mut app = app();
            handle_key(&mut app, key);
            assert!(app.should_quit());
        }
    }

    #[tokio::test]
    async fn paste_flattens_line_breaks() {
        let mut app = app();
        app.insert_text("orders\r\nin Paris\n");
        assert_eq!(app.state().query, "orders  in Paris ");
    }

    #[tokio::test]
    async fn scroll_stays_at_top_without_results() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::PageDown));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.scroll(), 0);
    }
}
