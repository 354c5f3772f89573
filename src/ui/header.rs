use crate::ui::search::{SearchPhase, SearchState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED, STATUS_ERROR, STATUS_OK, STATUS_WARN, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct Header;

impl Header {
    pub fn widget(state: &SearchState, tick: u8) -> Paragraph<'static> {
        let (status, color) = match state.phase() {
            SearchPhase::Idle => ("Type a question about orders".to_string(), MUTED),
            SearchPhase::Searching => (
                format!("{} Searching…", SPINNER[usize::from(tick) % SPINNER.len()]),
                STATUS_WARN,
            ),
            SearchPhase::Failed => ("Search failed".to_string(), STATUS_ERROR),
            SearchPhase::Done { count } => (
                format!("{count} result{}", if count == 1 { "" } else { "s" }),
                STATUS_OK,
            ),
        };

        let mut spans = vec![
            Span::styled(
                "  nlsearch",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(MUTED)),
            Span::styled(status, Style::default().fg(color)),
        ];
        if state.has_searched() {
            spans.push(Span::styled("  │  ", Style::default().fg(MUTED)));
            spans.push(Span::styled(
                format!("\"{}\"", state.last_search_query),
                Style::default().fg(TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
