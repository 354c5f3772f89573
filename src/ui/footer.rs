use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter: Search │ ↑/↓ PgUp/PgDn: Scroll │ Ctrl+U: Clear │ Esc: Quit";

pub struct Footer;

impl Footer {
    pub fn widget(area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing characters.
        let content_width = usize::from(area.width.saturating_sub(2));
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
