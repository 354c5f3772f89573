use crate::report::{result_cells, RESULT_COLUMNS};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, visible_result_rows};
use crate::ui::search::SearchState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, LABEL, MUTED, ROW_HIGHLIGHT, STATUS_ERROR, STATUS_WARN, TEXT,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "e.g. stored lockers in Paris last week, not expired";

const COLUMN_WIDTHS: [Constraint; 8] = [
    Constraint::Length(16),
    Constraint::Length(12),
    Constraint::Length(10),
    Constraint::Fill(2),
    Constraint::Length(12),
    Constraint::Fill(1),
    Constraint::Fill(1),
    Constraint::Length(19),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let filter_lines = filter_lines(state);
    let notice_lines = notice_lines(state);
    let regions = layout_regions(frame.area(), filter_lines.len(), notice_lines.len());

    frame.render_widget(Header::widget(state, app.tick()), regions.header);
    draw_input(frame, state, regions.input);

    if !filter_lines.is_empty() {
        frame.render_widget(
            Paragraph::new(filter_lines).block(bordered(" Filters ")),
            regions.filters,
        );
    }
    if !notice_lines.is_empty() {
        frame.render_widget(
            Paragraph::new(notice_lines)
                .wrap(Wrap { trim: true })
                .block(bordered(" Notices ")),
            regions.notices,
        );
    }

    draw_results(frame, app, regions.results);
    frame.render_widget(Footer::widget(regions.footer), regions.footer);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_input(frame: &mut Frame<'_>, state: &SearchState, area: Rect) {
    let line = if state.query.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(MUTED)))
    } else {
        Line::from(Span::styled(state.query.clone(), Style::default().fg(TEXT)))
    };

    // Keep the tail of long input visible.
    let inner_width = usize::from(area.width.saturating_sub(2));
    let typed = state.query.chars().count();
    let offset = typed.saturating_sub(inner_width.saturating_sub(1));
    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(
        Paragraph::new(line)
            .scroll((0, scroll))
            .block(bordered(" Search ")),
        area,
    );

    if area.width > 2 && area.height > 2 {
        let column = u16::try_from(typed - offset).unwrap_or(u16::MAX);
        let x = area.x + 1 + column.min(area.width - 3);
        frame.set_cursor_position((x, area.y + 1));
    }
}

pub(crate) fn filter_lines(state: &SearchState) -> Vec<Line<'static>> {
    state
        .summary()
        .into_iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("{}: ", entry.label), Style::default().fg(LABEL)),
                Span::styled(entry.value, Style::default().fg(TEXT)),
            ])
        })
        .collect()
}

pub(crate) fn notice_lines(state: &SearchState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )));
    }
    for warning in &state.warnings {
        lines.push(Line::from(Span::styled(
            format!("! {warning}"),
            Style::default().fg(STATUS_WARN),
        )));
    }
    if let Some(follow_up) = &state.follow_up {
        lines.push(Line::from(Span::styled(
            format!("→ {follow_up}"),
            Style::default().fg(ACCENT),
        )));
    }
    lines
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let title = if state.results.is_empty() {
        " Results ".to_string()
    } else {
        format!(
            " Results {}-{} of {} ",
            app.scroll() + 1,
            (app.scroll() + visible_result_rows(area)).min(state.results.len()),
            state.results.len()
        )
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.results.is_empty() {
        let message = if state.has_searched() && !state.loading && state.error.is_none() {
            "No orders matched."
        } else {
            ""
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(MUTED))).block(block),
            area,
        );
        return;
    }

    let rows = state
        .results
        .iter()
        .skip(app.scroll())
        .take(visible_result_rows(area))
        .enumerate()
        .map(|(index, record)| {
            let style = if index % 2 == 1 {
                Style::default().fg(TEXT).bg(ROW_HIGHLIGHT)
            } else {
                Style::default().fg(TEXT)
            };
            Row::new(result_cells(record)).style(style)
        });

    let header =
        Row::new(RESULT_COLUMNS).style(Style::default().fg(LABEL).add_modifier(Modifier::BOLD));

    frame.render_widget(
        Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1)
            .block(block),
        area,
    );
}
