use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub filters: Rect,
    pub notices: Rect,
    pub results: Rect,
    pub footer: Rect,
}

/// Splits the screen. Blocks with no lines collapse to zero height.
pub fn layout_regions(area: Rect, filter_lines: usize, notice_lines: usize) -> Regions {
    let boxed = |lines: usize| -> u16 {
        if lines == 0 {
            0
        } else {
            u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
        }
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(boxed(filter_lines)),
        Constraint::Length(boxed(notice_lines)),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(area);

    Regions {
        header: chunks[0],
        input: chunks[1],
        filters: chunks[2],
        notices: chunks[3],
        results: chunks[4],
        footer: chunks[5],
    }
}

/// Rows of results that fit in the results block (minus borders and header row).
pub fn visible_result_rows(results: Rect) -> usize {
    usize::from(results.height.saturating_sub(3))
}
