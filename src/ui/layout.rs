use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Visual lines of text shown while typing.
pub const WINDOW_LINES: u16 = 3;

pub fn horizontal_padding(width: u16) -> u16 {
    if width < 60 {
        4
    } else if width < 80 {
        8
    } else {
        (width - 80) / 2
    }
}

/// Columns available to the wrapped text at a given terminal width.
pub fn text_width(width: u16) -> usize {
    width.saturating_sub(2 * horizontal_padding(width)).max(1) as usize
}

pub struct AppLayout {
    pub status: Rect,
    pub main: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Centers a status line and `main_height` rows vertically, padded
    /// horizontally like the wrap width.
    pub fn new(area: Rect, main_height: u16) -> Self {
        let pad = horizontal_padding(area.width).min(area.width / 2);
        let inner = Rect {
            x: area.x + pad,
            width: area.width.saturating_sub(2 * pad),
            ..area
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(main_height),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Self {
            status: rows[1],
            main: rows[3],
            footer: rows[5],
        }
    }
}
