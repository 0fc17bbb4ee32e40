use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::session::result::Stats;
use crate::ui::theme::Theme;

pub struct Dashboard<'a> {
    stats: &'a Stats,
    theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(stats: &'a Stats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }
}

pub fn summary(stats: &Stats) -> String {
    format!(
        "WPM: {}, Accuracy: {}%",
        stats.wpm() as u64,
        stats.accuracy() as u64
    )
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(Span::styled(
            summary(self.stats),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        let counts = &self.stats.counts;
        let detail = Line::from(vec![
            Span::styled(
                format!("{} correct", counts.correct_chars),
                Style::default().fg(colors.text_correct()),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(
                format!("{} errors", counts.errors),
                Style::default().fg(colors.text_incorrect()),
            ),
            Span::styled(
                format!("  {:.1}s", self.stats.elapsed_secs()),
                Style::default().fg(colors.hint()),
            ),
        ]);
        Paragraph::new(detail)
            .alignment(Alignment::Center)
            .render(layout[2], buf);
    }
}
