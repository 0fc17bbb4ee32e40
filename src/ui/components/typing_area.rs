use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::engine::typing::{CharStatus, TypingEngine};
use crate::engine::wrap::Line;
use crate::ui::layout::WINDOW_LINES;
use crate::ui::theme::Theme;

pub struct TypingArea<'a> {
    engine: &'a TypingEngine,
    lines: &'a [Line],
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(engine: &'a TypingEngine, lines: &'a [Line], theme: &'a Theme) -> Self {
        Self {
            engine,
            lines,
            theme,
        }
    }

    fn char_style(&self, idx: usize) -> Style {
        let colors = &self.theme.colors;
        if self.engine.is_cursor(idx) {
            return Style::default()
                .fg(colors.text_cursor_fg())
                .bg(colors.text_cursor_bg());
        }
        match self.engine.status(idx) {
            CharStatus::Pending => Style::default().fg(colors.text_pending()),
            CharStatus::Correct => Style::default()
                .fg(colors.text_correct())
                .add_modifier(Modifier::BOLD),
            CharStatus::Incorrect => Style::default()
                .fg(colors.text_incorrect())
                .bg(colors.text_incorrect_bg())
                .add_modifier(Modifier::UNDERLINED),
        }
    }

    fn render_line(&self, line: &Line) -> TextLine<'static> {
        let mut spans: Vec<Span> = line
            .text
            .chars()
            .enumerate()
            .map(|(j, ch)| Span::styled(ch.to_string(), self.char_style(line.start + j)))
            .collect();

        // The cursor sits past the visible text on a trimmed separator or at
        // the very end.
        if self.engine.is_cursor(line.end()) {
            spans.push(Span::styled(" ", self.char_style(line.end())));
        }
        TextLine::from(spans)
    }
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let first = self.engine.cursor_line();
        let rendered: Vec<TextLine> = self
            .lines
            .iter()
            .skip(first)
            .take(WINDOW_LINES as usize)
            .map(|line| self.render_line(line))
            .collect();

        Paragraph::new(rendered)
            .style(Style::default().bg(self.theme.colors.bg()))
            .render(area, buf);
    }
}
