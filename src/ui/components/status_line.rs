use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use crate::session::mode::{Mode, TypingConfig};
use crate::session::state::Phase;
use crate::ui::theme::Theme;

/// Helper line above the text: the selected target in the menu, progress
/// while typing.
/// Remaining seconds at which the countdown turns to the error color.
pub const LOW_TIME_SECS: u64 = 5;

pub struct StatusLine<'a> {
    text: String,
    urgent: bool,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(
        phase: Phase,
        config: &TypingConfig,
        remaining_secs: u64,
        current_word: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            text: status_text(phase, config, remaining_secs, current_word),
            urgent: phase == Phase::Typing
                && config.mode == Mode::Time
                && remaining_secs <= LOW_TIME_SECS,
            theme,
        }
    }
}

pub fn status_text(
    phase: Phase,
    config: &TypingConfig,
    remaining_secs: u64,
    current_word: usize,
) -> String {
    match (phase, config.mode) {
        (Phase::Menu, _) => config.label(),
        (Phase::Typing, Mode::Time) => remaining_secs.to_string(),
        (Phase::Typing, Mode::Words) => format!(
            "{} / {}",
            (current_word + 1).min(config.word_count),
            config.word_count
        ),
        (Phase::Typing, Mode::Zen) => format!("{current_word} words"),
        (Phase::Results, _) => String::new(),
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let fg = if self.urgent {
            colors.error()
        } else {
            colors.accent()
        };
        Paragraph::new(Span::styled(self.text, Style::default().fg(fg))).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_shows_target() {
        let config = TypingConfig::default();
        assert_eq!(status_text(Phase::Menu, &config, 30, 0), "30 secs");
    }

    #[test]
    fn test_typing_progress() {
        let mut config = TypingConfig::default();
        assert_eq!(status_text(Phase::Typing, &config, 17, 3), "17");
        config.mode = Mode::Words;
        assert_eq!(status_text(Phase::Typing, &config, 0, 3), "4 / 50");
        assert_eq!(status_text(Phase::Typing, &config, 0, 50), "50 / 50");
    }

    fn rendered_fg(remaining_secs: u64) -> ratatui::style::Color {
        let theme = Theme::default();
        let config = TypingConfig::default();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(Phase::Typing, &config, remaining_secs, 0, &theme).render(area, &mut buf);
        buf[(0, 0)].fg
    }

    #[test]
    fn test_countdown_turns_to_error_color() {
        let colors = Theme::default().colors;
        assert_eq!(rendered_fg(12), colors.accent());
        assert_eq!(rendered_fg(LOW_TIME_SECS), colors.error());
    }
}
