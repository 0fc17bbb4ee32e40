use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use typr::config::Config;
use typr::generator::dictionary::WordList;
use typr::session::mode::Mode;
use typr::session::state::{KeyInput, Phase, Session, SessionEvent};
use typr::session::timer::SecondTicker;
use typr::ui::layout::text_width;
use typr::ui::theme::Theme;

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub session: Session<WordList>,
    pub ticker: SecondTicker,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, theme: Theme, words: WordList, terminal_width: u16) -> Self {
        let session = Session::new(config.typing_config(), words, text_width(terminal_width));
        Self {
            config,
            theme,
            session,
            ticker: SecondTicker::new(),
            should_quit: false,
        }
    }

    pub fn dispatch(&mut self, event: SessionEvent, now: Instant) {
        match self.session.handle(event, now) {
            Some(Phase::Typing) => {
                if self.session.config().mode == Mode::Time {
                    self.ticker.start(now);
                }
            }
            Some(Phase::Results) | Some(Phase::Menu) => self.ticker.stop(),
            None => {}
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.poll(now) {
            self.dispatch(SessionEvent::Tick, now);
        }
    }

    pub fn on_resize(&mut self, width: u16, now: Instant) {
        self.dispatch(SessionEvent::Resize(text_width(width)), now);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }
        if let Some(input) = key_input(&key) {
            self.dispatch(SessionEvent::Key(input), now);
        }
    }

    /// Remembers the last selected mode and targets.
    pub fn persist(&mut self) -> Result<()> {
        let selected = *self.session.config();
        if self.config.typing_config() == selected {
            return Ok(());
        }
        self.config.mode = selected.mode;
        self.config.duration_secs = selected.duration_secs;
        self.config.word_count = selected.word_count;
        self.config.save()?;
        info!(mode = %selected.mode, "saved config");
        Ok(())
    }
}

pub fn key_input(key: &KeyEvent) -> Option<KeyInput> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        debug!(?key, "ignoring modified key");
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => Some(KeyInput::Char(ch)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Tab => Some(KeyInput::CycleMode),
        KeyCode::Up | KeyCode::Right => Some(KeyInput::Increase),
        KeyCode::Down | KeyCode::Left => Some(KeyInput::Decrease),
        KeyCode::Enter => Some(KeyInput::Enter),
        _ => None,
    }
}
