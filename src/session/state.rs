use std::time::Instant;

use tracing::{debug, info};

use crate::engine::typing::TypingEngine;
use crate::engine::wrap::{self, Line, WrappedText};
use crate::generator::WordSource;
use crate::session::input::KeystrokeEvent;
use crate::session::mode::{Mode, TypingConfig};
use crate::session::result::Stats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Typing,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    CycleMode,
    Increase,
    Decrease,
    Enter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Start,
    Tick,
    CountdownExpired,
    Finish,
    /// New wrap width in columns.
    Resize(usize),
    Key(KeyInput),
}

pub struct Session<S> {
    config: TypingConfig,
    source: S,
    phase: Phase,
    text: String,
    wrapped: WrappedText,
    engine: TypingEngine,
    width: usize,
    log: Vec<KeystrokeEvent>,
    stats: Stats,
    remaining_secs: u64,
    /// One entry per accepted keystroke still in front of the cursor; true
    /// where that keystroke completed a word.
    word_marks: Vec<bool>,
    current_word: usize,
}

impl<S: WordSource> Session<S> {
    pub fn new(config: TypingConfig, source: S, width: usize) -> Self {
        let mut session = Self {
            config,
            source,
            phase: Phase::Menu,
            text: String::new(),
            wrapped: WrappedText::default(),
            engine: TypingEngine::new("", Vec::new()),
            width,
            log: Vec::new(),
            stats: Stats::new(),
            remaining_secs: config.duration_secs,
            word_marks: Vec::new(),
            current_word: 0,
        };
        session.regenerate();
        session
    }

    /// Applies one event. Returns the new phase if the event caused a
    /// transition.
    pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Option<Phase> {
        let before = self.phase;
        let mode = self.config.mode;

        match (self.phase, event) {
            (_, SessionEvent::Resize(width)) => self.resize(width),

            (Phase::Menu, SessionEvent::Start | SessionEvent::Key(KeyInput::Enter)) => {
                self.start(now)
            }
            (Phase::Menu, SessionEvent::Key(KeyInput::Char(ch))) => {
                self.start(now);
                self.type_char(ch, now);
            }
            (Phase::Menu, SessionEvent::Key(KeyInput::CycleMode)) => {
                self.config.cycle_mode();
                self.regenerate();
            }
            (Phase::Menu, SessionEvent::Key(KeyInput::Increase)) => {
                if self.config.adjust(true) {
                    self.regenerate();
                }
            }
            (Phase::Menu, SessionEvent::Key(KeyInput::Decrease)) => {
                if self.config.adjust(false) {
                    self.regenerate();
                }
            }

            (Phase::Typing, SessionEvent::Key(KeyInput::Char(ch))) => self.type_char(ch, now),
            (Phase::Typing, SessionEvent::Key(KeyInput::Backspace)) => self.backspace(now),
            (Phase::Typing, SessionEvent::Key(KeyInput::Enter)) if mode == Mode::Zen => {
                self.finish(now)
            }
            (Phase::Typing, SessionEvent::Tick) if mode == Mode::Time => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    self.finish(now);
                }
            }
            (Phase::Typing, SessionEvent::CountdownExpired) if mode == Mode::Time => {
                self.remaining_secs = 0;
                self.finish(now);
            }
            (Phase::Typing, SessionEvent::Finish) => self.finish(now),

            (Phase::Results, SessionEvent::Key(KeyInput::Enter)) => {
                self.regenerate();
                self.phase = Phase::Menu;
            }

            _ => {}
        }

        if self.phase != before {
            debug!(from = ?before, to = ?self.phase, mode = %mode, "session transition");
            Some(self.phase)
        } else {
            None
        }
    }

    fn start(&mut self, now: Instant) {
        self.stats.start(now);
        self.remaining_secs = self.config.duration_secs;
        self.phase = Phase::Typing;
    }

    fn finish(&mut self, now: Instant) {
        self.stats.stop(now);
        self.stats.calculate(&self.log);
        self.phase = Phase::Results;
        info!(
            wpm = self.stats.wpm(),
            accuracy = self.stats.accuracy(),
            keystrokes = self.log.len(),
            "test finished"
        );
    }

    fn type_char(&mut self, ch: char, now: Instant) {
        let cursor = self.engine.cursor();
        let Some(expected) = self.engine.expected() else {
            return;
        };
        // A key refused at a line boundary still counts against accuracy.
        self.log.push(KeystrokeEvent::typed(ch, expected, now));
        if !self.engine.type_char(ch) {
            return;
        }

        let completes_word =
            ch == ' ' && cursor > 0 && self.engine.target()[cursor - 1] != ' ';
        self.word_marks.push(completes_word);
        if completes_word {
            self.current_word += 1;
        }

        if self.engine.is_finished() && self.config.mode == Mode::Words {
            self.finish(now);
        }
    }

    fn backspace(&mut self, now: Instant) {
        if !self.engine.backspace() {
            return;
        }
        if self.word_marks.pop() == Some(true) {
            self.current_word = self.current_word.saturating_sub(1);
        }
        if let Some(uncovered) = self.engine.expected() {
            self.log.push(KeystrokeEvent::backspace(uncovered, now));
        }
    }

    fn resize(&mut self, width: usize) {
        if width == self.width {
            return;
        }
        debug!(old = self.width, new = width, "rewrapping text");
        self.width = width;
        self.wrapped = wrap::wrap(&self.text, width);
        self.engine.update_lines(self.wrapped.breaks.clone());
    }

    /// Draws fresh text for the current config and clears all progress.
    fn regenerate(&mut self) {
        let words = match self.config.words_needed() {
            Some(n) => self.source.random_words(n),
            None => self.source.all_words(),
        };
        self.text = words.join(" ");
        self.wrapped = wrap::wrap(&self.text, self.width);
        self.engine = TypingEngine::new(&self.text, self.wrapped.breaks.clone());
        self.log.clear();
        self.stats = Stats::new();
        self.remaining_secs = self.config.duration_secs;
        self.word_marks.clear();
        self.current_word = 0;
        debug!(mode = %self.config.mode, chars = self.engine.len(), "generated text");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn engine(&self) -> &TypingEngine {
        &self.engine
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[Line] {
        &self.wrapped.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn log(&self) -> &[KeystrokeEvent] {
        &self.log
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Zero-based index of the word being typed.
    pub fn current_word(&self) -> usize {
        self.current_word
    }
}
