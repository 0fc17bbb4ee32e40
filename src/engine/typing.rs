#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharStatus {
    #[default]
    Pending,
    Correct,
    Incorrect,
}

/// Tracks progress through a target text that is displayed soft-wrapped.
///
/// `breaks` holds the char index of the separator that ends each visual line
/// except the last. The cursor may only step over such a separator by typing
/// a space, so `current_line` can be kept up to date incrementally.
#[derive(Clone, Debug)]
pub struct TypingEngine {
    target: Vec<char>,
    track: Vec<CharStatus>,
    cursor: usize,
    current_line: usize,
    breaks: Vec<usize>,
    finished: bool,
}

impl TypingEngine {
    pub fn new(text: &str, breaks: Vec<usize>) -> Self {
        let target: Vec<char> = text.chars().collect();
        let track = vec![CharStatus::Pending; target.len()];
        let finished = target.is_empty();
        Self {
            target,
            track,
            cursor: 0,
            current_line: 0,
            breaks,
            finished,
        }
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn track(&self) -> &[CharStatus] {
        &self.track
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Character expected at the cursor, if any remain.
    pub fn expected(&self) -> Option<char> {
        self.target.get(self.cursor).copied()
    }

    pub fn status(&self, idx: usize) -> CharStatus {
        self.track.get(idx).copied().unwrap_or_default()
    }

    pub fn is_cursor(&self, idx: usize) -> bool {
        idx == self.cursor
    }

    /// Visual line holding the character under the cursor. Differs from
    /// `current_line` only while the cursor sits on a separator that was
    /// reached through a rewrap.
    pub fn cursor_line(&self) -> usize {
        self.breaks.partition_point(|&b| b < self.cursor)
    }

    fn on_break(&self) -> bool {
        self.breaks.binary_search(&self.cursor).is_ok()
    }

    /// Judges `ch` against the character under the cursor and advances.
    /// Returns false when the keystroke was not accepted.
    pub fn type_char(&mut self, ch: char) -> bool {
        if self.finished {
            return false;
        }
        if ch != ' ' && self.on_break() {
            return false;
        }
        debug_assert!(self.cursor < self.target.len());

        if self.breaks.get(self.current_line) == Some(&self.cursor) {
            self.current_line += 1;
        }

        self.track[self.cursor] = if ch == self.target[self.cursor] {
            CharStatus::Correct
        } else {
            CharStatus::Incorrect
        };
        self.cursor += 1;
        self.finished = self.cursor >= self.target.len();
        true
    }

    /// Steps back one character and clears its judgement. Returns false at the
    /// start of the text.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.finished = false;

        if self.current_line > 0 {
            let boundary = self.breaks[self.current_line - 1];
            // A rewrap can leave the cursor on the separator with the line
            // already advanced past it.
            if self.cursor == boundary + 1 || self.cursor == boundary {
                self.current_line -= 1;
            }
        }

        self.cursor -= 1;
        debug_assert!(self.cursor < self.track.len());
        self.track[self.cursor] = CharStatus::Pending;
        true
    }

    /// Replaces the line breaks after a rewrap of the same text and locates
    /// the cursor's line again.
    pub fn update_lines(&mut self, breaks: Vec<usize>) {
        debug_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        self.current_line = breaks.partition_point(|&b| b <= self.cursor);
        self.breaks = breaks;
    }
}
