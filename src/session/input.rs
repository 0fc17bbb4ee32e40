use std::time::Instant;

/// Stand-in for the typed character of a backspace entry.
pub const BACKSPACE: char = '\u{8}';

#[derive(Clone, Debug, PartialEq)]
pub struct KeystrokeEvent {
    pub typed: char,
    pub expected: char,
    pub timestamp: Instant,
    pub backspace: bool,
    pub correct: bool,
}

impl KeystrokeEvent {
    pub fn typed(typed: char, expected: char, timestamp: Instant) -> Self {
        Self {
            typed,
            expected,
            timestamp,
            backspace: false,
            correct: typed == expected,
        }
    }

    /// `uncovered` is the target character the cursor moved back onto.
    pub fn backspace(uncovered: char, timestamp: Instant) -> Self {
        Self {
            typed: BACKSPACE,
            expected: uncovered,
            timestamp,
            backspace: true,
            correct: false,
        }
    }
}
