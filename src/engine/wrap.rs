use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// One visual line of wrapped text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// Char index of the first character of this line in the source text.
    pub start: usize,
}

impl Line {
    /// Char index one past the last visible character.
    pub fn end(&self) -> usize {
        self.start + self.text.chars().count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrappedText {
    pub lines: Vec<Line>,
    /// Char index of the separator ending each line except the last.
    pub breaks: Vec<usize>,
}

impl WrappedText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn options(width: usize) -> Options<'static> {
    Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
}

/// Greedily wraps `text` to `width` columns. Words longer than the width are
/// left on a line of their own.
pub fn wrap(text: &str, width: usize) -> WrappedText {
    if text.is_empty() {
        return WrappedText::default();
    }

    let mut lines = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;

    for piece in textwrap::wrap(text, options(width)) {
        // Wrapped pieces are borrowed slices of `text` with separators trimmed,
        // so each one is found at or after the end of the previous one.
        let rest = &text[byte_pos..];
        let skip = rest.find(piece.as_ref()).unwrap_or(0);
        char_pos += rest[..skip].chars().count();
        byte_pos += skip;

        let start = char_pos;
        byte_pos += piece.len();
        char_pos += piece.chars().count();
        lines.push(Line {
            text: piece.into_owned(),
            start,
        });
    }

    let breaks = lines
        .iter()
        .take(lines.len().saturating_sub(1))
        .map(Line::end)
        .collect();

    WrappedText { lines, breaks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_lines() {
        let wrapped = wrap("", 10);
        assert!(wrapped.lines.is_empty());
        assert!(wrapped.breaks.is_empty());
    }

    #[test]
    fn test_single_line_when_wide_enough() {
        let wrapped = wrap("ab cd", 80);
        assert_eq!(wrapped.line_count(), 1);
        assert_eq!(wrapped.lines[0].text, "ab cd");
        assert_eq!(wrapped.lines[0].start, 0);
        assert!(wrapped.breaks.is_empty());
    }

    #[test]
    fn test_breaks_point_at_separating_space() {
        let text = "the quick brown fox";
        let wrapped = wrap(text, 10);
        let texts: Vec<&str> = wrapped.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["the quick", "brown fox"]);
        assert_eq!(wrapped.breaks, vec![9]);
        assert_eq!(text.chars().nth(9), Some(' '));
        assert_eq!(wrapped.lines[1].start, 10);
    }

    #[test]
    fn test_line_text_matches_source_slice() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let chars: Vec<char> = text.chars().collect();
        let wrapped = wrap(text, 12);
        for line in &wrapped.lines {
            let slice: String = chars[line.start..line.end()].iter().collect();
            assert_eq!(slice, line.text);
        }
    }

    #[test]
    fn test_long_word_is_not_split() {
        let wrapped = wrap("a incomprehensibilities b", 8);
        let texts: Vec<&str> = wrapped.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "incomprehensibilities", "b"]);
        assert_eq!(wrapped.breaks, vec![1, 23]);
    }

    #[test]
    fn test_hyphenated_words_stay_whole() {
        let wrapped = wrap("well-known phrase", 6);
        assert_eq!(wrapped.lines[0].text, "well-known");
    }

    #[test]
    fn test_multibyte_offsets_are_char_indices() {
        let wrapped = wrap("café naïve résumé", 6);
        let texts: Vec<&str> = wrapped.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["café", "naïve", "résumé"]);
        assert_eq!(wrapped.breaks, vec![4, 10]);
        assert_eq!(wrapped.lines[2].start, 11);
    }

    #[test]
    fn test_zero_width_is_clamped() {
        let wrapped = wrap("ab cd", 0);
        assert_eq!(wrapped.line_count(), 2);
        assert_eq!(wrapped.breaks, vec![2]);
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let text = "one two three four five six seven eight nine ten";
        for width in 1..30 {
            assert_eq!(wrap(text, width), wrap(text, width));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn breaks_are_ascending_spaces(
                words in proptest::collection::vec("[a-z]{1,12}", 1..40),
                width in 1usize..60,
            ) {
                let text = words.join(" ");
                let chars: Vec<char> = text.chars().collect();
                let wrapped = wrap(&text, width);

                prop_assert_eq!(wrapped.breaks.len() + 1, wrapped.lines.len());
                prop_assert!(wrapped.breaks.windows(2).all(|w| w[0] < w[1]));
                for (i, &b) in wrapped.breaks.iter().enumerate() {
                    prop_assert_eq!(chars[b], ' ');
                    prop_assert_eq!(wrapped.lines[i + 1].start, b + 1);
                }
                for line in &wrapped.lines {
                    let longest_word = line.text.split(' ').map(str::len).max().unwrap_or(0);
                    prop_assert!(line.text.len() <= width || longest_word > width);
                }
            }
        }
    }
}
