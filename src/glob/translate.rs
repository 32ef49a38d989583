//! Character-level translation of one glob segment into regex syntax.

use super::GlobMode;

/// Characters that are escaped in every mode.
const ALWAYS_ESCAPED: [char; 11] = ['\\', '/', '$', '^', '+', '.', '(', ')', '=', '!', '|'];

/// Class members the regex engine would read as nesting or set operators.
const CLASS_ESCAPED: [char; 3] = ['[', '&', '~'];

struct TranslationState {
    out: String,
    mode: GlobMode,
    group_depth: usize,
    in_class: bool,
    class_prev: Option<char>,
}

impl TranslationState {
    fn new(mode: GlobMode, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            mode,
            group_depth: 0,
            in_class: false,
            class_prev: None,
        }
    }

    const fn extended(&self) -> bool {
        matches!(self.mode, GlobMode::Extended)
    }

    fn push_literal(&mut self, ch: char) {
        let mut buf = [0_u8; 4];
        self.out.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
    }

    fn process(&mut self, ch: char) {
        if ALWAYS_ESCAPED.contains(&ch) {
            self.push_literal(ch);
            self.class_prev = Some(ch);
            return;
        }
        if ch == '*' {
            self.out.push_str(".*");
            self.class_prev = Some(ch);
            return;
        }
        if !self.extended() {
            self.push_literal(ch);
            return;
        }
        if self.in_class {
            self.process_in_class(ch);
        } else {
            self.process_extended(ch);
        }
    }

    fn process_in_class(&mut self, ch: char) {
        match ch {
            ']' => {
                self.in_class = false;
                self.out.push(ch);
            }
            '?' => self.out.push('.'),
            '-' if self.class_prev == Some('-') => self.push_literal(ch),
            _ if CLASS_ESCAPED.contains(&ch) => self.push_literal(ch),
            _ => self.out.push(ch),
        }
        self.class_prev = Some(ch);
    }

    fn process_extended(&mut self, ch: char) {
        match ch {
            '?' => self.out.push('.'),
            '[' => {
                self.in_class = true;
                self.class_prev = None;
                self.out.push(ch);
            }
            '{' => {
                self.group_depth += 1;
                self.out.push_str("(?:");
            }
            '}' if self.group_depth > 0 => {
                self.group_depth -= 1;
                self.out.push(')');
            }
            ',' if self.group_depth > 0 => self.out.push('|'),
            _ => self.push_literal(ch),
        }
    }
}

/// Translate `segment` into an unanchored regex body.
///
/// The output is not guaranteed to be a valid expression: an unclosed `[` or
/// `{` in extended mode yields text the regex parser rejects.
pub(super) fn translate(segment: &str, mode: GlobMode) -> String {
    let mut state = TranslationState::new(mode, segment.len() * 2);
    for ch in segment.chars() {
        state.process(ch);
    }
    state.out
}
