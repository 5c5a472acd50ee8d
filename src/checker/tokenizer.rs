use std::str::Chars;

/// Characters that may appear inside a word. Anything else ends the current token.
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '\''
}

/// Lazily splits a single line into word tokens, left to right.
pub struct Tokens<'a> {
    chars: Chars<'a>,
    buf: String,
}

pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        chars: line.chars(),
        buf: String::new(),
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for ch in self.chars.by_ref() {
            if is_word_char(ch) {
                self.buf.push(ch);
            } else if !self.buf.is_empty() {
                return Some(self.buf.drain(..).collect());
            }
        }

        // End of line: flush whatever is still open
        if self.buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buf))
        }
    }
}
