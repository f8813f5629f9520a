//! Character cursor over Logo source text.
//!
//! Every consuming method that finishes a token also skips the whitespace
//! and `#` comments after it, so the cursor always rests on something
//! meaningful or at end of input.

use logo_diagnostic::{SyntaxError, SyntaxErrorKind};
use logo_ir::Number;
use tracing::trace;

/// Punctuation allowed inside words besides ASCII letters.
const TOKEN_PUNCTUATION: &str = ".,!?";

/// Whether `c` may appear in a word.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphabetic() || TOKEN_PUNCTUATION.contains(c)
}

/// Cursor for walking source text one character at a time.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first meaningful character.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Cursor { source, pos: 0 };
        cursor.trim();
        cursor
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    #[inline]
    pub fn at(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    #[inline]
    pub fn at_white(&self) -> bool {
        self.current().is_some_and(char::is_whitespace)
    }

    #[inline]
    pub fn at_token_char(&self) -> bool {
        self.current().is_some_and(is_token_char)
    }

    #[inline]
    pub fn at_digit(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_digit())
    }

    /// At a numeral, optionally preceded by a `-` that touches a digit.
    pub fn at_signed(&self) -> bool {
        if self.at_digit() {
            return true;
        }
        let mut chars = self.rest().chars();
        chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_digit())
    }

    /// Skip whitespace and `#` comments.
    pub fn trim(&mut self) {
        loop {
            while self.at_white() {
                self.bump();
            }
            if !self.at('#') {
                break;
            }
            self.skip_line();
        }
    }

    /// Skip up to (not past) the next newline.
    pub fn skip_line(&mut self) {
        while self.current().is_some_and(|c| c != '\n') {
            self.bump();
        }
    }

    /// Consume `symbol` if the text starts with it, then trim.
    pub fn eat(&mut self, symbol: &str) -> bool {
        if !self.rest().starts_with(symbol) {
            return false;
        }
        self.pos += symbol.len();
        self.trim();
        true
    }

    /// Whether `keyword` starts here and stands alone: it must be followed by
    /// whitespace, a comment, or end of input.
    pub fn at_keyword(&self, keyword: &str) -> bool {
        match self.rest().strip_prefix(keyword) {
            Some(after) => !matches!(
                after.chars().next(),
                Some(n) if n != '#' && !n.is_whitespace()
            ),
            None => false,
        }
    }

    /// Consume a standalone `keyword`, then trim.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        if !self.at_keyword(keyword) {
            return false;
        }
        self.pos += keyword.len();
        self.trim();
        true
    }

    /// Consume a (possibly empty) run of token characters without trimming.
    pub fn word(&mut self) -> &'a str {
        let start = self.pos;
        while self.at_token_char() {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    /// Consume a run of token characters, then trim.
    pub fn token(&mut self) -> &'a str {
        let text = self.word();
        trace!(pos = self.pos, text, "token");
        self.trim();
        text
    }

    /// Consume a signed numeral, then trim. Overlong numerals wrap.
    pub fn number(&mut self) -> Number {
        let negative = self.at('-');
        if negative {
            self.bump();
        }
        let mut value: Number = 0;
        while let Some(digit) = self.current().and_then(|c| c.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(Number::from(digit));
            self.bump();
        }
        self.trim();
        if negative {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// Build an error located at the current position.
    pub fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.source, self.pos)
    }
}
