//! Parse-time errors.

use crate::line_index::locate;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// A `]`, `)` or `end` was expected.
    #[error("missing '{0}'?")]
    MissingToken(&'static str),
    /// `to` was not followed by a procedure name.
    #[error("word name expected!")]
    MissingName,
    #[error("invalid character '{0}'!")]
    InvalidCharacter(char),
    /// A `to` header contained something other than `:name` arguments.
    #[error("'to' arguments must begin with ':'!")]
    ArgumentNoColon,
    #[error("'to' without 'end'!")]
    ToWithoutEnd,
}

/// A syntax error with enough context to point at the offending character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// The complete text that was being parsed.
    pub source_text: String,
    /// Byte offset of the problem in `source_text`.
    pub offset: usize,
    /// 1-based line of the problem.
    pub line: u32,
    /// Character position of the problem within its line.
    pub column: u32,
    /// The offending line.
    pub line_text: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, source_text: &str, offset: usize) -> Self {
        let location = locate(source_text, offset);
        SyntaxError {
            kind,
            source_text: source_text.to_string(),
            offset,
            line: location.line,
            column: location.column,
            line_text: location.line_text,
        }
    }

    /// The offending line with a `^` under the problem.
    ///
    /// Tabs before the caret are preserved so it lines up in a terminal.
    pub fn caret(&self) -> String {
        let pad: String = self
            .line_text
            .chars()
            .take(self.column as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{}\n{pad}^", self.line_text)
    }
}
