//! Completeness checking for partial input.

use std::fmt;

use logo_diagnostic::{SyntaxError, SyntaxErrorKind};

use crate::cursor::{is_token_char, Cursor};

/// A closing token that a fragment still owes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Closer {
    /// `]`
    Bracket,
    /// `)`
    Paren,
    /// `end`
    End,
}

impl Closer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Closer::Bracket => "]",
            Closer::Paren => ")",
            Closer::End => "end",
        }
    }
}

impl fmt::Display for Closer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Characters that may appear between tokens without closing anything.
const OPERATORS: &str = "+-*/%><=:'";

/// Find the closers `source` still needs, innermost first.
///
/// An empty vector means the text is complete. Only nesting is checked;
/// a complete fragment can still fail to [`parse`](crate::parse).
pub fn complete(source: &str) -> Result<Vec<Closer>, SyntaxError> {
    let mut cursor = Cursor::new(source);
    let mut pending: Vec<Closer> = Vec::new();

    loop {
        cursor.trim();
        let Some(c) = cursor.current() else {
            break;
        };

        let closer = match c {
            ']' => Some(Closer::Bracket),
            ')' => Some(Closer::Paren),
            _ if cursor.at_keyword("end") => Some(Closer::End),
            _ => None,
        };
        if let Some(closer) = closer {
            match pending.last() {
                Some(&expected) if expected == closer => {
                    pending.pop();
                }
                Some(&expected) => {
                    return Err(cursor.error(SyntaxErrorKind::MissingToken(expected.as_str())));
                }
                None => return Err(cursor.error(SyntaxErrorKind::InvalidCharacter(c))),
            }
            if closer == Closer::End {
                cursor.eat_keyword("end");
            } else {
                cursor.bump();
            }
            continue;
        }

        match c {
            '[' => {
                pending.push(Closer::Bracket);
                cursor.bump();
            }
            '(' => {
                pending.push(Closer::Paren);
                cursor.bump();
            }
            _ if cursor.eat_keyword("to") => pending.push(Closer::End),
            c if is_token_char(c) => {
                cursor.token();
            }
            _ if cursor.at_signed() => {
                cursor.number();
            }
            c if OPERATORS.contains(c) => cursor.bump(),
            c => return Err(cursor.error(SyntaxErrorKind::InvalidCharacter(c))),
        }
    }

    pending.reverse();
    Ok(pending)
}
