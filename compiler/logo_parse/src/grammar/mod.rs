//! Recursive descent over the Logo surface syntax.
//!
//! Produces plain Logo data: the parse of a program is the same kind of
//! [`List`] a program can build at runtime. Infix expressions inside
//! parentheses and `to ... end` blocks are desugared on the way.

mod infix;
mod procedure;

use logo_diagnostic::{SyntaxError, SyntaxErrorKind};
use logo_ir::{Atom, List, Word};
use logo_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::cursor::{is_token_char, Cursor};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Parse the whole source as a top-level code list.
    pub fn parse_program(mut self) -> Result<List, SyntaxError> {
        let mut items = Vec::new();
        while !self.cursor.is_eof() {
            self.parse_unary(&mut items)?;
        }
        Ok(List::from_vec(items))
    }

    /// Parse one unit and append its atoms to `out`.
    ///
    /// A unit is a signed numeral, a `-` negation, a parenthesized infix
    /// group (spliced into `out`), a `to` block, or a single token.
    fn parse_unary(&mut self, out: &mut Vec<Atom>) -> Result<(), SyntaxError> {
        ensure_sufficient_stack(|| self.parse_unary_inner(out))
    }

    fn parse_unary_inner(&mut self, out: &mut Vec<Atom>) -> Result<(), SyntaxError> {
        if self.cursor.at_signed() {
            out.push(self.parse_token()?);
            return Ok(());
        }

        let start = self.cursor.position();
        if self.cursor.eat("-") {
            if self.cursor.is_eof() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::InvalidCharacter('-'),
                    self.cursor.source(),
                    start,
                ));
            }
            out.push(Atom::Word(Word::call("negate")));
            return self.parse_unary(out);
        }

        if self.cursor.eat("(") {
            trace!(pos = start, "infix group");
            while !self.cursor.eat(")") {
                if self.cursor.is_eof() {
                    return Err(self.cursor.error(SyntaxErrorKind::MissingToken(")")));
                }
                self.parse_comparison(out)?;
            }
            return Ok(());
        }

        if self.cursor.eat_keyword("to") {
            return self.parse_to_block(out);
        }

        out.push(self.parse_token()?);
        Ok(())
    }

    /// Parse a single literal: a list, a word, or a number.
    fn parse_token(&mut self) -> Result<Atom, SyntaxError> {
        // Only an infix operator can leave the cursor at end of input here.
        let Some(c) = self.cursor.current() else {
            return Err(self.cursor.error(SyntaxErrorKind::MissingToken(")")));
        };

        if self.cursor.eat("[") {
            return self.parse_list().map(Atom::List);
        }

        match c {
            '\'' => {
                self.cursor.bump();
                Ok(Atom::Word(Word::name(self.cursor.token())))
            }
            ':' => {
                self.cursor.bump();
                Ok(Atom::Word(Word::value(self.cursor.token())))
            }
            c if is_token_char(c) => Ok(Atom::Word(Word::call(self.cursor.token()))),
            _ if self.cursor.at_signed() => Ok(Atom::Number(self.cursor.number())),
            _ => Err(self.cursor.error(SyntaxErrorKind::InvalidCharacter(c))),
        }
    }

    /// Parse list elements after the opening `[`.
    fn parse_list(&mut self) -> Result<List, SyntaxError> {
        let mut items = Vec::new();
        while !self.cursor.eat("]") {
            if self.cursor.is_eof() {
                return Err(self.cursor.error(SyntaxErrorKind::MissingToken("]")));
            }
            self.parse_unary(&mut items)?;
        }
        Ok(List::from_vec(items))
    }
}
