//! `to ... end` blocks.
//!
//! ```text
//! to any :list
//!   output item random size :list :list
//! end
//! ```
//!
//! desugars to `local 'any bind ['list] [output item random size :list :list]`,
//! with the block's text cached on the body list.

use logo_diagnostic::{SyntaxError, SyntaxErrorKind};
use logo_ir::{Atom, List, Word};
use tracing::debug;

use super::Parser;

impl Parser<'_> {
    /// Parse a `to` block; the keyword has already been consumed.
    pub(super) fn parse_to_block(&mut self, out: &mut Vec<Atom>) -> Result<(), SyntaxError> {
        let base = self.cursor.position();
        let name = self.cursor.word();
        if name.is_empty() {
            return Err(self.cursor.error(SyntaxErrorKind::MissingName));
        }

        let params = self.parse_header_params()?;
        self.cursor.trim();

        let mut body = Vec::new();
        let end = loop {
            let end = self.cursor.position();
            if self.cursor.eat_keyword("end") {
                break end;
            }
            if self.cursor.is_eof() {
                return Err(self.cursor.error(SyntaxErrorKind::ToWithoutEnd));
            }
            self.parse_unary(&mut body)?;
        };

        let source = format!("to {}end", &self.cursor.source()[base..end]);
        debug!(procedure = name, params = params.len(), body = body.len(), "desugared to-block");

        out.extend([
            Atom::Word(Word::call("local")),
            Atom::Word(Word::name(name)),
            Atom::Word(Word::call("bind")),
            Atom::List(List::from_vec(params)),
            Atom::List(List::from_vec(body).with_source(source)),
        ]);
        Ok(())
    }

    /// `:name` parameters up to the end of the header line.
    fn parse_header_params(&mut self) -> Result<Vec<Atom>, SyntaxError> {
        let mut params = Vec::new();
        loop {
            while self
                .cursor
                .current()
                .is_some_and(|c| c != '\n' && c.is_whitespace())
            {
                self.cursor.bump();
            }
            match self.cursor.current() {
                None => return Err(self.cursor.error(SyntaxErrorKind::ToWithoutEnd)),
                Some('\n') => return Ok(params),
                Some('#') => self.cursor.skip_line(),
                Some(':') => {
                    self.cursor.bump();
                    params.push(Atom::Word(Word::name(self.cursor.word())));
                }
                Some(_) => return Err(self.cursor.error(SyntaxErrorKind::ArgumentNoColon)),
            }
        }
    }
}
