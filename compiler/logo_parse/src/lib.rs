//! Logo Parse - source text to Logo data.
//!
//! [`parse`] turns text into a [`List`] of atoms, desugaring parenthesized
//! infix arithmetic and `to ... end` procedure definitions into ordinary
//! prefix calls. [`complete`] answers whether a fragment is finished, for
//! hosts that read programs a line at a time.

mod complete;
mod cursor;
mod grammar;

pub use complete::{complete, Closer};

use logo_diagnostic::SyntaxError;
use logo_ir::List;

/// Parse `source` into a top-level code list.
///
/// `print (3 + 2 * 5)` parses exactly like `print sum 3 product 2 5`.
pub fn parse(source: &str) -> Result<List, SyntaxError> {
    grammar::Parser::new(source).parse_program()
}
