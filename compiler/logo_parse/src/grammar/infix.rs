//! Infix arithmetic inside parentheses.
//!
//! Each precedence level nests to the right: an operator applies to its
//! left operand and the rest of the chain, so `(10 - 3 - 2)` becomes
//! `difference 10 difference 3 2`.

use logo_diagnostic::SyntaxError;
use logo_ir::{Atom, Word};

use super::Parser;

/// An infix symbol and the procedure it desugars to.
type Operator = (&'static str, &'static str);

const COMPARISON: &[Operator] = &[(">", "greater?"), ("<", "less?"), ("=", "equal?")];
const ADDITIVE: &[Operator] = &[("+", "sum"), ("-", "difference")];
const MULTIPLICATIVE: &[Operator] = &[("*", "product"), ("/", "quotient"), ("%", "remainder")];

impl Parser<'_> {
    /// Parse one infix expression and append its prefix form to `out`.
    pub(super) fn parse_comparison(&mut self, out: &mut Vec<Atom>) -> Result<(), SyntaxError> {
        let expr = self.fold_level(COMPARISON, Self::parse_additive)?;
        out.extend(expr);
        Ok(())
    }

    fn parse_additive(&mut self) -> Result<Vec<Atom>, SyntaxError> {
        self.fold_level(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<Vec<Atom>, SyntaxError> {
        self.fold_level(MULTIPLICATIVE, |parser| {
            let mut operand = Vec::new();
            parser.parse_unary(&mut operand)?;
            Ok(operand)
        })
    }

    fn fold_level(
        &mut self,
        operators: &[Operator],
        mut operand: impl FnMut(&mut Self) -> Result<Vec<Atom>, SyntaxError>,
    ) -> Result<Vec<Atom>, SyntaxError> {
        let mut chain = Vec::new();
        loop {
            let lhs = operand(self)?;
            match self.eat_operator(operators) {
                Some(name) => {
                    chain.push(Atom::Word(Word::call(name)));
                    chain.extend(lhs);
                }
                None => {
                    chain.extend(lhs);
                    return Ok(chain);
                }
            }
        }
    }

    fn eat_operator(&mut self, operators: &[Operator]) -> Option<&'static str> {
        operators
            .iter()
            .find(|(symbol, _)| self.cursor.eat(symbol))
            .map(|&(_, name)| name)
    }
}
