//! Precedence-climbing parser for arith expressions.
//!
//! Consumes the token stream produced by `arith_lexer` and builds an
//! [`Expr`] tree. Parsing stops at the first error; there is no recovery.
//! After a complete expression the next token must be `Eof`.

mod cursor;
mod error;
mod grammar;

use arith_ir::{Expr, Token};
use tracing::debug;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse one complete expression followed by end of input.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr(grammar::MIN_PRECEDENCE)?;
        if !self.cursor.is_at_end() {
            let found = self.cursor.current_kind();
            return Err(self.error(ParseErrorKind::TrailingInput { found }));
        }
        Ok(expr)
    }

    /// Error located at the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        let token = self.cursor.current();
        ParseError::new(kind, token.span, token.location)
    }
}

/// Parse a token stream into an expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let expr = Parser::new(tokens).parse_expression()?;
    debug!(nodes = expr.node_count(), "parsed");
    Ok(expr)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
