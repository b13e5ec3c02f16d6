//! Expression grammar.
//!
//! ```text
//! expr    = primary { binop expr } ;      (precedence climbing)
//! primary = number | constant | call | "(" expr ")" | "-" primary ;
//! call    = function "(" [ expr { "," expr } ] ")" ;
//! ```
//!
//! Unary minus applies to a primary, so it binds tighter than every binary
//! operator: `-2^2` is `(-2)^2`.

use arith_ir::{BinaryOp, Expr, Span, TokenKind, UnaryOp};
use arith_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

/// Minimum precedence accepted at the top of an expression.
pub(crate) const MIN_PRECEDENCE: u8 = 0;

impl Parser<'_> {
    /// Parse an expression whose binary operators bind at least `min_prec`.
    pub(crate) fn parse_expr(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner(min_prec))
    }

    fn parse_expr_inner(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while let TokenKind::Operator(op) = self.cursor.current_kind() {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();

            let next_min = if op.is_right_assoc() { prec } else { prec + 1 };
            let right = self.parse_expr(next_min)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_primary_inner())
    }

    fn parse_primary_inner(&mut self) -> Result<Expr, ParseError> {
        let token = *self.cursor.current();
        match token.kind {
            TokenKind::Integer(value) | TokenKind::Decimal(value) => {
                self.cursor.advance();
                Ok(Expr::number(value, token.span))
            }
            TokenKind::Constant { name, value } => {
                self.cursor.advance();
                Ok(Expr::constant(name, value, token.span))
            }
            TokenKind::Function(name) => self.parse_call(name),
            TokenKind::LParen => {
                self.cursor.advance();
                let mut inner = self.parse_expr(MIN_PRECEDENCE)?;
                let close = self.expect_close(token.span)?;
                inner.span = token.span.merge(close);
                Ok(inner)
            }
            TokenKind::Operator(BinaryOp::Sub) => {
                self.cursor.advance();
                let operand = self.parse_primary()?;
                Ok(Expr::unary(UnaryOp::Neg, operand, token.span))
            }
            TokenKind::Operator(op) => {
                Err(self.error(ParseErrorKind::UnexpectedOperator { op }))
            }
            TokenKind::Eof => Err(self.error(ParseErrorKind::UnexpectedEof)),
            found @ (TokenKind::RParen | TokenKind::Comma) => {
                Err(self.error(ParseErrorKind::UnexpectedToken { found }))
            }
        }
    }

    /// `name ( args )`. The cursor is on the function token.
    fn parse_call(&mut self, name: &'static str) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;

        let Some(open) = self.cursor.eat(&TokenKind::LParen) else {
            return Err(self.error(ParseErrorKind::ExpectedToken {
                expected: "(",
                found: self.cursor.current_kind(),
            }));
        };

        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr(MIN_PRECEDENCE)?);
                if self.cursor.eat(&TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        let close = self.expect_close(open.span)?;
        Ok(Expr::call(name, args, start.merge(close)))
    }

    /// Consume the `)` matching the `(` at `open`.
    fn expect_close(&mut self, open: Span) -> Result<Span, ParseError> {
        match self.cursor.eat(&TokenKind::RParen) {
            Some(close) => Ok(close.span),
            None => Err(self.error(ParseErrorKind::UnclosedDelimiter {
                open,
                found: self.cursor.current_kind(),
            })),
        }
    }
}
