//! Token cursor for navigating the token stream.

use arith_ir::{Span, Token, TokenKind};
use tracing::trace;

/// Cursor over a token slice.
///
/// Reading past the end yields a synthetic `Eof` located after the last
/// token, so callers never index out of bounds even when handed a stream
/// without its terminating `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    end: Token,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or_else(
            || Token::dummy(TokenKind::Eof),
            |last| Token::new(TokenKind::Eof, Span::point(last.span.end), last.location),
        );
        Cursor {
            tokens,
            pos: 0,
            end,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind().is_eof()
    }

    /// Check whether the current token has exactly this kind.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == *kind
    }

    /// Advance to the next token, returning the consumed one.
    ///
    /// Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if !token.kind.is_eof() {
            self.pos += 1;
        }
        trace!(kind = ?token.kind, span = %token.span, "advance");
        token
    }

    /// Consume the current token if it has this kind.
    pub fn eat(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }
}
