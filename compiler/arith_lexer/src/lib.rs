//! Lexer for arith expressions.
//!
//! Scanning is done by a logos-derived [`RawToken`] enum; this crate then
//! parses numeric literals, resolves identifiers against the builtin
//! registry, and attaches line/column locations. The first error stops
//! lexing: no partial token stream is returned.

mod lex_error;
mod position;
mod raw_token;

use arith_ir::{BinaryOp, Builtins, Span, Token, TokenKind};
use logos::Logos;
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};
pub use position::TAB_WIDTH;

use position::PositionTracker;
use raw_token::RawToken;

/// Lex `source` against the process-wide builtin registry.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, Builtins::global())
}

/// Lex `source`, resolving identifiers against `builtins`.
///
/// The returned stream always ends with exactly one [`TokenKind::Eof`].
pub fn tokenize_with(source: &str, builtins: &Builtins) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut positions = PositionTracker::new(source);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let location = positions.locate(range.start);

        let kind = match token_result {
            Ok(raw) => convert_token(raw, logos.slice(), builtins),
            Err(()) => {
                let c = source[range.start..].chars().next().unwrap_or('\0');
                let span = Span::from_range(range.start..range.start + c.len_utf8());
                return Err(LexError::new(
                    LexErrorKind::UnrecognizedCharacter(c),
                    span,
                    location,
                ));
            }
        };
        let span = Span::from_range(range);
        let kind = kind.map_err(|kind| LexError::new(kind, span, location))?;

        trace!(?kind, %span, line = location.line, column = location.column, "token");
        tokens.push(Token::new(kind, span, location));
    }

    let eof_location = positions.locate(source.len());
    tokens.push(Token::new(
        TokenKind::Eof,
        Span::point(eof_location.offset),
        eof_location,
    ));

    debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Convert a raw token to a [`TokenKind`].
fn convert_token(
    raw: RawToken,
    slice: &str,
    builtins: &Builtins,
) -> Result<TokenKind, LexErrorKind> {
    let kind = match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Plus => TokenKind::Operator(BinaryOp::Add),
        RawToken::Minus => TokenKind::Operator(BinaryOp::Sub),
        RawToken::Star => TokenKind::Operator(BinaryOp::Mul),
        RawToken::Slash => TokenKind::Operator(BinaryOp::Div),
        RawToken::Percent => TokenKind::Operator(BinaryOp::Rem),
        RawToken::Caret | RawToken::StarStar => TokenKind::Operator(BinaryOp::Pow),
        RawToken::Integer => TokenKind::Integer(parse_number(slice)),
        RawToken::Decimal => TokenKind::Decimal(parse_number(slice)),
        RawToken::Ident => resolve_identifier(slice, builtins)?,
    };
    Ok(kind)
}

/// The literal regexes only match text `f64` accepts.
fn parse_number(slice: &str) -> f64 {
    slice.parse().unwrap_or(f64::NAN)
}

/// Constants shadow functions of the same name.
fn resolve_identifier(name: &str, builtins: &Builtins) -> Result<TokenKind, LexErrorKind> {
    if let Some((name, value)) = builtins.constant(name) {
        return Ok(TokenKind::Constant { name, value });
    }
    if let Some(function) = builtins.function(name) {
        return Ok(TokenKind::Function(function.name));
    }
    Err(LexErrorKind::UnknownIdentifier(name.to_string()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
