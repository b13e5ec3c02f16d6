//! Token types produced by the lexer.

use std::fmt;

use crate::{BinaryOp, Location, Span};

/// A token with its byte span and line/column location.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, location: Location) -> Self {
        Token {
            kind,
            span,
            location,
        }
    }

    /// Create a token at the start of the source, for tests and generated input.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::default(),
            location: Location::START,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Identifiers never reach the parser unresolved: the lexer turns them into
/// `Constant` or `Function` against the builtin registry.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// Digit-only literal: `42`
    Integer(f64),
    /// Literal with a decimal point: `3.14`, `.5`, `2.`
    Decimal(f64),
    LParen,
    RParen,
    Comma,
    /// `+ - * / % ^`, with `**` lexed as `^`
    Operator(BinaryOp),
    /// Named constant, value captured when lexed.
    Constant { name: &'static str, value: f64 },
    /// Named builtin function.
    Function(&'static str),
    Eof,
}

impl TokenKind {
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Short description used in diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Integer(_) => "integer",
            TokenKind::Decimal(_) => "decimal",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Operator(op) => match op {
                BinaryOp::Add => "`+`",
                BinaryOp::Sub => "`-`",
                BinaryOp::Mul => "`*`",
                BinaryOp::Div => "`/`",
                BinaryOp::Rem => "`%`",
                BinaryOp::Pow => "`^`",
            },
            TokenKind::Constant { .. } => "constant",
            TokenKind::Function(_) => "function",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(v) | TokenKind::Decimal(v) => write!(f, "{v}"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::Constant { name, .. } | TokenKind::Function(name) => f.write_str(name),
            TokenKind::Eof => f.write_str("<eof>"),
        }
    }
}
