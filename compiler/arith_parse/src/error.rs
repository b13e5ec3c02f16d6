//! Parse error types.

use std::fmt;

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_ir::{BinaryOp, Location, Span, TokenKind};
use thiserror::Error;

/// A parse error: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} at {location}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParseErrorKind {
    /// Input ended where an operand was expected.
    UnexpectedEof,
    /// A token that starts no primary expression.
    UnexpectedToken { found: TokenKind },
    /// A binary operator other than `-` in operand position.
    UnexpectedOperator { op: BinaryOp },
    /// A specific token was required, such as `(` after a function name.
    ExpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    /// A `(` whose matching `)` never came.
    UnclosedDelimiter { open: Span, found: TokenKind },
    /// Input continues after a complete expression.
    TrailingInput { found: TokenKind },
}

/// Describe a token for a message: its source text, or "end of input".
struct Found(TokenKind);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_eof() {
            f.write_str("end of input")
        } else {
            write!(f, "`{}`", self.0)
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErrorKind::UnexpectedEof => write!(f, "Unexpected end of input"),
            ParseErrorKind::UnexpectedToken { found } => {
                write!(f, "Unexpected token {}", Found(found))
            }
            ParseErrorKind::UnexpectedOperator { op } => {
                write!(f, "Operator `{op}` is missing its left operand")
            }
            ParseErrorKind::ExpectedToken { expected, found } => {
                write!(f, "Expected a `{expected}` token, but got {}", Found(found))
            }
            ParseErrorKind::UnclosedDelimiter { found, .. } => {
                write!(f, "Unclosed `(`: expected `)`, but got {}", Found(found))
            }
            ParseErrorKind::TrailingInput {
                found: TokenKind::RParen,
            } => write!(f, "Unmatched `)`"),
            ParseErrorKind::TrailingInput { found } => {
                write!(f, "Unexpected {} after a complete expression", Found(found))
            }
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, location: Location) -> Self {
        ParseError {
            kind,
            span,
            location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedEof => ErrorCode::E1001,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1002,
            ParseErrorKind::UnexpectedOperator { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedToken { .. } | ParseErrorKind::UnclosedDelimiter { .. } => {
                ErrorCode::E1004
            }
            ParseErrorKind::TrailingInput { .. } => ErrorCode::E1005,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.kind {
            ParseErrorKind::UnexpectedEof => diag.with_label(self.span, "expected an expression"),
            ParseErrorKind::UnexpectedToken { .. } => {
                diag.with_label(self.span, "expected an expression here")
            }
            ParseErrorKind::UnexpectedOperator { op } => diag
                .with_label(self.span, "expected an operand before this")
                .with_note(format!(
                    "only `-` may start an expression; `{op}` needs a value on its left"
                )),
            ParseErrorKind::ExpectedToken { expected, .. } => {
                diag.with_label(self.span, format!("expected `{expected}`"))
            }
            ParseErrorKind::UnclosedDelimiter { open, .. } => diag
                .with_label(self.span, "expected `)`")
                .with_secondary_label(open, "unclosed delimiter opened here"),
            ParseErrorKind::TrailingInput {
                found: TokenKind::RParen,
            } => diag.with_label(self.span, "no matching `(`"),
            ParseErrorKind::TrailingInput { .. } => diag
                .with_label(self.span, "expected an operator or end of input")
                .with_note("juxtaposition is not multiplication; write `*` explicitly"),
        }
    }
}
