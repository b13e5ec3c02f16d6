//! Lexer error types.

use std::fmt;

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_ir::{Location, Span};
use thiserror::Error;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {location}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnrecognizedCharacter(char),
    /// A name that is neither a constant nor a function.
    UnknownIdentifier(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnrecognizedCharacter(c) => write!(f, "Unrecognized character `{c}`"),
            LexErrorKind::UnknownIdentifier(name) => write!(f, "Unknown identifier `{name}`"),
        }
    }
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span, location: Location) -> Self {
        LexError {
            kind,
            span,
            location,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedCharacter(_) => ErrorCode::E0001,
            LexErrorKind::UnknownIdentifier(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            LexErrorKind::UnrecognizedCharacter(_) => {
                diag.with_label(self.span, "not part of any token")
            }
            LexErrorKind::UnknownIdentifier(_) => diag
                .with_label(self.span, "not a known constant or function")
                .with_note("names are case-sensitive; run `arith functions` to list them"),
        }
    }
}
