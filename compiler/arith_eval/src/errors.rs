//! Evaluation errors and their constructors.

use std::fmt;

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_ir::Span;
use thiserror::Error;

/// An evaluation error, located at the offending call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// The registry has no function with this name.
    UndefinedFunction { name: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::UndefinedFunction { name } => write!(f, "Unknown function `{name}`"),
        }
    }
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E6001,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            EvalErrorKind::UndefinedFunction { .. } => diag
                .with_label(self.span, "not defined in this registry")
                .with_note("the tree was built against a different registry"),
        }
    }
}

/// Unknown function.
#[cold]
pub fn undefined_function(name: &str, span: Span) -> EvalError {
    EvalError {
        kind: EvalErrorKind::UndefinedFunction {
            name: name.to_string(),
        },
        span,
    }
}
