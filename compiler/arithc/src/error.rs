//! The facade's error type.

use std::collections::BTreeMap;
use std::fmt;

use arith_diagnostic::{Diagnostic, ErrorCode};
use arith_eval::EvalError;
use arith_ir::{Location, Span};
use arith_lexer::LexError;
use arith_parse::ParseError;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// Any failure of the pipeline.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Normalized form of a panic caught at the facade.
    #[error("{0}")]
    Fault(Fault),
    /// Raw panic message, as caught.
    #[error("panicked: {0}")]
    Panic(String),
}

/// A panic turned into a value: message, string properties, and the stack
/// at the point it was caught when backtraces are enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    pub message: String,
    pub properties: BTreeMap<String, String>,
    pub stack: Option<String>,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(e) => e.code(),
            Error::Parse(e) => e.code(),
            Error::Eval(e) => e.code(),
            Error::Fault(_) | Error::Panic(_) => ErrorCode::E9001,
        }
    }

    /// Stage name: `lex`, `parse`, `eval`, or `fault`.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lex",
            Error::Parse(_) => "parse",
            Error::Eval(_) => "eval",
            Error::Fault(_) | Error::Panic(_) => "fault",
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(e) => Some(e.span),
            Error::Parse(e) => Some(e.span),
            Error::Eval(e) => Some(e.span),
            Error::Fault(_) | Error::Panic(_) => None,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            Error::Lex(e) => Some(e.location),
            Error::Parse(e) => Some(e.location),
            Error::Eval(_) | Error::Fault(_) | Error::Panic(_) => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(e) => e.to_diagnostic(),
            Error::Parse(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
            Error::Fault(fault) => {
                let mut diag = Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("internal fault: {}", fault.message));
                for (key, value) in &fault.properties {
                    diag = diag.with_note(format!("{key}: {value}"));
                }
                diag
            }
            Error::Panic(message) => {
                Diagnostic::error(ErrorCode::E9001).with_message(format!("panicked: {message}"))
            }
        }
    }
}

impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Error", 6)?;
        s.serialize_field("stage", self.stage())?;
        s.serialize_field("code", self.code().as_str())?;
        s.serialize_field("message", &self.to_string())?;
        s.serialize_field("span", &self.span())?;
        s.serialize_field("location", &self.location())?;
        match self {
            Error::Fault(fault) => s.serialize_field("properties", &fault.properties)?,
            _ => s.skip_field("properties")?,
        }
        s.end()
    }
}
