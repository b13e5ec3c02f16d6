//! Diagnostic system for error reporting.
//!
//! Every pipeline error converts to a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary label saying where
//! - notes for context
//!
//! [`emitter::TerminalEmitter`] renders diagnostics against the source text.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
