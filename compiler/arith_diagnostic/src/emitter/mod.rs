//! Diagnostic emitters.
//!
//! Emitters render a [`Diagnostic`] against the source text it refers to.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic for `source`.
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str);

    fn flush(&mut self);
}

/// A source line containing some byte offset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct SourceLine<'a> {
    /// 1-based line number.
    pub number: u32,
    /// 1-based character column of the offset within the line.
    pub column: u32,
    /// Byte offset where the line starts.
    pub start: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// Locate the line containing `offset`.
///
/// `\n`, `\r\n`, and a lone `\r` each end a line. Offsets past the end clamp
/// to the end of the source.
pub(crate) fn source_line(source: &str, offset: usize) -> SourceLine<'_> {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let bytes = source.as_bytes();
    let mut number = 1u32;
    let mut start = 0usize;
    let mut i = 0usize;
    while i < offset {
        match bytes[i] {
            b'\n' => {
                number += 1;
                start = i + 1;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    // An offset on the `\n` of a `\r\n` pair stays on this line.
                    if i + 1 >= offset {
                        break;
                    }
                    i += 1;
                }
                number += 1;
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    let end = source[start..]
        .find(['\n', '\r'])
        .map_or(source.len(), |n| start + n);
    let column = source[start..offset].chars().count() as u32 + 1;
    SourceLine {
        number,
        column,
        start,
        text: &source[start..end],
    }
}
