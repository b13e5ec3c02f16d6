//! Terminal Emitter
//!
//! Human-readable diagnostic output with the offending source line, a caret
//! underline, and optional ANSI color.

use std::io::{self, Write};

use crate::{Diagnostic, Label};

use super::{source_line, DiagnosticEmitter};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse `auto`, `always`, or `never`.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with an explicit color mode.
    ///
    /// `is_tty` is consulted only for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_label(&mut self, label: &Label, source: &str, width: usize) {
        let line = source_line(source, label.span.start as usize);
        let gutter = format!("{:width$} |", "");

        self.paint(&gutter, colors::SECONDARY);
        let _ = writeln!(self.writer);
        self.paint(&format!("{:>width$} |", line.number), colors::SECONDARY);
        let _ = writeln!(self.writer, " {}", line.text);

        // Keep tabs in the padding so the caret lines up with the source.
        let offset = (label.span.start as usize).clamp(line.start, line.start + line.text.len());
        let pad: String = line.text[..offset - line.start]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let end = (label.span.end as usize).clamp(offset, line.start + line.text.len());
        let width_chars = source[offset..end].chars().count().max(1);
        let (mark, color) = if label.is_primary {
            ('^', colors::ERROR)
        } else {
            ('-', colors::SECONDARY)
        };
        let mut marks: String = std::iter::repeat(mark).take(width_chars).collect();
        if !label.message.is_empty() {
            marks.push(' ');
            marks.push_str(&label.message);
        }

        self.paint(&gutter, colors::SECONDARY);
        let _ = write!(self.writer, " {pad}");
        self.paint(&marks, color);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &str) {
        // Header: error[CODE]: message
        self.paint("error", colors::ERROR);
        self.paint(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let width = diagnostic
            .labels
            .iter()
            .map(|l| source_line(source, l.span.start as usize).number)
            .max()
            .unwrap_or(1)
            .to_string()
            .len();

        if let Some(span) = diagnostic.primary_span() {
            let line = source_line(source, span.start as usize);
            self.paint(&format!("{:width$}-->", ""), colors::SECONDARY);
            let _ = writeln!(self.writer, " {}:{}", line.number, line.column);
        }

        for label in &diagnostic.labels {
            self.write_label(label, source, width);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "{:width$} = ", "");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
