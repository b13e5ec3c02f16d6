//! Line and column tracking.
//!
//! Logos reports byte spans only. [`PositionTracker`] walks the source
//! forward alongside the scanner and turns byte offsets into [`Location`]s.

use arith_ir::Location;

/// Columns a tab advances.
pub const TAB_WIDTH: u32 = 4;

/// Forward-only byte offset to line/column converter.
pub(crate) struct PositionTracker<'a> {
    source: &'a str,
    location: Location,
    /// Previous character was `\r`, so a following `\n` continues the same break.
    after_cr: bool,
}

impl<'a> PositionTracker<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        PositionTracker {
            source,
            location: Location::START,
            after_cr: false,
        }
    }

    /// Advance to `offset` and return its location.
    ///
    /// Offsets behind the current position return the current location.
    pub(crate) fn locate(&mut self, offset: usize) -> Location {
        let from = self.location.offset as usize;
        let to = offset.min(self.source.len());
        if to > from {
            for c in self.source[from..to].chars() {
                self.step(c);
            }
            self.location.offset = u32::try_from(to).unwrap_or(u32::MAX);
        }
        self.location
    }

    fn step(&mut self, c: char) {
        match c {
            '\n' if self.after_cr => {}
            '\n' | '\r' => {
                self.location.line += 1;
                self.location.column = 1;
            }
            '\t' => self.location.column += TAB_WIDTH,
            _ => self.location.column += 1,
        }
        self.after_cr = c == '\r';
    }
}
