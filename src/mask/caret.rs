//! Caret range for masked input.

use serde::{Deserialize, Serialize};

/// A caret range `[start, end]` over the buffer.
///
/// `start == end` is a collapsed cursor; anything wider is a selection whose
/// end is exclusive. Indices are character offsets, `0..=N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caret {
    pub start: usize,
    pub end: usize,
}

impl Caret {
    /// Create a caret from two indices in either order, clamped to `len`.
    ///
    /// Native controls can report stale ranges after the value shrinks, so
    /// out-of-range indices are clamped rather than rejected.
    pub fn new(a: usize, b: usize, len: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start: start.min(len),
            end: end.min(len),
        }
    }

    /// Create a collapsed caret at `pos`
    pub const fn collapsed(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if the caret is a plain cursor (no selection)
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters selected
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if a position is within the selection (end exclusive)
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Re-clamp against a buffer length
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start, self.end, len)
    }

    /// Collapse to the start position
    pub fn collapse_to_start(&mut self) {
        self.end = self.start;
    }

    /// Collapse to the end position
    pub fn collapse_to_end(&mut self) {
        self.start = self.end;
    }
}
