// crates/shared-kernel/src/value_objects/text_range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A selection as a half-open `start..end` pair of offsets into a document.
///
/// The unit of the offsets is decided by whoever resolves the range against
/// text; construction never validates, so hosts can pass ranges through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width range at `offset` (a bare cursor).
    #[inline]
    pub const fn caret(offset: usize) -> Self {
        Self { start: offset, end: offset }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Width of the range; zero for empty or reversed ranges.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl From<(usize, usize)> for TextRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
