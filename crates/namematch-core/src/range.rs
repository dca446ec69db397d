//! Byte positions and half-open ranges into a source buffer.

use std::fmt;

/// Byte offset into a UTF-8 source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SourceLoc(u32);

impl SourceLoc {
    #[inline]
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    #[inline]
    pub const fn offset(self) -> u32 {
        self.0
    }

    /// Offset as a slice index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SourceLoc {
    fn from(offset: u32) -> Self {
        Self(offset)
    }
}

impl From<SourceLoc> for u32 {
    fn from(loc: SourceLoc) -> Self {
        loc.0
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open `[start, start + byte_length)` interval into a source buffer.
///
/// Equality is structural: two empty ranges at different offsets are different
/// ranges. Renamers rely on that to anchor insertions for unlabelled arguments.
///
/// The layout is fixed (`start` then `byte_length`, two `u32`s) so label slices can be
/// lent to C callers without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct CharSourceRange {
    start: SourceLoc,
    byte_length: u32,
}

impl CharSourceRange {
    #[inline]
    pub const fn new(start: SourceLoc, byte_length: u32) -> Self {
        Self { start, byte_length }
    }

    /// Range spanning `start..end`. Panics if `end < start`.
    pub fn from_offsets(start: u32, end: u32) -> Self {
        assert!(
            start <= end,
            "CharSourceRange: end {end} precedes start {start}"
        );
        Self::new(SourceLoc::new(start), end - start)
    }

    /// Zero-length range anchored at `at`.
    #[inline]
    pub const fn empty(at: SourceLoc) -> Self {
        Self::new(at, 0)
    }

    #[inline]
    pub const fn start(&self) -> SourceLoc {
        self.start
    }

    #[inline]
    pub const fn byte_length(&self) -> u32 {
        self.byte_length
    }

    #[inline]
    pub const fn end(&self) -> SourceLoc {
        SourceLoc::new(self.start.offset() + self.byte_length)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.byte_length == 0
    }

    /// Half-open containment. An empty range contains nothing.
    #[inline]
    pub fn contains(&self, loc: SourceLoc) -> bool {
        self.start <= loc && loc < self.end()
    }

    /// Whether the range lies entirely inside a buffer of `len` bytes.
    #[inline]
    pub fn fits_within(&self, len: usize) -> bool {
        self.end().index() <= len
    }

    /// Slice of `source` covered by this range.
    ///
    /// Panics if the range is out of bounds or splits a UTF-8 sequence.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start.index()..self.end().index()]
    }
}

impl fmt::Display for CharSourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}
