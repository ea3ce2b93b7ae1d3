use std::fmt;
use std::ops::Range;

/// A half-open `[begin, end)` range of offsets into a [`TextBuffer`](super::text::TextBuffer).
///
/// Spans are plain values: nodes store them instead of copies of the bytes
/// they label, so every label in a trie is a view into one shared buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the first byte.
    pub begin: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl Span {
    /// The empty span at offset zero, used as the root label.
    pub const EMPTY: Span = Span { begin: 0, end: 0 };

    /// Creates a span covering `begin..end`.
    #[inline]
    pub const fn new(begin: usize, end: usize) -> Self {
        Span { begin, end }
    }

    /// Number of bytes covered. Inverted spans count as empty.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// True if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// Returns the span with the first `n` bytes removed.
    #[inline]
    pub(crate) fn skip(self, n: usize) -> Span {
        Span::new(self.begin + n, self.end)
    }

    /// Returns the first `n` bytes of the span.
    #[inline]
    pub(crate) fn take(self, n: usize) -> Span {
        Span::new(self.begin, self.begin + n)
    }

    /// True if the span lies entirely within a buffer of length `len`.
    #[inline]
    pub fn fits(&self, len: usize) -> bool {
        self.begin <= self.end && self.end <= len
    }

    /// The span as a `Range`, for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}
