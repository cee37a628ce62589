//! The Span type: a half-open interval over bytes or lines.

use std::ops::{Add, AddAssign};

/// A half-open interval `[start, end)` over a coordinate space.
///
/// The chunking pipeline uses spans in two coordinate spaces: byte offsets
/// into the source buffer during splitting and coalescing, and 1-based line
/// numbers after projection. A single stage never mixes the two.
///
/// ## Concatenation
///
/// `a + b` is the covering interval of both spans, not a set union:
///
/// ```rust
/// use codeslabs::Span;
///
/// let grown = Span::new(1, 2) + Span::new(2, 4);
/// assert_eq!(grown, Span::new(1, 4));
///
/// // Disjoint spans still produce the covering interval.
/// assert_eq!(Span::new(0, 1) + Span::new(5, 6), Span::new(0, 6));
/// ```
///
/// Only concatenate spans that are meant to become one contiguous region;
/// the chunker uses it as a monotonically growing accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start.
    pub start: usize,
    /// Exclusive end.
    pub end: usize,
}

impl Span {
    /// Create a span. A reversed pair is normalised so that `start <= end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A zero-length span positioned at `offset`.
    #[must_use]
    pub const fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// `end - start`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes of `source` covered by this span, clamped to the buffer.
    ///
    /// ```rust
    /// use codeslabs::Span;
    ///
    /// assert_eq!(Span::new(6, 11).extract(b"hello world"), b"world");
    /// assert_eq!(Span::new(6, 99).extract(b"hello world"), b"world");
    /// ```
    #[must_use]
    pub fn extract<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        &source[start..end]
    }

    /// The lines covered by a 1-based line span, joined with `\n`.
    ///
    /// Both `start` and `end` are included: the line a chunk ends on is the
    /// line the next chunk starts on, so a boundary line appears in both.
    ///
    /// ```rust
    /// use codeslabs::Span;
    ///
    /// let lines = ["a", "b", "c", "d"];
    /// assert_eq!(Span::new(2, 3).extract_lines(&lines), "b\nc");
    /// assert_eq!(Span::new(3, 9).extract_lines(&lines), "c\nd");
    /// ```
    #[must_use]
    pub fn extract_lines(&self, lines: &[&str]) -> String {
        let end = self.end.min(lines.len());
        let start = self.start.saturating_sub(1).min(end);
        lines[start..end].join("\n")
    }
}

impl Add for Span {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_pair_is_normalised() {
        let span = Span::new(7, 3);
        assert_eq!(span, Span::new(3, 7));
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_accumulator_grows_monotonically() {
        let mut acc = Span::empty_at(10);
        acc += Span::new(12, 20);
        assert_eq!(acc, Span::new(10, 20));
        acc += Span::new(20, 20);
        assert_eq!(acc, Span::new(10, 20));
        acc += Span::new(25, 30);
        assert_eq!(acc, Span::new(10, 30));
    }

    #[test]
    fn test_empty_span() {
        let span = Span::empty_at(5);
        assert!(span.is_empty());
        assert_eq!(span.extract(b"0123456789"), b"");
    }

    #[test]
    fn test_extract_lines_clamps_start() {
        let lines = ["first", "second"];
        assert_eq!(Span::new(0, 1).extract_lines(&lines), "first");
        assert_eq!(Span::new(5, 9).extract_lines(&lines), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(3, 9).to_string(), "3..9");
    }
}
