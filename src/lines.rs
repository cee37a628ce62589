//! Projecting byte spans onto line numbers.

use crate::span::Span;

/// Newline positions of a source buffer, for byte → line lookups.
///
/// ```rust
/// use codeslabs::LineIndex;
///
/// let index = LineIndex::new(b"a\nbb\nccc");
/// assert_eq!(index.line_of(0), 1);
/// assert_eq!(index.line_of(2), 2);  // first byte after the first newline
/// assert_eq!(index.line_of(8), 3);  // end of buffer
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex {
    newlines: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Index the newlines of `source`.
    #[must_use]
    pub fn new(source: &[u8]) -> Self {
        let newlines = source
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| (b == b'\n').then_some(i))
            .collect();
        Self {
            newlines,
            len: source.len(),
        }
    }

    /// The 1-based line of `offset`: newlines in `source[..offset]`, plus one.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&pos| pos < offset) + 1
    }

    /// Map each byte span to a line span, dropping spans of zero lines.
    ///
    /// Start and end are mapped independently. A span that starts and ends
    /// on the same line has no line length and is dropped.
    ///
    /// A span reaching the end of a source without a trailing newline ends
    /// one line further down, so the unterminated last line still counts as
    /// a whole line. A single-line file yields `1..2`, not nothing.
    #[must_use]
    pub fn project(&self, spans: &[Span]) -> Vec<Span> {
        spans
            .iter()
            .map(|span| Span::new(self.line_of(span.start), self.end_line_of(span.end)))
            .filter(|span| !span.is_empty())
            .collect()
    }

    fn end_line_of(&self, offset: usize) -> usize {
        let unterminated = self.newlines.last().map_or(self.len > 0, |&pos| pos + 1 < self.len);
        if offset >= self.len && unterminated {
            self.line_of(offset) + 1
        } else {
            self.line_of(offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_of_counts_preceding_newlines() {
        let source = b"one\ntwo\n\nfour\n";
        let index = LineIndex::new(source);
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(3), 1); // the newline itself is still line 1
        assert_eq!(index.line_of(4), 2);
        assert_eq!(index.line_of(8), 3);
        assert_eq!(index.line_of(9), 4);
        assert_eq!(index.line_of(source.len()), 5);
    }

    #[test]
    fn test_project_drops_single_line_spans() {
        let source = b"aaa\nbbb\nccc\n";
        let index = LineIndex::new(source);
        let spans = [Span::new(0, 4), Span::new(4, 6), Span::new(6, 12)];
        assert_eq!(index.project(&spans), vec![Span::new(1, 2), Span::new(2, 4)]);
    }

    #[test]
    fn test_unterminated_last_line_is_kept() {
        let index = LineIndex::new(b"x = 1");
        assert_eq!(index.project(&[Span::new(0, 5)]), vec![Span::new(1, 2)]);

        let source = b"aaa\nbbb\nccc";
        let index = LineIndex::new(source);
        let spans = [Span::new(0, 4), Span::new(4, 8), Span::new(8, 11)];
        assert_eq!(
            index.project(&spans),
            vec![Span::new(1, 2), Span::new(2, 3), Span::new(3, 4)]
        );
    }

    #[test]
    fn test_empty_source() {
        let index = LineIndex::new(b"");
        assert_eq!(index.line_of(0), 1);
        assert!(index.project(&[Span::empty_at(0)]).is_empty());
    }
}
