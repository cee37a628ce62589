//! Merging undersized spans.
//!
//! Splitting on syntax produces plenty of spans that are worthless on their
//! own: a single `use` line, a closing brace, a blank gap. The coalescer walks
//! the gap-filled spans left to right and keeps absorbing them into a buffer
//! until the buffer is worth emitting:
//!
//! ```text
//! threshold = 10
//!
//! spans:   "use a;"  "\n"  "use b;\n"  "fn main() {}\n"
//! non-ws:  5         5     10          20 → emit one span covering all four
//! ```
//!
//! A buffer is emitted once it has more than `threshold` non-whitespace
//! characters *and* contains a newline. Whatever is left at the end is
//! emitted too, so the tail of the file is never dropped.

use crate::span::Span;

/// Count the characters of `text` that are not whitespace.
///
/// Whitespace is Unicode `White_Space` plus the information separators
/// U+001C..=U+001F, the set a Unicode-aware `\s` matches. Invalid UTF-8 is
/// decoded lossily, so a replacement character counts as one non-whitespace
/// character.
///
/// ```rust
/// use codeslabs::non_whitespace_len;
///
/// assert_eq!(non_whitespace_len(b"  fn main() {}\n"), 10);
/// assert_eq!(non_whitespace_len(b" \t\r\n"), 0);
/// ```
pub fn non_whitespace_len(text: &[u8]) -> usize {
    String::from_utf8_lossy(text)
        .chars()
        .filter(|&c| !is_space(c))
        .count()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Merge adjacent spans until each passes the `threshold`.
///
/// `spans` must be contiguous (see [`crate::fill_gaps`]); the merge buffer
/// starts at offset 0 so the first emitted span always begins at the start
/// of the source.
pub fn coalesce(spans: &[Span], source: &[u8], threshold: usize) -> Vec<Span> {
    let (mut merged, current) = spans.iter().fold(
        (Vec::new(), Span::empty_at(0)),
        |(mut merged, current), &span| {
            let current = current + span;
            let text = current.extract(source);
            if non_whitespace_len(text) > threshold && text.contains(&b'\n') {
                merged.push(current);
                (merged, Span::empty_at(span.end))
            } else {
                (merged, current)
            }
        },
    );
    if !current.is_empty() {
        merged.push(current);
    }
    merged
}
