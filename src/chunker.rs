//! Splitting a syntax tree into budget-bounded byte spans.
//!
//! ## The Algorithm
//!
//! Walk the children of a node in source order, growing an accumulator span
//! until the next child would push it over `max_chars`:
//!
//! ```text
//! max_chars = 10
//!
//! children:   [use a;][use b;]  [fn f() { ... 40 bytes ... }][x]
//!              └──── acc ────┘   └─ too big: recurse inside ┘
//!
//! spans:      [0..14]  [f's own spans...]  [acc after f..]
//! ```
//!
//! - A child larger than the budget flushes the accumulator and is split
//!   recursively; its spans are spliced in place.
//! - A child that would overflow the accumulator flushes it and starts a new
//!   one covering exactly that child.
//! - Anything else grows the accumulator to the child's end.
//!
//! A leaf can't be split further; if it is larger than the budget it ends up
//! as one oversized span once gaps are filled.
//!
//! The raw spans leave holes where siblings are separated by whitespace or
//! comments that the grammar doesn't attach to a node. [`fill_gaps`] closes
//! them so the spans partition the source.

use crate::span::Span;
use crate::tree::SyntaxNode;

/// Recursively split `node` into spans no longer than `max_chars`.
///
/// Spans are returned in source order. They are not yet contiguous: see
/// [`fill_gaps`].
pub fn split_node<N: SyntaxNode>(node: &N, max_chars: usize) -> Vec<Span> {
    let (mut spans, current) = node.children().iter().fold(
        (Vec::new(), Span::empty_at(node.start_byte())),
        |(mut spans, current), child| {
            let (emitted, next) = absorb_child(child, current, max_chars);
            spans.extend(emitted);
            (spans, next)
        },
    );
    spans.push(current);
    spans
}

/// Feed one child into the accumulator.
///
/// Returns the spans completed by this step and the accumulator to carry on
/// with.
fn absorb_child<N: SyntaxNode>(child: &N, current: Span, max_chars: usize) -> (Vec<Span>, Span) {
    let child_span = Span::new(child.start_byte(), child.end_byte());

    if child.byte_len() > max_chars {
        let mut emitted = vec![current];
        emitted.extend(split_node(child, max_chars));
        return (emitted, Span::empty_at(child_span.end));
    }

    let grown = current + child_span;
    if grown.len() > max_chars {
        (vec![current], child_span)
    } else {
        (Vec::new(), grown)
    }
}

/// Make consecutive spans contiguous and extend the last one to `end`.
///
/// Each span's end is moved to the next span's start, which absorbs the
/// whitespace between siblings into the earlier span. `end` is normally the
/// root node's end offset.
///
/// ```rust
/// use codeslabs::{fill_gaps, Span};
///
/// let spans = vec![Span::new(0, 3), Span::new(5, 8), Span::new(9, 9)];
/// let filled = fill_gaps(spans, 12);
/// assert_eq!(filled, vec![Span::new(0, 5), Span::new(5, 9), Span::new(9, 12)]);
/// ```
pub fn fill_gaps(mut spans: Vec<Span>, end: usize) -> Vec<Span> {
    for i in 1..spans.len() {
        let next_start = spans[i].start;
        let prev = &mut spans[i - 1];
        prev.end = next_start.max(prev.start);
    }
    if let Some(last) = spans.last_mut() {
        last.end = end.max(last.start);
    }
    spans
}
