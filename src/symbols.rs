//! Tagged symbol extraction.
//!
//! Runs a language's tag query over a file and renders every captured node
//! as a short, context-padded snippet:
//!
//! ```text
//! definition.function: ⋮... use std::fs;
//! │    
//! │    fn load(path: &str) -> String {
//! │        fs::read_to_string(path).unwrap_or_default()
//! │    }
//! │    
//!    7 fn main() {
//! ```
//!
//! The first rendered row is marked `⋮...`, interior rows `│   `, and the last
//! row carries its 1-based line number.
//!
//! ## Deduplication
//!
//! Snippets are deduplicated by their rendered text, not by node: a name
//! capture on the same line as its one-line definition renders identically
//! and is dropped, and so is a second function whose body and surroundings
//! happen to be the same text.

use std::collections::HashSet;

use log::{debug, error, warn};
use streaming_iterator::StreamingIterator;
use tree_sitter::QueryCursor;

use crate::config::SnippetContext;
use crate::error::{Error, Result};
use crate::language::LanguageRegistry;

/// One captured node: its tag and the rows it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// The capture name, e.g. `definition.function`.
    pub tag: String,
    /// First row of the node (0-based).
    pub start_row: usize,
    /// Last row of the node (0-based, inclusive).
    pub end_row: usize,
}

impl TagMatch {
    /// Create a match.
    #[must_use]
    pub fn new(tag: impl Into<String>, start_row: usize, end_row: usize) -> Self {
        Self {
            tag: tag.into(),
            start_row,
            end_row,
        }
    }
}

/// Render the rows `start_row..=end_row` of `lines` with context padding.
///
/// ```rust
/// use codeslabs::{render_snippet, SnippetContext};
///
/// let lines = ["a", "b", "c", "d", "e", "f", "g"];
/// let snippet = render_snippet(&lines, 3, 3, SnippetContext::default());
/// assert_eq!(snippet, "⋮... b\n│    c\n│    d\n│    e\n   6 f");
/// ```
pub fn render_snippet(
    lines: &[&str],
    start_row: usize,
    end_row: usize,
    context: SnippetContext,
) -> String {
    let first = start_row.saturating_sub(context.before);
    let last = end_row.saturating_add(context.after).min(lines.len());

    (first..last)
        .map(|row| {
            let prefix = if first < row && row + 1 < last {
                "│   ".to_string()
            } else if row == first {
                "⋮...".to_string()
            } else {
                format!("{:4}", row + 1)
            };
            format!("{prefix} {}", lines[row])
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render matches against `content` as `"{tag}: {snippet}"`, skipping any
/// whose snippet text was already produced.
pub fn collect_symbols(
    content: &str,
    matches: impl IntoIterator<Item = TagMatch>,
    context: SnippetContext,
) -> Vec<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut seen = HashSet::new();

    matches
        .into_iter()
        .filter_map(|m| {
            let snippet = render_snippet(&lines, m.start_row, m.end_row, context);
            let symbol = format!("{}: {snippet}", m.tag);
            seen.insert(snippet).then_some(symbol)
        })
        .collect()
}

/// Extracts tagged snippets from files using a [`LanguageRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct SymbolExtractor<'r> {
    registry: &'r LanguageRegistry,
    context: SnippetContext,
}

impl<'r> SymbolExtractor<'r> {
    /// Create an extractor with the default context padding.
    #[must_use]
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self {
            registry,
            context: SnippetContext::default(),
        }
    }

    /// Use different context padding.
    #[must_use]
    pub fn with_context(self, context: SnippetContext) -> Self {
        Self { context, ..self }
    }

    /// Tagged snippets for one file.
    ///
    /// Never fails: an unknown language, a missing query, or a parse/query
    /// error is logged and yields no symbols for this file.
    pub fn extract(&self, file_name: &str, content: &str) -> Vec<String> {
        match self.try_extract(file_name, content) {
            Ok(symbols) => symbols,
            Err(e @ Error::UnsupportedLanguage(_)) => {
                warn!("{file_name}: {e}");
                Vec::new()
            }
            Err(e) => {
                error!("Error extracting symbols from {file_name}: {e}");
                Vec::new()
            }
        }
    }

    /// Tagged snippets for one file, surfacing failures.
    ///
    /// A language without a query yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns an error if the language is unknown, the file doesn't parse,
    /// or the query doesn't compile.
    pub fn try_extract(&self, file_name: &str, content: &str) -> Result<Vec<String>> {
        let language = LanguageRegistry::detect(file_name);
        debug!("Processing file {file_name} with language {language}");

        let tree = self.registry.parse(&language, content)?;
        let Some(query) = self.registry.compile_query(&language)? else {
            warn!("No query available for language {language}");
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut captures = cursor.captures(&query, tree.root_node(), content.as_bytes());
        while let Some((m, index)) = captures.next() {
            let capture = m.captures[*index];
            matches.push(TagMatch::new(
                query.capture_names()[capture.index as usize],
                capture.node.start_position().row,
                capture.node.end_position().row,
            ));
        }
        debug!("Found {} captures in {file_name}", matches.len());

        let symbols = collect_symbols(content, matches, self.context);
        debug!("Extracted {} symbols from {file_name}", symbols.len());
        Ok(symbols)
    }
}
