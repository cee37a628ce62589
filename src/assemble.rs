//! File records in, chunk records out.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A source file handed to the chunker or the repo mapper.
///
/// `name` and `content` are optional so that a malformed upstream record can
/// be represented; such records are skipped with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path of the file relative to the repository root, e.g. `src/lib.rs`.
    pub name: Option<String>,
    /// Optional full path or URL of the file.
    pub path: Option<String>,
    /// The file's text.
    pub content: Option<String>,
}

impl SourceFile {
    /// A file with a name and content.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: None,
            content: Some(content.into()),
        }
    }

    /// Attach a path.
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }
}

/// A trimmed piece of a file with its line range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text, trimmed of surrounding whitespace.
    pub content: String,
    /// Name of the file the chunk came from.
    pub file_name: String,
    /// Path of the file, or `""` when the record had none.
    pub file_path: String,
    /// Position of the chunk's line span in the file's span sequence.
    pub chunk_index: usize,
    /// Name of the originating file.
    pub original_file: String,
    /// First line (1-based).
    pub start_line: usize,
    /// Last line (1-based). Shared with the next chunk's `start_line`.
    pub end_line: usize,
}

/// Turn line spans into chunk records.
///
/// Lines are sliced out of `content` by line number (not by byte offset),
/// trimmed, and dropped if nothing but whitespace remains. `chunk_index` is
/// the span's position in `line_spans`, so indices of dropped chunks are
/// skipped rather than reused.
pub fn assemble(
    file_name: &str,
    file_path: &str,
    content: &str,
    line_spans: &[Span],
) -> Vec<Chunk> {
    let lines: Vec<&str> = content.lines().collect();

    line_spans
        .iter()
        .enumerate()
        .filter_map(|(chunk_index, span)| {
            let text = span.extract_lines(&lines);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            Some(Chunk {
                content: trimmed.to_string(),
                file_name: file_name.to_string(),
                file_path: file_path.to_string(),
                chunk_index,
                original_file: file_name.to_string(),
                start_line: span.start,
                end_line: span.end,
            })
        })
        .collect()
}
