//! # codeslabs
//!
//! Syntax-tree code chunking and repository maps for retrieval-augmented
//! generation (RAG) over source code.
//!
//! ## The Problem
//!
//! Code has to be cut into pieces small enough to embed, but a function split
//! in half retrieves badly, and a chunk made of one closing brace retrieves
//! nothing at all. Fixed-size or line-count splitting ignores the structure
//! that is sitting right there in the parse tree.
//!
//! ## Chunking Pipeline
//!
//! Files are parsed with tree-sitter and cut along node boundaries:
//!
//! ```text
//! syntax tree ──split_node──▶ byte spans (≤ max_chars unless one node is bigger)
//!             ──fill_gaps───▶ contiguous byte spans covering the whole file
//!             ──coalesce────▶ merged spans with > coalesce non-whitespace chars
//!             ──project─────▶ 1-based line spans
//!             ──assemble────▶ Chunk records (trimmed, blank ones dropped)
//! ```
//!
//! 1. **Split**: walk each node's children, accumulating them into a span
//!    until the next one would push it over `max_chars`. A child that is
//!    over budget on its own is split recursively in place.
//! 2. **Fill gaps**: stretch each span to the start of the next one so that
//!    whitespace and comments between nodes belong to some chunk.
//! 3. **Coalesce**: merge tiny neighbours (a `use` line, a lone `}`) until the
//!    result has real content and spans more than one line.
//! 4. **Project**: map byte offsets to line numbers.
//! 5. **Assemble**: slice the lines back out of the file and build records.
//!
//! ## Repository Maps
//!
//! A repository map is a compact, capped summary of what a codebase defines
//! and calls, built from each language's tag query:
//!
//! ```text
//!
//! src/loader.py:
//! definition.function: ⋮... import os
//! │
//! │    def load(path):
//! │        return open(path).read()
//! │
//!    6
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use codeslabs::{
//!     Chunker, ChunkerConfig, CodeChunker, LanguageRegistry, RepoMapConfig, RepoMapper,
//!     SourceFile,
//! };
//!
//! let registry = LanguageRegistry::with_defaults();
//! let files = vec![SourceFile::new(
//!     "src/loader.py",
//!     "import os\n\ndef load(path):\n    return open(path).read()\n",
//! )];
//!
//! let chunker = CodeChunker::new(&registry, ChunkerConfig::for_ingestion()).unwrap();
//! let chunks = chunker.chunk_files(&files);
//! assert_eq!(chunks[0].start_line, 1);
//!
//! let mapper = RepoMapper::new(&registry, RepoMapConfig::default()).unwrap();
//! let map = mapper.generate(&files);
//! assert!(map.starts_with("\nsrc/loader.py:\n"));
//! ```
//!
//! ## Failure Handling
//!
//! Batch operations never fail as a whole. A file with a missing field, an
//! unknown language, or a query that doesn't compile is logged through the
//! [`log`] facade and contributes nothing. The `try_*` methods surface the
//! per-file [`Error`] for callers that want it.

mod assemble;
mod chunker;
mod coalesce;
mod config;
mod error;
mod filter;
mod language;
mod lines;
mod pipeline;
mod repo_map;
mod span;
mod symbols;
mod tree;

pub use assemble::{assemble, Chunk, SourceFile};
pub use chunker::{fill_gaps, split_node};
pub use coalesce::{coalesce, non_whitespace_len};
pub use config::{
    ChunkerConfig, RepoMapConfig, SnippetContext, DEFAULT_COALESCE, DEFAULT_MAX_CHARS,
    DEFAULT_REPO_MAP_CHARS,
};
pub use error::{ConfigError, Error, Result};
pub use filter::is_excluded;
pub use language::LanguageRegistry;
pub use lines::LineIndex;
pub use pipeline::{chunk_tree, CodeChunker};
pub use repo_map::{truncate_chars, RepoMapper};
pub use span::Span;
pub use symbols::{collect_symbols, render_snippet, SymbolExtractor, TagMatch};
pub use tree::SyntaxNode;

/// A file chunking strategy.
///
/// Implementors only provide [`Chunker::chunk`]; batching and exclusion come
/// for free:
///
/// ```rust
/// use codeslabs::{Chunk, Chunker, ChunkerConfig, CodeChunker, LanguageRegistry, SourceFile};
///
/// fn chunk_repo(chunker: &dyn Chunker, files: &[SourceFile]) -> Vec<Chunk> {
///     chunker.chunk_files(files)
/// }
///
/// let registry = LanguageRegistry::with_defaults();
/// let chunker = CodeChunker::new(&registry, ChunkerConfig::default()).unwrap();
///
/// let files = [
///     SourceFile::new("src/lib.rs", "pub fn one() -> u32 {\n    1\n}\n\npub fn two() -> u32 {\n    2\n}\n"),
///     SourceFile::new("Cargo.lock", "# generated\n"),
/// ];
/// let chunks = chunk_repo(&chunker, &files);
/// assert!(chunks.iter().all(|c| c.file_name == "src/lib.rs"));
/// ```
pub trait Chunker: Send + Sync {
    /// Chunk one file. Failures are logged and yield no chunks.
    fn chunk(&self, file: &SourceFile) -> Vec<Chunk>;

    /// Chunk a batch of files, skipping excluded ones.
    ///
    /// Files are independent: a failure in one never affects the others.
    /// Chunks come back grouped by file, in input order.
    fn chunk_files(&self, files: &[SourceFile]) -> Vec<Chunk> {
        files
            .iter()
            .filter(|file| {
                let name = file.name.as_deref().or(file.path.as_deref());
                let excluded = name.is_some_and(is_excluded);
                if excluded {
                    log::debug!("Skipping excluded file {}", name.unwrap_or_default());
                }
                !excluded
            })
            .flat_map(|file| self.chunk(file))
            .collect()
    }
}
