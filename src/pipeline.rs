//! The chunking pipeline: split → fill gaps → coalesce → project → assemble.

use log::{debug, error, warn};

use crate::assemble::{assemble, Chunk, SourceFile};
use crate::chunker::{fill_gaps, split_node};
use crate::coalesce::coalesce;
use crate::config::ChunkerConfig;
use crate::error::{ConfigError, Error, Result};
use crate::language::LanguageRegistry;
use crate::lines::LineIndex;
use crate::span::Span;
use crate::tree::SyntaxNode;
use crate::Chunker;

/// Split a parsed file into 1-based line spans.
///
/// Runs the byte-level stages ([`split_node`], [`fill_gaps`], [`coalesce`])
/// and projects the result onto line numbers. Empty sources yield nothing.
pub fn chunk_tree<N: SyntaxNode>(root: &N, source: &[u8], config: &ChunkerConfig) -> Vec<Span> {
    if source.is_empty() {
        return Vec::new();
    }
    let spans = split_node(root, config.max_chars);
    // Trailing whitespace after the root belongs to the last span.
    let spans = fill_gaps(spans, root.end_byte().max(source.len()));
    let spans = coalesce(&spans, source, config.coalesce);
    LineIndex::new(source).project(&spans)
}

/// Syntax-aware chunker backed by a [`LanguageRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct CodeChunker<'r> {
    registry: &'r LanguageRegistry,
    config: ChunkerConfig,
}

impl<'r> CodeChunker<'r> {
    /// Create a chunker.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ChunkerConfig::validate`].
    pub fn new(
        registry: &'r LanguageRegistry,
        config: ChunkerConfig,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// The active configuration.
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Split a parsed file into line spans with this chunker's budgets.
    pub fn chunk_tree<N: SyntaxNode>(&self, root: &N, source: &[u8]) -> Vec<Span> {
        chunk_tree(root, source, &self.config)
    }

    /// Chunk one file, surfacing failures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the record lacks a name or content,
    /// [`Error::UnsupportedLanguage`] if no grammar matches its extension, and
    /// a parse error if the grammar can't be loaded or produces no tree.
    pub fn try_chunk(&self, file: &SourceFile) -> Result<Vec<Chunk>> {
        let name = file.name.as_deref().ok_or(Error::MissingField("name"))?;
        let content = file.content.as_deref().ok_or(Error::MissingField("content"))?;
        let path = file.path.as_deref().unwrap_or_default();

        let language = LanguageRegistry::detect(name);
        let tree = self.registry.parse(&language, content)?;
        let spans = self.chunk_tree(&tree.root_node(), content.as_bytes());

        let chunks = assemble(name, path, content, &spans);
        debug!("Chunked {name} ({language}) into {} chunks", chunks.len());
        Ok(chunks)
    }
}

impl Chunker for CodeChunker<'_> {
    fn chunk(&self, file: &SourceFile) -> Vec<Chunk> {
        match self.try_chunk(file) {
            Ok(chunks) => chunks,
            Err(e @ Error::MissingField(_)) => {
                warn!("{e}. Skipping...");
                Vec::new()
            }
            Err(e @ Error::UnsupportedLanguage(_)) => {
                warn!("{}: {e}", file.name.as_deref().unwrap_or_default());
                Vec::new()
            }
            Err(e) => {
                error!("Failed to parse {}: {e}", file.name.as_deref().unwrap_or_default());
                Vec::new()
            }
        }
    }
}
