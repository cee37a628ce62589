//! Error types for codeslabs.
//!
//! Errors describe why a single file could not be chunked or mapped. The
//! batch entry points ([`crate::Chunker::chunk_files`],
//! [`crate::RepoMapper::generate`]) log them and move on to the next file.

/// Errors that can occur while processing one file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file record lacks a required field.
    #[error("file record is missing '{0}'")]
    MissingField(&'static str),

    /// No grammar is registered for the detected language.
    #[error("no parser available for language '{0}'")]
    UnsupportedLanguage(String),

    /// The parser produced no tree.
    #[error("failed to parse {0}")]
    Parse(String),

    /// The grammar could not be loaded into a parser.
    #[error("tree-sitter language error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The tag query document does not compile against the grammar.
    #[error("invalid tag query: {0}")]
    Query(#[from] tree_sitter::QueryError),
}

/// Result type for codeslabs operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The chunk budget must allow at least one byte.
    #[error("max_chars must be > 0")]
    ZeroBudget,

    /// The repository map cap must allow at least one character.
    #[error("repo map max_chars must be > 0")]
    ZeroMapBudget,
}
