//! Chunking and repository-map configuration.
//!
//! ## Two Budgets
//!
//! The chunker has two knobs that act at different stages:
//!
//! - `max_chars`: the byte budget used while splitting the syntax tree. A
//!   span only exceeds it when a single node has no children to split on.
//! - `coalesce`: the non-whitespace threshold used afterwards to merge tiny
//!   neighbours (imports, closing braces) into something worth embedding.
//!
//! Ingestion uses a 1500-byte budget. Diagram generation uses `512 * 3`.
//!
//! ```rust
//! use codeslabs::ChunkerConfig;
//!
//! let config = ChunkerConfig::for_diagram();
//! assert_eq!(config.max_chars, 1536);
//! assert_eq!(config.coalesce, 50);
//!
//! let config = ChunkerConfig::default().with_max_chars(800).with_coalesce(20);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default byte budget for ingestion chunking.
pub const DEFAULT_MAX_CHARS: usize = 1500;

/// Default non-whitespace threshold for coalescing.
pub const DEFAULT_COALESCE: usize = 50;

/// Default character cap of the repository map.
pub const DEFAULT_REPO_MAP_CHARS: usize = 8000;

/// Configuration for [`crate::CodeChunker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Maximum span length in bytes while splitting the tree.
    pub max_chars: usize,
    /// A merged chunk is emitted once it has more than this many
    /// non-whitespace characters (and contains a newline).
    pub coalesce: usize,
}

impl ChunkerConfig {
    /// Budget used when chunking files for embedding.
    #[must_use]
    pub const fn for_ingestion() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            coalesce: DEFAULT_COALESCE,
        }
    }

    /// Budget used when chunking files for diagram context.
    #[must_use]
    pub const fn for_diagram() -> Self {
        Self {
            max_chars: 512 * 3,
            coalesce: DEFAULT_COALESCE,
        }
    }

    /// Replace the split budget.
    #[must_use]
    pub const fn with_max_chars(self, max_chars: usize) -> Self {
        Self { max_chars, ..self }
    }

    /// Replace the coalesce threshold.
    #[must_use]
    pub const fn with_coalesce(self, coalesce: usize) -> Self {
        Self { coalesce, ..self }
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroBudget`] if `max_chars == 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::for_ingestion()
    }
}

/// Lines of context rendered around a matched symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetContext {
    /// Lines shown before the node's first line.
    pub before: usize,
    /// Lines shown after the node's last line.
    pub after: usize,
}

impl Default for SnippetContext {
    fn default() -> Self {
        Self {
            before: 2,
            after: 3,
        }
    }
}

/// Configuration for [`crate::RepoMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoMapConfig {
    /// Cap on the final concatenated map, in characters.
    ///
    /// Applied once to the whole map, so the last section may be cut
    /// mid-snippet.
    pub max_chars: usize,
    /// Context padding for each snippet.
    pub context: SnippetContext,
}

impl RepoMapConfig {
    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMapBudget`] if `max_chars == 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars == 0 {
            return Err(ConfigError::ZeroMapBudget);
        }
        Ok(())
    }
}

impl Default for RepoMapConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_REPO_MAP_CHARS,
            context: SnippetContext::default(),
        }
    }
}
