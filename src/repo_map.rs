//! Repository map: a capped, per-file summary of tagged symbols.
//!
//! ```text
//!
//! src/store.py:
//! definition.class: ⋮... import json
//! │
//! │    class Store:
//! ...
//!
//! src/app.py:
//! definition.function: ⋮... ...
//! ```
//!
//! Each section is `"\n{file_name}:\n"` followed by the file's symbols, one
//! per line. Sections are joined with a newline and the result is cut to
//! [`RepoMapConfig::max_chars`] characters. The cap applies to the whole map,
//! so the last section can end mid-snippet.

use log::{debug, info, warn};

use crate::assemble::SourceFile;
use crate::config::RepoMapConfig;
use crate::error::ConfigError;
use crate::language::LanguageRegistry;
use crate::symbols::SymbolExtractor;

/// The longest prefix of `s` with at most `max_chars` characters.
///
/// ```rust
/// use codeslabs::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("abc", 10), "abc");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Builds repository maps from batches of files.
#[derive(Debug, Clone, Copy)]
pub struct RepoMapper<'r> {
    extractor: SymbolExtractor<'r>,
    config: RepoMapConfig,
}

impl<'r> RepoMapper<'r> {
    /// Create a mapper.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`RepoMapConfig::validate`].
    pub fn new(registry: &'r LanguageRegistry, config: RepoMapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            extractor: SymbolExtractor::new(registry).with_context(config.context),
            config,
        })
    }

    /// The active configuration.
    pub const fn config(&self) -> &RepoMapConfig {
        &self.config
    }

    /// The map section for one file, if it has any symbols.
    pub fn section(&self, file: &SourceFile) -> Option<String> {
        let (Some(name), Some(content)) = (file.name.as_deref(), file.content.as_deref()) else {
            warn!("File record is missing name or content. Skipping...");
            return None;
        };
        if content.trim().is_empty() {
            debug!("Skipping empty file: {name}");
            return None;
        }

        let symbols = self.extractor.extract(name, content);
        if symbols.is_empty() {
            debug!("No symbols found in {name}");
            return None;
        }
        Some(format!("\n{name}:\n{}", symbols.join("\n")))
    }

    /// Generate the map for `files`, in input order.
    pub fn generate(&self, files: &[SourceFile]) -> String {
        let sections: Vec<String> = files.iter().filter_map(|file| self.section(file)).collect();
        info!("Generated repository map for {} of {} files", sections.len(), files.len());

        let map = sections.join("\n");
        truncate_chars(&map, self.config.max_chars).to_string()
    }
}
