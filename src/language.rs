//! Grammars and tag queries, keyed by language name.
//!
//! The registry is an ordinary value: build one (usually with
//! [`LanguageRegistry::with_defaults`]), then lend it to the chunker and the
//! symbol extractor. Nothing here is global.
//!
//! ```rust
//! use codeslabs::LanguageRegistry;
//!
//! let registry = LanguageRegistry::with_defaults();
//! assert_eq!(LanguageRegistry::detect("src/lib.rs"), "rust");
//! assert!(registry.supports("rust"));
//! assert!(registry.query("python").is_some());
//! ```

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use tree_sitter::{Language, Parser, Query, Tree};

use crate::error::{Error, Result};

const RUST_TAGS: &str = include_str!("../queries/rust-tags.scm");
const PYTHON_TAGS: &str = include_str!("../queries/python-tags.scm");
const JAVASCRIPT_TAGS: &str = include_str!("../queries/javascript-tags.scm");
const TYPESCRIPT_TAGS: &str = include_str!("../queries/typescript-tags.scm");
const GO_TAGS: &str = include_str!("../queries/go-tags.scm");

#[derive(Debug, Clone)]
struct Grammar {
    language: Language,
    query: Option<String>,
}

/// Registered grammars and their tag queries.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    grammars: HashMap<String, Grammar>,
}

impl LanguageRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the bundled grammars and tag queries.
    ///
    /// Registers `rust`, `python`, `javascript`, `javascript.jsx`,
    /// `typescript`, `typescript.tsx` and `go`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let javascript: Language = tree_sitter_javascript::LANGUAGE.into();

        let mut registry = Self::new();
        registry.insert("rust", tree_sitter_rust::LANGUAGE.into(), Some(RUST_TAGS));
        registry.insert("python", tree_sitter_python::LANGUAGE.into(), Some(PYTHON_TAGS));
        registry.insert("javascript", javascript.clone(), Some(JAVASCRIPT_TAGS));
        registry.insert("javascript.jsx", javascript, Some(JAVASCRIPT_TAGS));
        registry.insert(
            "typescript",
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Some(TYPESCRIPT_TAGS),
        );
        registry.insert(
            "typescript.tsx",
            tree_sitter_typescript::LANGUAGE_TSX.into(),
            Some(TYPESCRIPT_TAGS),
        );
        registry.insert("go", tree_sitter_go::LANGUAGE.into(), Some(GO_TAGS));

        debug!("Loaded languages: {:?}", registry.names());
        registry
    }

    fn insert(&mut self, name: &str, language: Language, query: Option<&str>) {
        self.grammars.insert(
            name.to_string(),
            Grammar {
                language,
                query: query.map(str::to_string),
            },
        );
    }

    /// Register (or replace) a grammar. Any query already set for `name` is
    /// kept.
    pub fn register(&mut self, name: impl Into<String>, language: impl Into<Language>) {
        let language = language.into();
        self.grammars
            .entry(name.into())
            .and_modify(|grammar| grammar.language = language.clone())
            .or_insert(Grammar {
                language,
                query: None,
            });
    }

    /// Set the tag query document for a registered language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if `name` has no grammar.
    pub fn set_query(&mut self, name: &str, query: impl Into<String>) -> Result<()> {
        let grammar = self
            .grammars
            .get_mut(name)
            .ok_or_else(|| Error::UnsupportedLanguage(name.to_string()))?;
        grammar.query = Some(query.into());
        Ok(())
    }

    /// Whether a grammar is registered for `name`.
    pub fn supports(&self, name: &str) -> bool {
        self.grammars.contains_key(name)
    }

    /// The grammar registered for `name`.
    pub fn language(&self, name: &str) -> Option<&Language> {
        self.grammars.get(name).map(|g| &g.language)
    }

    /// The tag query document registered for `name`.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.grammars.get(name).and_then(|g| g.query.as_deref())
    }

    /// Registered language names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.grammars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Detect the language name of a file from its extension.
    ///
    /// Unknown extensions come back as the lowercased extension itself, so
    /// callers see e.g. `"md"` and find no grammar for it.
    pub fn detect(path: impl AsRef<Path>) -> String {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let name = match ext.as_str() {
            "js" => "javascript",
            "jsx" => "javascript.jsx",
            "ts" => "typescript",
            "tsx" => "typescript.tsx",
            "py" => "python",
            "java" => "java",
            "go" => "go",
            "rs" => "rust",
            "rb" => "ruby",
            other => other,
        };
        name.to_string()
    }

    /// A parser loaded with the grammar for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if no grammar is registered and
    /// [`Error::Language`] if the grammar's ABI is incompatible.
    pub fn parser(&self, name: &str) -> Result<Parser> {
        let language = self
            .language(name)
            .ok_or_else(|| Error::UnsupportedLanguage(name.to_string()))?;
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(parser)
    }

    /// Parse `source` with the grammar for `name`.
    ///
    /// # Errors
    ///
    /// As [`LanguageRegistry::parser`], plus [`Error::Parse`] if the parser
    /// returns no tree.
    pub fn parse(&self, name: &str, source: &str) -> Result<Tree> {
        self.parser(name)?
            .parse(source, None)
            .ok_or_else(|| Error::Parse(name.to_string()))
    }

    /// Compile the tag query for `name`.
    ///
    /// Returns `Ok(None)` if the language has no query, or a blank one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if no grammar is registered and
    /// [`Error::Query`] if the query doesn't compile against the grammar.
    pub fn compile_query(&self, name: &str) -> Result<Option<Query>> {
        let grammar = self
            .grammars
            .get(name)
            .ok_or_else(|| Error::UnsupportedLanguage(name.to_string()))?;
        match grammar.query.as_deref() {
            Some(source) if !source.trim().is_empty() => {
                Ok(Some(Query::new(&grammar.language, source)?))
            }
            _ => Ok(None),
        }
    }
}
