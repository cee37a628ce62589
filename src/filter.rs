//! Files that are never worth chunking.
//!
//! Manifests and lock files are large, repetitive and say little about how the
//! code works; compiled artifacts and logs aren't source at all.

use std::path::Path;

const EXCLUDED_NAMES: &[&str] = &[
    // Package manifests
    "package.json",
    "Cargo.toml",
    "pyproject.toml",
    "setup.cfg",
    "requirements.txt",
    "go.mod",
    "Gemfile",
    "composer.json",
    "pom.xml",
    "build.gradle",
    // Lock files
    "package-lock.json",
    "npm-shrinkwrap.json",
    "pnpm-lock.yaml",
    "go.sum",
    // VCS ignore files
    ".gitignore",
    ".gitattributes",
    ".hgignore",
    ".dockerignore",
    ".npmignore",
];

const EXCLUDED_EXTENSIONS: &[&str] = &[
    // Lock files (Cargo.lock, yarn.lock, poetry.lock, Gemfile.lock, ...)
    "lock",
    // Compiled artifacts
    "pyc", "pyo", "class", "jar", "o", "obj", "a", "so", "dylib", "dll", "exe", "wasm",
    // Logs
    "log",
];

/// Whether a file should be skipped before chunking.
///
/// Only the final path component is inspected.
///
/// ```rust
/// use codeslabs::is_excluded;
///
/// assert!(is_excluded("web/package-lock.json"));
/// assert!(is_excluded("Cargo.lock"));
/// assert!(is_excluded("build/app.pyc"));
/// assert!(!is_excluded("src/main.rs"));
/// ```
pub fn is_excluded(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if EXCLUDED_NAMES.contains(&name) {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXCLUDED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
