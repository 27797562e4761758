//! Shared utility functions for tree walking

use std::io::ErrorKind;
use std::path::Path;

use glob::Pattern;

use crate::error::{Result, TreeError};

/// Check that `root` exists and is a directory (following symlinks).
pub fn validate_root(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(TreeError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(TreeError::PathNotFound(root.to_path_buf()))
        }
        Err(source) => Err(TreeError::Io {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Check if an entry name should be skipped.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    // Always ignore .git directory
    if name == ".git" {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
