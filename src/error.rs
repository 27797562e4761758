//! Error types for tree rendering

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a render.
///
/// Problems below the root (an unreadable subdirectory, an entry whose
/// metadata cannot be read) never surface here; they are annotated in the
/// tree or skipped.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot access '{}': No such file or directory", .0.display())]
    PathNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors from querying the tracked-file list.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("'{}' is not inside a git repository: {source}", .path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("repository for '{}' has no working directory", .0.display())]
    BareRepository(PathBuf),

    #[error("failed to read git index: {0}")]
    Index(#[source] git2::Error),

    #[error("cannot resolve '{}' against the work tree: {source}", .path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Clipboard export failure. Reported as a warning, never fatal.
#[derive(Error, Debug)]
#[error("could not copy to clipboard: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
