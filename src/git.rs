//! Git repository integration
//!
//! The walker never talks to git directly. It asks a [`TrackedFiles`]
//! implementation for the tracked paths under the root once per run and
//! filters against the resulting [`TrackedSet`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::GitError;

/// Source of the tracked-file list for a directory.
pub trait TrackedFiles {
    /// Return the tracked paths under `root`, relative to `root`.
    fn list_tracked_files(&self, root: &Path) -> Result<HashSet<PathBuf>, GitError>;
}

/// Reads tracked files from the index of the repository containing the root.
///
/// Yields the same set `git -C <root> ls-files` prints.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitIndex;

impl TrackedFiles for GitIndex {
    fn list_tracked_files(&self, root: &Path) -> Result<HashSet<PathBuf>, GitError> {
        let repo = Repository::discover(root).map_err(|source| GitError::NotARepository {
            path: root.to_path_buf(),
            source,
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::BareRepository(root.to_path_buf()))?;

        let canonical = |path: &Path| {
            path.canonicalize().map_err(|source| GitError::Path {
                path: path.to_path_buf(),
                source,
            })
        };
        let workdir = canonical(workdir)?;
        let root = canonical(root)?;
        // Empty when the root is the work tree itself.
        let prefix = root.strip_prefix(&workdir).unwrap_or(Path::new(""));

        let index = repo.index().map_err(GitError::Index)?;
        let tracked: HashSet<PathBuf> = index
            .iter()
            .filter_map(|entry| {
                let path = PathBuf::from(String::from_utf8_lossy(&entry.path).as_ref());
                path.strip_prefix(prefix).ok().map(Path::to_path_buf)
            })
            .collect();

        tracing::debug!(
            workdir = %workdir.display(),
            prefix = %prefix.display(),
            count = tracked.len(),
            "collected tracked files"
        );
        Ok(tracked)
    }
}

/// Prefix-based inclusion set built from a tracked-file list.
///
/// Paths are relative to the walk root. A directory is included when it is
/// an ancestor of at least one tracked path.
#[derive(Debug, Clone, Default)]
pub struct TrackedSet {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
}

impl TrackedSet {
    pub fn new(files: HashSet<PathBuf>) -> Self {
        let mut dirs = HashSet::new();
        for file in &files {
            for ancestor in file.ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() || !dirs.insert(ancestor.to_path_buf()) {
                    break;
                }
            }
        }
        Self { files, dirs }
    }

    /// True if `rel` itself is a tracked entry.
    pub fn is_tracked(&self, rel: &Path) -> bool {
        self.files.contains(rel)
    }

    /// True if `rel` is a directory holding tracked paths, or is itself
    /// tracked (a submodule gitlink).
    pub fn contains_dir(&self, rel: &Path) -> bool {
        self.dirs.contains(rel) || self.files.contains(rel)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<PathBuf> for TrackedSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
