//! TreeWalker - builds the filtered tree in memory

use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::filter::FileFilter;
use super::node::{DirStatus, TreeNode};
use super::utils::{should_ignore_name, validate_root};
use crate::error::{Result, TreeError};

/// A directory entry that passed the name and tracked-file filters.
#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    /// Path relative to the walk root, used for tracked-file lookups
    rel: PathBuf,
    kind: EntryKind,
}

#[derive(Debug)]
enum EntryKind {
    Dir,
    File(u64),
    Symlink(PathBuf),
}

impl Entry {
    fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir)
    }
}

/// Walks a directory and builds a `TreeNode`.
///
/// Symlinks are listed but never followed, so the walk cannot cycle.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: Option<FileFilter>,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Walk `root`. The root label is the path as given.
    ///
    /// Fails if the root is missing, not a directory, or cannot be listed.
    /// Failures below the root are recorded in the tree instead.
    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        validate_root(root)?;

        let entries = self
            .read_entries(root, Path::new(""))
            .map_err(|source| TreeError::Io {
                path: root.to_path_buf(),
                source,
            })?;

        Ok(self.build_dir(root.display().to_string(), root.to_path_buf(), entries, 0))
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn walk_dir(&self, entry: Entry, depth: usize) -> TreeNode {
        match self.read_entries(&entry.path, &entry.rel) {
            Ok(entries) => self.build_dir(entry.name, entry.path, entries, depth),
            Err(e) => {
                tracing::debug!(path = %entry.path.display(), error = %e, "cannot list directory");
                TreeNode::Dir {
                    name: entry.name,
                    path: entry.path,
                    children: Vec::new(),
                    size: None,
                    status: DirStatus::Unreadable {
                        reason: e.kind().to_string(),
                    },
                }
            }
        }
    }

    fn build_dir(&self, name: String, path: PathBuf, entries: Vec<Entry>, depth: usize) -> TreeNode {
        // If at max depth, return the directory but don't descend
        if self.at_max_depth(depth) {
            let (size, status) = if entries.is_empty() {
                (Some(0), DirStatus::Complete)
            } else {
                (None, DirStatus::Truncated)
            };
            return TreeNode::Dir {
                name,
                path,
                children: Vec::new(),
                size,
                status,
            };
        }

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            let node = match entry.kind {
                EntryKind::File(size) => TreeNode::File {
                    name: entry.name,
                    path: entry.path,
                    size,
                },
                EntryKind::Symlink(target) => TreeNode::Symlink {
                    name: entry.name,
                    path: entry.path,
                    target,
                },
                EntryKind::Dir => {
                    let rel = entry.rel.clone();
                    let node = self.walk_dir(entry, depth + 1);
                    if self.is_pruned(&node, &rel) {
                        tracing::trace!(path = %rel.display(), "pruning directory without tracked files");
                        continue;
                    }
                    node
                }
            };
            children.push(node);
        }

        let size = children
            .iter()
            .try_fold(0u64, |total, child| child.size().map(|s| total + s));

        TreeNode::Dir {
            name,
            path,
            children,
            size,
            status: DirStatus::Complete,
        }
    }

    /// In git mode, drop directories that ended up with nothing to show.
    /// This happens when every tracked file below them is missing on disk.
    fn is_pruned(&self, node: &TreeNode, rel: &Path) -> bool {
        let Some(filter) = &self.filter else {
            return false;
        };
        matches!(
            node,
            TreeNode::Dir { children, status: DirStatus::Complete, .. } if children.is_empty()
        ) && !filter.is_tracked_entry(rel)
    }

    /// Read, filter, and sort directory entries.
    ///
    /// Entries that vanish or whose metadata cannot be read are skipped.
    fn read_entries(&self, path: &Path, rel: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(path)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            let name = dir_entry.file_name().to_string_lossy().to_string();
            if should_ignore_name(&name, &self.config.ignore_patterns) {
                tracing::trace!(name = %name, "ignored by pattern");
                continue;
            }

            let entry_path = dir_entry.path();
            let kind = match Self::entry_kind(&dir_entry) {
                Ok(kind) => kind,
                Err(e) => {
                    tracing::debug!(path = %entry_path.display(), error = %e, "skipping entry without metadata");
                    continue;
                }
            };
            let entry_rel = rel.join(&name);

            if let Some(filter) = &self.filter {
                let is_dir = matches!(kind, EntryKind::Dir);
                if !filter.is_included(&entry_rel, is_dir) {
                    continue;
                }
            }

            entries.push(Entry {
                name,
                path: entry_path,
                rel: entry_rel,
                kind,
            });
        }

        if self.config.dirs_first {
            entries.sort_by(|a, b| {
                (Reverse(a.is_dir()), &a.name).cmp(&(Reverse(b.is_dir()), &b.name))
            });
        } else {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(entries)
    }

    fn entry_kind(entry: &fs::DirEntry) -> io::Result<EntryKind> {
        let file_type = entry.file_type()?;
        if file_type.is_symlink() {
            let target = fs::read_link(entry.path())?;
            Ok(EntryKind::Symlink(target))
        } else if file_type.is_dir() {
            Ok(EntryKind::Dir)
        } else {
            Ok(EntryKind::File(entry.metadata()?.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::git::TrackedSet;
    use crate::test_utils::TestRepo;

    fn names(node: &TreeNode) -> Vec<&str> {
        node.children().iter().map(TreeNode::name).collect()
    }

    fn child<'a>(node: &'a TreeNode, name: &str) -> &'a TreeNode {
        node.children()
            .iter()
            .find(|c| c.name() == name)
            .unwrap_or_else(|| panic!("missing child {name}"))
    }

    #[test]
    fn test_sorted_interleaved() {
        let repo = TestRepo::new();
        repo.add_untracked("b.txt", "");
        repo.add_untracked("a/file.txt", "");
        repo.add_untracked("c/file.txt", "");

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(repo.path())
            .unwrap();
        assert_eq!(names(&tree), vec!["a", "b.txt", "c"]);
    }

    #[test]
    fn test_dirs_first() {
        let repo = TestRepo::new();
        repo.add_untracked("b.txt", "");
        repo.add_untracked("a.txt", "");
        repo.add_untracked("z/file.txt", "");

        let config = WalkerConfig {
            dirs_first: true,
            ..Default::default()
        };
        let tree = TreeWalker::new(config).walk(repo.path()).unwrap();
        assert_eq!(names(&tree), vec!["z", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_skips_git_dir_and_patterns() {
        let repo = TestRepo::with_git();
        repo.add_untracked("keep.rs", "");
        repo.add_untracked("debug.log", "");
        repo.add_untracked("target/out.bin", "");

        let config = WalkerConfig {
            ignore_patterns: vec!["*.log".to_string(), "target".to_string()],
            ..Default::default()
        };
        let tree = TreeWalker::new(config).walk(repo.path()).unwrap();
        assert_eq!(names(&tree), vec!["keep.rs"]);
    }

    #[test]
    fn test_depth_limit_marks_truncation() {
        let repo = TestRepo::new();
        repo.add_untracked("top.rs", "");
        repo.add_untracked("level1/mid.rs", "");
        repo.add_untracked("level1/level2/deep.rs", "");
        repo.add_dir("empty");

        let config = WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        let tree = TreeWalker::new(config).walk(repo.path()).unwrap();

        let level1 = child(&tree, "level1");
        assert!(level1.children().is_empty());
        assert!(matches!(level1, TreeNode::Dir { status: DirStatus::Truncated, .. }));

        let empty = child(&tree, "empty");
        assert!(matches!(empty, TreeNode::Dir { status: DirStatus::Complete, .. }));
    }

    #[test]
    fn test_depth_zero_lists_only_root() {
        let repo = TestRepo::new();
        repo.add_untracked("file.rs", "");

        let config = WalkerConfig {
            max_depth: Some(0),
            ..Default::default()
        };
        let tree = TreeWalker::new(config).walk(repo.path()).unwrap();
        assert!(tree.children().is_empty());
        assert!(matches!(tree, TreeNode::Dir { status: DirStatus::Truncated, .. }));
    }

    #[test]
    fn test_aggregate_sizes() {
        let repo = TestRepo::new();
        repo.add_untracked("a.txt", &"x".repeat(10));
        repo.add_untracked("sub/b.txt", &"x".repeat(20));
        repo.add_untracked("sub/inner/c.txt", &"x".repeat(30));

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(repo.path())
            .unwrap();
        assert_eq!(tree.size(), Some(60));
        assert_eq!(child(&tree, "sub").size(), Some(50));
        assert_eq!(child(&tree, "a.txt").size(), Some(10));
    }

    #[test]
    fn test_truncated_subtree_has_no_aggregate() {
        let repo = TestRepo::new();
        repo.add_untracked("a.txt", "abc");
        repo.add_untracked("sub/inner/c.txt", "abc");

        let config = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        let tree = TreeWalker::new(config).walk(repo.path()).unwrap();
        assert_eq!(child(&tree, "a.txt").size(), Some(3));
        assert_eq!(child(&tree, "sub").size(), None);
        assert_eq!(tree.size(), None);
    }

    #[test]
    fn test_tracked_filter_prunes() {
        let repo = TestRepo::new();
        repo.add_untracked("tracked.rs", "");
        repo.add_untracked("untracked.rs", "");
        repo.add_untracked("src/lib.rs", "");
        repo.add_untracked("build/out.o", "");
        // Tracked in the index but deleted from disk
        repo.add_dir("gone");

        let tracked: HashSet<PathBuf> = ["tracked.rs", "src/lib.rs", "gone/deleted.rs"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let tree = TreeWalker::new(WalkerConfig::default())
            .with_filter(FileFilter::new(TrackedSet::new(tracked)))
            .walk(repo.path())
            .unwrap();

        assert_eq!(names(&tree), vec!["src", "tracked.rs"]);
        assert_eq!(names(child(&tree, "src")), vec!["lib.rs"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks_not_followed() {
        use std::os::unix::fs::symlink;

        let repo = TestRepo::new();
        repo.add_untracked("sub/file.rs", "");
        symlink("..", repo.path().join("sub").join("parent")).unwrap();

        let tree = TreeWalker::new(WalkerConfig::default())
            .walk(repo.path())
            .unwrap();
        let sub = child(&tree, "sub");
        match child(sub, "parent") {
            TreeNode::Symlink { target, .. } => assert_eq!(target, Path::new("..")),
            other => panic!("expected symlink, got {other:?}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_subdirectory_is_inline() {
        use std::os::unix::fs::PermissionsExt;

        let repo = TestRepo::new();
        repo.add_untracked("readable/file.rs", "");
        let locked = repo.add_dir("locked");
        repo.add_untracked("locked/hidden.rs", "");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let readable_anyway = fs::read_dir(&locked).is_ok();
        let result = TreeWalker::new(WalkerConfig::default()).walk(repo.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let tree = result.unwrap();
        assert_eq!(names(child(&tree, "readable")), vec!["file.rs"]);
        if readable_anyway {
            // Running with privileges that bypass permission bits
            return;
        }
        assert!(matches!(
            child(&tree, "locked"),
            TreeNode::Dir { status: DirStatus::Unreadable { .. }, .. }
        ));
        assert_eq!(tree.size(), None);
    }

    #[test]
    fn test_root_errors() {
        let repo = TestRepo::new();
        let file = repo.add_untracked("file.txt", "");
        let walker = TreeWalker::new(WalkerConfig::default());

        assert!(matches!(
            walker.walk(&repo.path().join("nope")),
            Err(TreeError::PathNotFound(_))
        ));
        assert!(matches!(walker.walk(&file), Err(TreeError::NotADirectory(_))));
    }
}
