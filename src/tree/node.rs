//! In-memory tree built by the walker

use std::path::{Path, PathBuf};

use serde::Serialize;

/// How much of a directory's subtree was visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DirStatus {
    /// All visible children were listed.
    Complete,
    /// The depth limit stopped descent into a non-empty directory.
    Truncated,
    /// The directory could not be listed.
    Unreadable { reason: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size: u64,
    },
    Symlink {
        name: String,
        path: PathBuf,
        target: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
        /// Sum of contained file sizes; `None` unless the whole subtree was visited.
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        status: DirStatus,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Symlink { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Symlink { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            _ => &[],
        }
    }

    /// Bytes this node contributes to its parent's aggregate, if known.
    pub fn size(&self) -> Option<u64> {
        match self {
            TreeNode::File { size, .. } => Some(*size),
            TreeNode::Symlink { .. } => Some(0),
            TreeNode::Dir { size, .. } => *size,
        }
    }

    /// Count directories and non-directory entries below this node.
    pub fn counts(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| {
                let (d, f) = child.counts();
                if child.is_dir() {
                    (dirs + d + 1, files + f)
                } else {
                    (dirs + d, files + f + 1)
                }
            })
    }
}
