//! tree-print - a git-aware directory tree printer

pub mod clipboard;
pub mod error;
pub mod git;
pub mod output;
pub mod renderer;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use clipboard::copy_to_clipboard;
pub use error::{ClipboardError, GitError, TreeError};
pub use git::{GitIndex, TrackedFiles, TrackedSet};
pub use output::{OutputConfig, TreeFormatter, format_size, print_json, write_json};
pub use renderer::{RenderOptions, TreeRenderer};
pub use tree::{DirStatus, TreeNode, TreeWalker, WalkerConfig};
