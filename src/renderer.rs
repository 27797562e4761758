//! Render pipeline: validate, filter, walk, compact, format

use std::path::Path;

use crate::error::Result;
use crate::git::{GitIndex, TrackedFiles, TrackedSet};
use crate::output::{OutputConfig, TreeFormatter};
use crate::tree::{FileFilter, TreeNode, TreeWalker, WalkerConfig, compact, validate_root};

/// Everything that shapes a render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Restrict to git-tracked paths
    pub git_only: bool,
    /// Collapse single-child directory chains into one line
    pub compact: bool,
    pub show_size: bool,
    /// Color directory labels when printing
    pub color: bool,
    pub max_depth: Option<usize>,
    pub exclude: Vec<String>,
    pub dirs_first: bool,
}

impl RenderOptions {
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            max_depth: self.max_depth,
            ignore_patterns: self.exclude.clone(),
            dirs_first: self.dirs_first,
        }
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            use_color: self.color,
            show_size: self.show_size,
        }
    }
}

/// Renders a directory as a tree.
///
/// Tracked files come from the repository index by default; tests and
/// embedders can substitute their own source with `with_tracked_files`.
pub struct TreeRenderer {
    options: RenderOptions,
    tracked_files: Box<dyn TrackedFiles>,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            tracked_files: Box::new(GitIndex),
        }
    }

    pub fn with_tracked_files<T: TrackedFiles + 'static>(mut self, source: T) -> Self {
        self.tracked_files = Box::new(source);
        self
    }

    /// Build the filtered, depth-limited and optionally compacted tree.
    pub fn build(&self, root: &Path) -> Result<TreeNode> {
        validate_root(root)?;

        let mut walker = TreeWalker::new(self.options.walker_config());
        if self.options.git_only {
            let tracked = self.tracked_files.list_tracked_files(root)?;
            let tracked = TrackedSet::new(tracked);
            if tracked.is_empty() {
                tracing::warn!(root = %root.display(), "no tracked files under root");
            }
            tracing::debug!(tracked = tracked.len(), "git filter enabled");
            walker = walker.with_filter(FileFilter::new(tracked));
        }

        let tree = walker.walk(root)?;
        Ok(if self.options.compact {
            compact(tree)
        } else {
            tree
        })
    }

    /// Render `root` to plain text lines.
    pub fn render(&self, root: &Path) -> Result<Vec<String>> {
        let tree = self.build(root)?;
        Ok(self.formatter().lines(&tree))
    }

    pub fn formatter(&self) -> TreeFormatter {
        TreeFormatter::new(self.options.output_config())
    }
}
