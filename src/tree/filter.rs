//! File filtering for tree walking

use std::path::Path;

use crate::git::TrackedSet;

/// Git-tracked filter applied by the walker.
/// Newtype around `TrackedSet` so the walker only sees walk-relative queries.
pub struct FileFilter(TrackedSet);

impl FileFilter {
    pub fn new(tracked: TrackedSet) -> Self {
        Self(tracked)
    }

    /// Check if an entry at `rel` (relative to the walk root) should be shown.
    pub fn is_included(&self, rel: &Path, is_dir: bool) -> bool {
        if is_dir {
            self.0.contains_dir(rel)
        } else {
            self.0.is_tracked(rel)
        }
    }

    /// Check if a directory is tracked as an entry of its own (a submodule).
    pub fn is_tracked_entry(&self, rel: &Path) -> bool {
        self.0.is_tracked(rel)
    }
}
