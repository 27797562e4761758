//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directories at this depth are listed but not descended into. Root is depth 0.
    pub max_depth: Option<usize>,
    /// Names (exact or glob) to skip along with their subtrees
    pub ignore_patterns: Vec<String>,
    /// List directories before files instead of interleaving by name
    pub dirs_first: bool,
}
