//! Directory tree walking logic
//!
//! `TreeWalker` builds the filtered tree in memory, then `compact` can
//! rewrite it before it is handed to a formatter.

mod compact;
mod config;
mod filter;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use compact::compact;
pub use config::WalkerConfig;
pub use filter::FileFilter;
pub use node::{DirStatus, TreeNode};
pub use utils::{glob_match, validate_root};
pub use walker::TreeWalker;
