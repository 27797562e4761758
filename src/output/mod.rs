//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors, prefixes and size formatting
//! - `tree` - Text formatter, plain or colored
//! - `json` - JSON output

mod config;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use tree::TreeFormatter;
pub use utils::{TRUNCATED_MARKER, format_size};
