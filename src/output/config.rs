//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Color directory labels. Only honored by writers that support color.
    pub use_color: bool,
    /// Append human-readable sizes to files and fully visited directories
    pub show_size: bool,
}
