//! Shared helpers for line layout and size formatting

/// Marker appended to directories whose contents were cut off by the depth limit.
pub const TRUNCATED_MARKER: &str = "[...]";

/// Connector drawn before an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Format a size in bytes using binary multiples.
///
/// Sizes under 1 KB are exact (`"0B"`, `"512B"`); larger sizes get one
/// decimal (`"1.0KB"`, `"2.5MB"`).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

    if bytes < 1024 {
        return format!("{}B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    // Step up whenever the one-decimal rendering would read 1024.0
    while (size * 10.0).round() / 10.0 >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", size, UNITS[unit])
}
