//! System clipboard export

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Copy `text` to the system clipboard.
///
/// On X11 and Wayland the contents outlive this process only if a clipboard
/// manager takes them over.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    tracing::debug!(bytes = text.len(), "copied tree to clipboard");
    Ok(())
}
