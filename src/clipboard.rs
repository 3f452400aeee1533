//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Put a rendered table on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    tracing::debug!(bytes = text.len(), "Copied text to clipboard");
    Ok(())
}
