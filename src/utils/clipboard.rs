//! System clipboard access.

use arboard::Clipboard;
use tracing::error;

/// Read text from the system clipboard.
///
/// Returns `None` when the clipboard is unavailable, holds no text, or the
/// text is empty. Failures are logged, never surfaced to the user.
pub fn read_text() -> Option<String> {
    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                error!("Failed to read clipboard: {}", e);
                None
            }
        },
        Err(e) => {
            error!("Failed to access clipboard: {}", e);
            None
        }
    }
}
