//! Copying calculator results to the system clipboard.

use super::readout::Readout;
use arboard::Clipboard;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Put the full-precision value of `readout` on the clipboard.
pub fn copy_result(readout: &Readout) -> Result<(), ClipboardError> {
    let text = readout.text_for_clipboard();
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;

    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::Write)?;

    info!(text, "Copied result to clipboard");
    Ok(())
}
