//! Writing the result back to the clipboard.

use arboard::Clipboard;

use crate::error::ClipboardError;

/// Destination for the rendered markup.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `value`.
    fn set_text(&mut self, value: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, written through `arboard`.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, value: &str) -> Result<(), ClipboardError> {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(value)?;
        log::debug!("clipboard updated ({} bytes)", value.len());
        Ok(())
    }
}
