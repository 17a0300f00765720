//! Reading the system clipboard history.

use async_trait::async_trait;

use crate::error::ClipboardError;

/// Source of recent clipboard text entries, most recent first.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch the readable text entries from the clipboard history.
    ///
    /// Entries that hold no text, or whose text is empty, are excluded.
    /// An entry whose text cannot be read is logged and skipped; it never
    /// aborts the fetch. Only a failure of the history call itself is an
    /// error.
    async fn fetch_history(&self) -> Result<Vec<String>, ClipboardError>;
}

/// The operating system's clipboard history.
///
/// Backed by the Windows clipboard history API. Other platforms have no
/// history to read, so fetching there yields [`ClipboardError::Unsupported`].
#[derive(Debug, Default)]
pub struct SystemHistory;

impl SystemHistory {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(windows)]
#[async_trait]
impl HistorySource for SystemHistory {
    async fn fetch_history(&self) -> Result<Vec<String>, ClipboardError> {
        // The platform calls below block on their async operations, so
        // keep them off the runtime's worker threads.
        tokio::task::spawn_blocking(windows_history::read_text_entries)
            .await
            .map_err(|e| ClipboardError::HistoryUnavailable(e.to_string()))?
    }
}

#[cfg(not(windows))]
#[async_trait]
impl HistorySource for SystemHistory {
    async fn fetch_history(&self) -> Result<Vec<String>, ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

#[cfg(windows)]
mod windows_history {
    use windows::ApplicationModel::DataTransfer::{
        Clipboard, ClipboardHistoryItem, ClipboardHistoryItemsResultStatus, StandardDataFormats,
    };
    use windows::Foundation::Collections::IVectorView;

    use crate::error::ClipboardError;

    fn unavailable(e: windows::core::Error) -> ClipboardError {
        ClipboardError::HistoryUnavailable(e.message())
    }

    /// Read every history entry that can be retrieved as non-empty text.
    pub(super) fn read_text_entries() -> Result<Vec<String>, ClipboardError> {
        let result = Clipboard::GetHistoryItemsAsync()
            .and_then(|op| op.get())
            .map_err(unavailable)?;

        let status = result.Status().map_err(unavailable)?;
        if status == ClipboardHistoryItemsResultStatus::AccessDenied {
            return Err(ClipboardError::AccessDenied);
        }
        if status == ClipboardHistoryItemsResultStatus::ClipboardHistoryDisabled {
            return Err(ClipboardError::HistoryDisabled);
        }
        if status != ClipboardHistoryItemsResultStatus::Success {
            return Err(ClipboardError::HistoryUnavailable(format!(
                "unexpected history status {status:?}"
            )));
        }

        let items = result.Items().map_err(unavailable)?;
        let count = items.Size().map_err(unavailable)?;

        let mut entries = Vec::with_capacity(count as usize);
        for index in 0..count {
            match item_text(&items, index) {
                Ok(Some(text)) if !text.is_empty() => entries.push(text),
                Ok(_) => log::debug!("history item #{index} holds no text, skipping"),
                Err(e) => {
                    log::warn!("could not read history item #{index} of {count} as text: {e}");
                }
            }
        }

        log::debug!("clipboard history fetch done, {} text entries", entries.len());
        Ok(entries)
    }

    /// Text of one history item, or `None` when the item is not textual.
    fn item_text(
        items: &IVectorView<ClipboardHistoryItem>,
        index: u32,
    ) -> windows::core::Result<Option<String>> {
        let content = items.GetAt(index)?.Content()?;
        if !content.Contains(&StandardDataFormats::Text()?)? {
            return Ok(None);
        }
        let text = content.GetTextAsync()?.get()?;
        Ok(Some(text.to_string()))
    }
}
