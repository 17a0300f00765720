use thiserror::Error;

/// Failures of the system clipboard collaborators.
///
/// Per-item read failures inside the history are not represented here;
/// the source logs and skips those. These variants are the faults that
/// abort a run.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The history fetch itself failed.
    #[error("clipboard history unavailable: {0}")]
    HistoryUnavailable(String),
    /// The platform denied access to the clipboard history.
    #[error("access to the clipboard history was denied")]
    AccessDenied,
    /// Clipboard history is turned off in the system settings.
    #[error("clipboard history is disabled on this system")]
    HistoryDisabled,
    /// This platform has no clipboard history API.
    #[error("clipboard history is not supported on this platform")]
    Unsupported,
    /// Writing the result to the clipboard failed.
    #[error("failed to write to the clipboard")]
    Write(#[from] arboard::Error),
}
