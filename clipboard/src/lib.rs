//! Clipboard access for clipmark.
//!
//! This crate exposes the two seams the converter works against: a
//! [`HistorySource`] that yields the recent text entries from the system
//! clipboard history, and a [`ClipboardSink`] that receives the rendered
//! result. The system-backed implementations sit behind the same types on
//! every platform; the clipboard history API itself only exists on Windows,
//! so [`SystemHistory`] reports [`ClipboardError::Unsupported`] elsewhere.

mod error;
mod history;
pub mod mock;
mod sink;

pub use error::ClipboardError;
pub use history::{HistorySource, SystemHistory};
pub use sink::{ClipboardSink, SystemClipboard};
