//! In-memory clipboard collaborators for testing.

use async_trait::async_trait;

use crate::error::ClipboardError;
use crate::history::HistorySource;
use crate::sink::ClipboardSink;

/// History source returning a fixed set of clips.
#[derive(Debug, Clone, Default)]
pub struct StaticHistory {
    clips: Vec<String>,
}

impl StaticHistory {
    /// Build a source over the given clips, most recent first.
    pub fn new<I, S>(clips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clips: clips.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl HistorySource for StaticHistory {
    async fn fetch_history(&self) -> Result<Vec<String>, ClipboardError> {
        Ok(self.clips.clone())
    }
}

/// History source whose fetch always fails.
#[derive(Debug, Default)]
pub struct FailingHistory;

#[async_trait]
impl HistorySource for FailingHistory {
    async fn fetch_history(&self) -> Result<Vec<String>, ClipboardError> {
        Err(ClipboardError::HistoryUnavailable(
            "mock history source is down".to_owned(),
        ))
    }
}

/// Sink that records every write instead of touching the clipboard.
#[derive(Debug, Default)]
pub struct CaptureSink {
    /// Every value passed to `set_text`, in call order.
    pub writes: Vec<String>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for CaptureSink {
    fn set_text(&mut self, value: &str) -> Result<(), ClipboardError> {
        self.writes.push(value.to_owned());
        Ok(())
    }
}
