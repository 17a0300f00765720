//! `clipmark` — build a review snippet from the two most recent clipboard
//! entries and put it back on the clipboard.

mod cli;
mod output;
mod timing;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use clipmark_clipboard::{ClipboardSink as _, SystemClipboard, SystemHistory};
use tracing::instrument;

use crate::cli::Cli;
use crate::output::Output;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    timing::init_tracing(cli.verbose, cli.timing);
    run(cli).await
}

/// Fetch the history, build the snippet, place it on the clipboard.
///
/// The clipboard is written exactly once, with an empty string when the
/// history held nothing usable. Only a failed fetch or a failed write
/// escapes as an error and turns into a non-zero exit.
#[instrument(skip_all, name = "convert", fields(stream = %cli.stream))]
async fn run(cli: Cli) -> Result<()> {
    let source = SystemHistory::new();
    let markup = clipmark_markup::convert(&cli.stream, &source)
        .await
        .context("failed to read the clipboard history")?;

    SystemClipboard::new()
        .set_text(&markup)
        .context("failed to write the result to the clipboard")?;

    let out = Output::new();
    if markup.is_empty() {
        out.warning("nothing usable in the last two clips; an empty string was copied");
    } else {
        out.success("markup copied to the clipboard");
        out.dim(&markup);
    }
    Ok(())
}
