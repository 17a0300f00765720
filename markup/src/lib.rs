//! Building a review snippet from clipboard history.
//!
//! The converter takes the two most recent text entries from the clipboard
//! history, decides which one is the URL and which one is the free-text
//! summary, pulls the reference code out of the URL's last path segment,
//! and renders the three pieces into the snippet template. Anything that
//! cannot be turned into a snippet degrades to an empty string rather than
//! an error; only a failed history fetch surfaces as a fault.

mod builder;
mod template;

pub use builder::{ClassifiedPair, build_markup, classify, convert, extract_short_code};
pub use template::{MARKUP_TEMPLATE, render};
