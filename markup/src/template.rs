//! The snippet template and its placeholder substitution.

/// Review snippet template.
///
/// Placeholders are literal tokens; [`render`] replaces every occurrence
/// of each one.
pub const MARKUP_TEMPLATE: &str = "[$stream] [[$shortCode]($url)] - $summary";

const STREAM: &str = "$stream";
const SHORT_CODE: &str = "$shortCode";
const URL: &str = "$url";
const SUMMARY: &str = "$summary";

/// Substitute all placeholder occurrences in `template`.
///
/// The tokens are disjoint literals, none a prefix of another, so the
/// substitution order does not change the result for ordinary values.
pub fn render(template: &str, stream: &str, url: &str, short_code: &str, summary: &str) -> String {
    template
        .replace(STREAM, stream)
        .replace(SHORT_CODE, short_code)
        .replace(URL, url)
        .replace(SUMMARY, summary)
}
