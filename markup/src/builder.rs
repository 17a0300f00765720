//! Classification of the two most recent clips and snippet assembly.

use clipmark_clipboard::{ClipboardError, HistorySource};

use crate::template::{MARKUP_TEMPLATE, render};

/// Prefix a clip must carry (after trimming, case-insensitively) to be
/// taken as the URL.
const URL_PREFIX: &str = "https://";

/// The two clips after classification, with the derived reference code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPair {
    pub url: String,
    pub summary: String,
    pub short_code: String,
}

impl ClassifiedPair {
    /// Classify two clips and derive the reference code from the URL.
    ///
    /// `None` when no snippet can be built from the pair: no URL, no
    /// summary, or a URL without a final path segment.
    pub fn from_clips(a: &str, b: &str) -> Option<Self> {
        let (url, summary) = classify(a, b)?;
        if summary.is_empty() {
            log::debug!("the clip classified as the summary is empty, unable to convert");
            return None;
        }
        let Some(short_code) = extract_short_code(&url) else {
            log::debug!("url {url:?} does not end in a reference code");
            return None;
        };
        let short_code = short_code.to_owned();
        Some(Self {
            url,
            summary,
            short_code,
        })
    }
}

/// Decide which clip is the URL and which is the summary.
///
/// Exactly one of the two must start with `https://`. Two URLs leave
/// nothing to use as the summary, so that pair is rejected just like a
/// pair with no URL at all.
pub fn classify(a: &str, b: &str) -> Option<(String, String)> {
    match (is_url(a), is_url(b)) {
        (true, false) => Some((a.to_owned(), b.to_owned())),
        (false, true) => Some((b.to_owned(), a.to_owned())),
        (true, true) => {
            log::debug!("both clips look like URLs, nothing to use as the summary");
            None
        }
        (false, false) => {
            log::debug!("neither clip starts with {URL_PREFIX}, unable to convert");
            None
        }
    }
}

fn is_url(clip: &str) -> bool {
    clip.trim()
        .as_bytes()
        .get(..URL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URL_PREFIX.as_bytes()))
}

/// The reference code of a URL: whatever follows the last `/`.
///
/// A URL ending in `/` has no code and yields `None`.
pub fn extract_short_code(url: &str) -> Option<&str> {
    url.trim().split('/').next_back().filter(|code| !code.is_empty())
}

/// Build the review snippet from the most recent clipboard entries.
///
/// Only the first two entries are considered; older ones are ignored.
/// Every "cannot proceed" condition (fewer than two clips, no URL, no
/// summary, no reference code) yields an empty string rather than an
/// error, and the function has no side effects beyond its return value.
pub fn build_markup(stream: &str, recent_clips: &[String]) -> String {
    let [a, b, ..] = recent_clips else {
        log::debug!(
            "not enough clips ({}), need a URL and a summary",
            recent_clips.len()
        );
        return String::new();
    };

    let Some(pair) = ClassifiedPair::from_clips(a, b) else {
        return String::new();
    };

    let markup = render(
        MARKUP_TEMPLATE,
        stream,
        &pair.url,
        &pair.short_code,
        &pair.summary,
    );
    log::debug!("rendered markup: {markup}");
    markup
}

/// Fetch the clipboard history and build the snippet from it.
///
/// Soft failures come back as `Ok` with an empty string; only a failed
/// history fetch is an error.
pub async fn convert(stream: &str, source: &dyn HistorySource) -> Result<String, ClipboardError> {
    log::debug!("building markup for stream {stream:?}, template: {MARKUP_TEMPLATE}");
    let clips = source.fetch_history().await?;
    log::debug!("got {} clips", clips.len());
    Ok(build_markup(stream, &clips))
}

#[cfg(test)]
mod tests {
    use clipmark_clipboard::mock::{FailingHistory, StaticHistory};

    use super::*;

    const ISSUE_URL: &str = "https://example.com/issues/XYZ-42";
    const SUMMARY: &str = "Fixed the race condition";
    const EXPECTED: &str =
        "[proj1] [[XYZ-42](https://example.com/issues/XYZ-42)] - Fixed the race condition";

    fn clips(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn classifies_url_in_first_position() {
        let (url, summary) = classify(ISSUE_URL, SUMMARY).expect("one URL, one summary");
        assert_eq!(url, ISSUE_URL);
        assert_eq!(summary, SUMMARY);
    }

    #[test]
    fn classifies_url_in_second_position() {
        let (url, summary) = classify(SUMMARY, ISSUE_URL).expect("one URL, one summary");
        assert_eq!(url, ISSUE_URL);
        assert_eq!(summary, SUMMARY);
    }

    #[test]
    fn classification_ignores_case_and_surrounding_whitespace() {
        let (url, summary) =
            classify("  HTTPS://Example.com/ABC-1  ", "did a thing").expect("prefix match");
        assert_eq!(url, "  HTTPS://Example.com/ABC-1  ");
        assert_eq!(summary, "did a thing");
    }

    #[test]
    fn rejects_pair_without_url() {
        assert_eq!(classify("hello", "world"), None);
    }

    #[test]
    fn rejects_pair_of_two_urls() {
        assert_eq!(classify(ISSUE_URL, "https://example.com/other/AAA-1"), None);
    }

    #[test]
    fn http_prefix_is_not_enough() {
        assert_eq!(classify("http://example.com/ABC-1", "summary"), None);
    }

    #[test]
    fn short_code_is_the_last_path_segment() {
        assert_eq!(
            extract_short_code("https://example.com/app/issues/ABC-123"),
            Some("ABC-123")
        );
    }

    #[test]
    fn trailing_slash_means_no_short_code() {
        assert_eq!(extract_short_code("https://example.com/"), None);
    }

    #[test]
    fn short_code_extraction_trims_the_url() {
        assert_eq!(
            extract_short_code("  https://example.com/ABC-9 "),
            Some("ABC-9")
        );
    }

    #[test]
    fn builds_markup_with_url_first() {
        assert_eq!(build_markup("proj1", &clips(&[ISSUE_URL, SUMMARY])), EXPECTED);
    }

    #[test]
    fn builds_markup_with_url_second() {
        assert_eq!(build_markup("proj1", &clips(&[SUMMARY, ISSUE_URL])), EXPECTED);
    }

    #[test]
    fn ignores_entries_older_than_the_first_two() {
        let history = clips(&[ISSUE_URL, SUMMARY, "https://example.com/stale/ZZZ-9"]);
        assert_eq!(build_markup("proj1", &history), EXPECTED);
    }

    #[test]
    fn empty_when_no_url_present() {
        assert_eq!(build_markup("proj1", &clips(&["hello", "world"])), "");
    }

    #[test]
    fn empty_when_history_is_too_short() {
        assert_eq!(build_markup("proj1", &clips(&["https://x.com/AAA"])), "");
        assert_eq!(build_markup("proj1", &[]), "");
    }

    #[test]
    fn empty_when_summary_clip_is_empty() {
        assert_eq!(build_markup("proj1", &clips(&[ISSUE_URL, ""])), "");
    }

    #[test]
    fn empty_when_url_has_no_short_code() {
        assert_eq!(
            build_markup("proj1", &clips(&["https://example.com/", SUMMARY])),
            ""
        );
    }

    #[test]
    fn build_markup_is_idempotent() {
        let history = clips(&[ISSUE_URL, SUMMARY]);
        let first = build_markup("proj1", &history);
        let second = build_markup("proj1", &history);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn convert_builds_from_the_fetched_history() {
        let source = StaticHistory::new([ISSUE_URL, SUMMARY]);
        let markup = convert("proj1", &source).await.expect("fetch succeeds");
        assert_eq!(markup, EXPECTED);
    }

    #[tokio::test]
    async fn convert_soft_fails_to_an_empty_string() {
        let source = StaticHistory::new(["just one clip"]);
        let markup = convert("proj1", &source).await.expect("fetch succeeds");
        assert_eq!(markup, "");
    }

    #[tokio::test]
    async fn convert_propagates_a_failed_fetch() {
        let err = convert("proj1", &FailingHistory)
            .await
            .expect_err("fetch fails");
        assert!(matches!(err, ClipboardError::HistoryUnavailable(_)));
    }
}
