// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL detection over plain text.

use core::ops::Range;

use linkify::{LinkFinder, LinkKind};
use url::Url;

/// A contiguous substring identified as a link, with its resolved URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkSpan {
    /// Byte range of the link text within the scanned string.
    pub range: Range<usize>,
    /// The URL the link text resolves to.
    pub url: Url,
}

/// Scan `text` for URLs.
///
/// Spans are reported in ascending order and never overlap, since the scan
/// is a single left-to-right pass. Matching requires a scheme
/// (`https://example.com` matches, a bare `example.com` does not), and a
/// match that fails to parse as a URL is dropped rather than reported.
///
/// Empty text and text without URLs both yield an empty vector.
pub fn detect(text: &str) -> Vec<LinkSpan> {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
        .links(text)
        .filter_map(|link| {
            let url = Url::parse(link.as_str()).ok()?;
            Some(LinkSpan {
                range: link.start()..link.end(),
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::detect;

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(detect("").is_empty());
    }

    #[test]
    fn plain_text_yields_no_spans() {
        assert!(detect("no links here").is_empty());
    }

    #[test]
    fn single_url_bounds_are_exact() {
        let text = "Tap here: https://www.example.com";
        let spans = detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range.clone()], "https://www.example.com");
        assert_eq!(spans[0].url.as_str(), "https://www.example.com/");
    }

    #[test]
    fn schemeless_candidates_are_not_spans() {
        assert!(detect("see example. for details").is_empty());
        assert!(detect("www.example.com").is_empty());
    }

    #[test]
    fn two_urls_in_text_order() {
        let text = "a https://one.example b https://two.example c";
        let spans = detect(text);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].range.end <= spans[1].range.start, "spans overlap");
        assert_eq!(spans[0].url.host_str(), Some("one.example"));
        assert_eq!(spans[1].url.host_str(), Some("two.example"));
    }

    #[test]
    fn trailing_sentence_punctuation_is_excluded() {
        let text = "read https://example.com/docs.";
        let spans = detect(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].range.clone()], "https://example.com/docs");
    }
}
