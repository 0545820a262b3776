// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction of styled text from detected link spans.

use spanned_text::{SpannedText, TextRange};

use crate::detect::{LinkSpan, detect};
use crate::style::{Brush, LinkStyle};

/// Text paired with a [`LinkStyle`] for every character.
///
/// Produced by [`format_text`]; the attribute runs are contiguous and
/// non-overlapping, so the style under a byte offset is a single lookup.
pub type RichText<B> = SpannedText<String, LinkStyle<B>>;

/// Detects links in `text` and styles it for display.
///
/// The whole text receives `base`; every detected link has its brush
/// overwritten with `link` and its URL attached. Absent text is treated as
/// empty and yields an empty value.
pub fn format_text<B: Brush>(text: Option<&str>, base: B, link: B) -> RichText<B> {
    let text = text.unwrap_or_default();
    let spans = detect(text);
    build(text, &spans, base, link)
}

/// Styles `text` using already-detected spans.
///
/// Spans must be detector-produced: ascending, non-overlapping, and within
/// bounds. A span that fails range validation is skipped rather than
/// surfaced; the remaining spans still apply.
pub fn build<B: Brush>(text: &str, spans: &[LinkSpan], base: B, link: B) -> RichText<B> {
    let mut rich = RichText::new(text.to_owned(), LinkStyle::plain(base));
    for span in spans {
        let Ok(range) = TextRange::new(rich.text(), span.range.clone()) else {
            continue;
        };
        let style = LinkStyle::linked(link.clone(), span.url.clone());
        rich.apply(range, |_| style.clone());
    }
    rich
}

#[cfg(test)]
mod tests {
    use super::{RichText, format_text};
    use crate::testing::{BLUE, ColorBrush, WHITE};

    fn assert_plain_everywhere(rich: &RichText<ColorBrush>, brush: ColorBrush) {
        for (range, style) in rich.runs() {
            assert_eq!(style.brush, brush, "run {range:?} should use the base brush");
            assert!(style.link.is_none(), "run {range:?} should not be a link");
        }
    }

    #[test]
    fn absent_text_yields_empty_value() {
        let rich = format_text(None, WHITE, BLUE);
        assert!(rich.is_empty());
        assert_eq!(rich.runs_len(), 0);

        let rich = format_text(Some(""), WHITE, BLUE);
        assert!(rich.is_empty());
        assert_eq!(rich.runs_len(), 0);
    }

    #[test]
    fn text_without_links_is_all_base() {
        let rich = format_text(Some("no links here"), WHITE, BLUE);
        assert_eq!(rich.runs_len(), 1);
        assert_plain_everywhere(&rich, WHITE);
    }

    #[test]
    fn link_run_bounds_the_url_exactly() {
        let text = "Tap here: https://www.example.com";
        let rich = format_text(Some(text), WHITE, BLUE);

        // "Tap here: " is base-styled, the URL substring is the link run.
        assert_eq!(rich.runs_len(), 2);
        let runs: Vec<_> = rich.runs().collect();
        assert_eq!(*runs[0].0, 0..10);
        assert_eq!(runs[0].1.brush, WHITE);
        assert!(runs[0].1.link.is_none());
        assert_eq!(*runs[1].0, 10..text.len());
        assert_eq!(runs[1].1.brush, BLUE);
        assert_eq!(
            runs[1].1.link.as_ref().map(|url| url.as_str()),
            Some("https://www.example.com/")
        );
    }

    #[test]
    fn link_attribute_matches_spans_at_every_index() {
        let text = "a https://one.example b https://two.example c";
        let spans = crate::detect(text);
        let rich = format_text(Some(text), WHITE, BLUE);
        for index in 0..text.len() {
            let in_span = spans.iter().any(|span| span.range.contains(&index));
            let style = rich.attribute_at(index).unwrap();
            assert_eq!(
                style.is_link(),
                in_span,
                "index {index} disagrees with detection"
            );
            assert_eq!(style.brush, if in_span { BLUE } else { WHITE });
        }
    }

    #[test]
    fn two_links_keep_their_own_urls() {
        let text = "a https://one.example b https://two.example c";
        let rich = format_text(Some(text), WHITE, BLUE);
        let urls: Vec<_> = rich
            .runs()
            .filter_map(|(_, style)| style.link.as_ref())
            .map(|url| url.host_str().unwrap().to_owned())
            .collect();
        assert_eq!(urls, ["one.example", "two.example"]);
    }
}
