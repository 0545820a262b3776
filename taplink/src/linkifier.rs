// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use url::Url;

use crate::builder::RichText;
use crate::hit::resolve_link;
use crate::layout::{LayoutParams, Point};
use crate::metrics::TextMetrics;
use crate::open::{SystemOpener, UrlOpener};
use crate::style::Brush;

type LinkHandler = Box<dyn Fn(&Url) + Send + Sync>;

/// Formats label text with tappable links and dispatches taps on them.
///
/// This is the one configuration point for the pipeline: it carries the two
/// brushes, formats text on demand, and owns the decision of what a resolved
/// tap does. With a handler installed the handler is invoked; without one,
/// the URL is handed to the [`UrlOpener`] (the system opener by default).
///
/// # Examples
///
/// ```
/// use taplink::{FixedMetrics, LayoutParams, Linkifier, Point};
///
/// let linkifier = Linkifier::new("blue")
///     .with_text_brush("white")
///     .with_handler(|url| println!("tapped {url}"));
/// let rich = linkifier.format_text(Some("see https://example.com"));
///
/// let metrics = FixedMetrics::new(8.0, 16.0);
/// let params = LayoutParams::new(400.0, 16.0);
/// let hit = linkifier.handle_tap(&rich, &params, &metrics, Point::new(50.0, 8.0));
/// assert!(hit.is_some());
/// ```
pub struct Linkifier<B: Brush> {
    text_brush: B,
    link_brush: B,
    handler: Option<LinkHandler>,
    opener: Box<dyn UrlOpener + Send + Sync>,
}

impl<B: Brush> Linkifier<B> {
    /// Creates a linkifier rendering links with `link_brush`.
    ///
    /// The rest of the text uses the brush's default value; use
    /// [`with_text_brush`](Self::with_text_brush) to override it.
    pub fn new(link_brush: B) -> Self {
        Self {
            text_brush: B::default(),
            link_brush,
            handler: None,
            opener: Box::new(SystemOpener),
        }
    }

    /// Builder-style method for setting the brush for non-link text.
    #[must_use]
    pub fn with_text_brush(mut self, brush: B) -> Self {
        self.text_brush = brush;
        self
    }

    /// Builder-style method for installing a tap handler.
    ///
    /// The handler replaces the default open-the-URL behaviour.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Fn(&Url) + Send + Sync + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Builder-style method for replacing the URL opener used when no
    /// handler is installed.
    #[must_use]
    pub fn with_opener(mut self, opener: impl UrlOpener + Send + Sync + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Returns the brush used for non-link text.
    pub fn text_brush(&self) -> &B {
        &self.text_brush
    }

    /// Returns the brush used for links.
    pub fn link_brush(&self) -> &B {
        &self.link_brush
    }

    /// Detects links in `text` and styles it with this linkifier's brushes.
    pub fn format_text(&self, text: Option<&str>) -> RichText<B> {
        crate::format_text(text, self.text_brush.clone(), self.link_brush.clone())
    }

    /// Dispatches a tap at `point` over text rendered with `params`.
    ///
    /// When the point resolves to a link, the handler (or the opener) is
    /// invoked with the URL and the URL is returned. When it does not, no
    /// action is taken. Each call is an independent dispatch; rapid repeated
    /// taps each invoke the handler again.
    pub fn handle_tap<'a>(
        &self,
        rich: &'a RichText<B>,
        params: &LayoutParams,
        metrics: &impl TextMetrics,
        point: Point,
    ) -> Option<&'a Url> {
        let url = resolve_link(rich, params, metrics, point)?;
        match &self.handler {
            Some(handler) => handler(url),
            None => self.opener.open(url),
        }
        Some(url)
    }
}

impl<B: Brush> fmt::Debug for Linkifier<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linkifier")
            .field("text_brush", &self.text_brush)
            .field("link_brush", &self.link_brush)
            .field("handler", &self.handler.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use url::Url;

    use super::Linkifier;
    use crate::layout::{LayoutParams, Point};
    use crate::open::UrlOpener;
    use crate::testing::{BLUE, METRICS, WHITE};

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &Url) {
            self.opened.lock().unwrap().push(url.as_str().to_owned());
        }
    }

    const TEXT: &str = "Tap here: https://www.example.com";

    #[test]
    fn handler_receives_resolved_url() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let linkifier = Linkifier::new(BLUE)
            .with_text_brush(WHITE)
            .with_handler(move |url: &Url| sink.lock().unwrap().push(url.as_str().to_owned()));

        let rich = linkifier.format_text(Some(TEXT));
        let params = LayoutParams::default();
        let hit = linkifier.handle_tap(&rich, &params, &METRICS, Point::new(105.0, 5.0));
        assert_eq!(hit.map(Url::as_str), Some("https://www.example.com/"));
        assert_eq!(*seen.lock().unwrap(), ["https://www.example.com/"]);
    }

    #[test]
    fn default_dispatch_goes_to_the_opener() {
        let opener = RecordingOpener::default();
        let opened = Arc::clone(&opener.opened);
        let linkifier = Linkifier::new(BLUE)
            .with_text_brush(WHITE)
            .with_opener(opener);

        let rich = linkifier.format_text(Some(TEXT));
        let params = LayoutParams::default();
        linkifier.handle_tap(&rich, &params, &METRICS, Point::new(105.0, 5.0));
        assert_eq!(*opened.lock().unwrap(), ["https://www.example.com/"]);
    }

    #[test]
    fn handler_takes_precedence_over_opener() {
        let opener = RecordingOpener::default();
        let opened = Arc::clone(&opener.opened);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let linkifier = Linkifier::new(BLUE)
            .with_opener(opener)
            .with_handler(move |url: &Url| sink.lock().unwrap().push(url.as_str().to_owned()));

        let rich = linkifier.format_text(Some(TEXT));
        let params = LayoutParams::default();
        linkifier.handle_tap(&rich, &params, &METRICS, Point::new(105.0, 5.0));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(opened.lock().unwrap().is_empty());
    }

    #[test]
    fn miss_invokes_nothing() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let linkifier = Linkifier::new(BLUE)
            .with_handler(move |url: &Url| sink.lock().unwrap().push(url.as_str().to_owned()));

        let rich = linkifier.format_text(Some(TEXT));
        let params = LayoutParams::default();
        let hit = linkifier.handle_tap(&rich, &params, &METRICS, Point::new(5.0, 5.0));
        assert!(hit.is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn rapid_taps_dispatch_independently() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let linkifier = Linkifier::new(BLUE)
            .with_handler(move |url: &Url| sink.lock().unwrap().push(url.as_str().to_owned()));

        let rich = linkifier.format_text(Some(TEXT));
        let params = LayoutParams::default();
        for _ in 0..3 {
            linkifier.handle_tap(&rich, &params, &METRICS, Point::new(105.0, 5.0));
        }
        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn brushes_are_reported_back() {
        let linkifier = Linkifier::new(BLUE).with_text_brush(WHITE);
        assert_eq!(linkifier.text_brush().color, WHITE.color);
        assert_eq!(linkifier.link_brush().color, BLUE.color);
    }
}
