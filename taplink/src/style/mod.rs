// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling support.

mod brush;

pub use brush::Brush;

use url::Url;

/// Display and link attributes for a run of text.
///
/// Every character of a formatted text carries exactly one `LinkStyle`:
/// plain runs hold the base brush and no link target, link runs hold the
/// link brush and the URL the run activates.
#[derive(Clone, PartialEq, Debug)]
pub struct LinkStyle<B: Brush> {
    /// Brush for rendering the run.
    pub brush: B,
    /// URL activated when the run is tapped, if any.
    pub link: Option<Url>,
}

impl<B: Brush> LinkStyle<B> {
    /// Style for text that is not part of a link.
    pub fn plain(brush: B) -> Self {
        Self { brush, link: None }
    }

    /// Style for text that activates `url` when tapped.
    pub fn linked(brush: B, url: Url) -> Self {
        Self {
            brush,
            link: Some(url),
        }
    }

    /// Returns `true` if this style carries a link target.
    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}

impl<B: Brush> Default for LinkStyle<B> {
    fn default() -> Self {
        Self::plain(B::default())
    }
}
