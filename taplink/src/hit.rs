// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of tap points to link targets.

use url::Url;

use crate::builder::RichText;
use crate::layout::{Cluster, Layout, LayoutParams, Point};
use crate::metrics::TextMetrics;
use crate::style::Brush;

/// Resolves a tap at `point` to the link under it, if any.
///
/// The text is laid out with the renderer's wrapping rules under the exact
/// geometry it was displayed with, the character under the point is found,
/// and its attribute run is consulted for a link target. Points over plain
/// text, whitespace, or empty space resolve to `None`.
///
/// The layout is rebuilt on every call and discarded; container geometry can
/// change between renders, so nothing here is worth caching.
pub fn resolve_link<'a, B: Brush>(
    rich: &'a RichText<B>,
    params: &LayoutParams,
    metrics: &impl TextMetrics,
    point: Point,
) -> Option<&'a Url> {
    if rich.is_empty() {
        return None;
    }
    let layout = Layout::new(rich.as_str(), metrics, params);
    let cluster = Cluster::from_point_exact(&layout, point.x, point.y)?;
    let style = rich.attribute_at(cluster.text_range().start)?;
    style.link.as_ref()
}
