// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use super::Layout;
use super::data::ClusterData;

/// Atomic unit of hit-testable text: one laid-out character.
#[derive(Copy, Clone, Debug)]
pub struct Cluster<'a> {
    line_index: usize,
    data: &'a ClusterData,
}

impl<'a> Cluster<'a> {
    /// Returns the cluster whose glyph occupies the specified position in
    /// the given layout, or `None` when no glyph does.
    ///
    /// The test is exact: points above the first line, below the last
    /// laid-out line, left of a line's start, or within a line's trailing
    /// whitespace hit nothing. This is the expected behaviour for "hover"
    /// or "click" functionality; there is deliberately no nearest-cluster
    /// fallback, which would turn taps on empty space into taps on the
    /// adjacent character.
    pub fn from_point_exact(layout: &'a Layout, x: f32, y: f32) -> Option<Self> {
        let (line_index, line) = layout.line_for_offset(y)?;
        if x < 0.0 || x >= line.metrics().content_advance() {
            return None;
        }
        let mut offset = 0.0;
        for data in line.clusters() {
            offset += data.advance;
            if x < offset {
                return Some(Self { line_index, data });
            }
        }
        None
    }

    /// Returns the index of the line this cluster belongs to.
    pub fn line_index(&self) -> usize {
        self.line_index
    }

    /// Returns the cluster's byte range in the source text.
    pub fn text_range(&self) -> Range<usize> {
        self.data.text_range()
    }

    /// Returns the advance of the cluster.
    pub fn advance(&self) -> f32 {
        self.data.advance
    }

    /// Returns `true` if the cluster is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.data.is_whitespace()
    }
}
