// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of label text into lines, and point hit-testing against it.
//!
//! The layout here exists to answer one question: which character sits under
//! a point, given the geometry the text was rendered with. It reproduces the
//! renderer's greedy word wrapping over a caller-supplied measurement oracle
//! and is built fresh for each resolution, never cached between renders.

mod cluster;
mod data;
mod line_break;

pub use cluster::Cluster;
pub use data::{BreakReason, LineMetrics};

use core::cmp::Ordering;
use core::ops::Range;

use crate::TextMetrics;
use data::{ClusterData, LayoutData, LineData, Whitespace};

/// A point in the layout container's local coordinate space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal offset from the container's left edge.
    pub x: f32,
    /// Vertical offset from the container's top edge.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Line breaking policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BreakMode {
    /// Greedy word wrapping: lines break at the last word boundary that
    /// fits, falling back to a break inside the word when none does.
    #[default]
    Word,
    /// Lines break at whichever character exceeds the maximum advance.
    Anywhere,
}

/// Immutable snapshot of the geometry the text was rendered with.
///
/// Hit resolution walks the same wrapping decisions the renderer made, so
/// these values must describe the container as it was actually displayed;
/// a stale snapshot silently resolves taps against the wrong characters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Maximum advance (container width) available to a line.
    pub max_advance: f32,
    /// Container height; lines that would extend past it are not laid out.
    pub max_height: f32,
    /// Maximum number of lines; `0` means unlimited.
    pub max_lines: usize,
    /// Line breaking policy.
    pub break_mode: BreakMode,
}

impl LayoutParams {
    /// Creates parameters for a container of the given size, with unlimited
    /// lines and word wrapping.
    pub const fn new(max_advance: f32, max_height: f32) -> Self {
        Self {
            max_advance,
            max_height,
            max_lines: 0,
            break_mode: BreakMode::Word,
        }
    }

    /// Builder-style method for setting the maximum number of lines.
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Builder-style method for setting the line breaking policy.
    #[must_use]
    pub const fn with_break_mode(mut self, break_mode: BreakMode) -> Self {
        self.break_mode = break_mode;
        self
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(f32::MAX, f32::MAX)
    }
}

/// Text layout.
#[derive(Clone, Debug)]
pub struct Layout {
    data: LayoutData,
}

impl Layout {
    /// Lays out `text` with the given measurements and container geometry.
    pub fn new(text: &str, metrics: &impl TextMetrics, params: &LayoutParams) -> Self {
        let mut data = LayoutData {
            text_len: text.len(),
            ..LayoutData::default()
        };
        for (text_offset, ch) in text.char_indices() {
            let whitespace = if ch == '\n' {
                Whitespace::Newline
            } else if ch.is_whitespace() {
                Whitespace::Space
            } else {
                Whitespace::None
            };
            let advance = match whitespace {
                // A newline terminates its line; it occupies no space.
                Whitespace::Newline => 0.0,
                _ => metrics.advance(ch),
            };
            data.clusters.push(ClusterData {
                text_offset,
                text_len: ch.len_utf8() as u8,
                advance,
                whitespace,
            });
        }
        line_break::break_lines(&mut data, metrics.line_height(), params);
        Self { data }
    }

    /// Returns the width of the layout, excluding trailing whitespace.
    pub fn width(&self) -> f32 {
        self.data.width
    }

    /// Returns the width of the layout, including the width of any trailing
    /// whitespace.
    pub fn full_width(&self) -> f32 {
        self.data.full_width
    }

    /// Returns the height of the layout.
    pub fn height(&self) -> f32 {
        self.data.height
    }

    /// Returns the number of lines in the layout.
    pub fn len(&self) -> usize {
        self.data.lines.len()
    }

    /// Returns `true` if the layout is empty.
    pub fn is_empty(&self) -> bool {
        self.data.lines.is_empty()
    }

    /// Returns the line at the specified index.
    pub fn get(&self, index: usize) -> Option<Line<'_>> {
        Some(Line {
            layout: self,
            data: self.data.lines.get(index)?,
        })
    }

    /// Returns an iterator over the lines in the layout.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ + Clone {
        self.data.lines.iter().map(move |data| Line { layout: self, data })
    }

    /// Returns the index and `Line` object for the line whose vertical band
    /// contains the given `offset`, or `None` when the offset falls above
    /// the first or below the last laid-out line.
    pub(crate) fn line_for_offset(&self, offset: f32) -> Option<(usize, Line<'_>)> {
        let line_index = self
            .data
            .lines
            .binary_search_by(|line| {
                if offset < line.metrics.min_coord {
                    Ordering::Greater
                } else if offset >= line.metrics.max_coord {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()?;
        Some((line_index, self.get(line_index)?))
    }
}

/// A single line of a [`Layout`].
#[derive(Copy, Clone, Debug)]
pub struct Line<'a> {
    layout: &'a Layout,
    data: &'a LineData,
}

impl<'a> Line<'a> {
    /// Returns the range of source text for the line.
    pub fn text_range(&self) -> Range<usize> {
        self.data.text_range.clone()
    }

    /// Returns the metrics for the line.
    pub fn metrics(&self) -> &'a LineMetrics {
        &self.data.metrics
    }

    /// Returns the cause of the line's break.
    pub fn break_reason(&self) -> BreakReason {
        self.data.break_reason
    }

    pub(crate) fn clusters(&self) -> &'a [ClusterData] {
        &self.layout.data.clusters[self.data.cluster_range.clone()]
    }
}
