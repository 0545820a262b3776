// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use core::ops::Range;

use super::data::{BreakReason, LayoutData, LineData, LineMetrics, Whitespace};
use super::{BreakMode, LayoutParams};

/// Breaks the layout's clusters into lines.
///
/// Whitespace never triggers an overflow: trailing spaces hang past the
/// maximum advance and are recorded in the line's `trailing_whitespace`.
/// Once the line or height limit is reached, the remaining clusters are left
/// without a line, which keeps them unreachable for hit testing.
pub(crate) fn break_lines(data: &mut LayoutData, line_height: f32, params: &LayoutParams) {
    let cluster_count = data.clusters.len();
    let mut committed_y = 0_f64;
    // First cluster and accumulated advance of the line being built.
    let mut start = 0_usize;
    let mut advance = 0_f32;
    // The cluster index a word-boundary break would revert to, with the
    // line advance at that point.
    let mut prev_boundary: Option<(usize, f32)> = None;
    let mut stopped = false;

    let mut i = 0_usize;
    while i < cluster_count {
        let cluster = &data.clusters[i];
        if cluster.is_newline() {
            let end = i + 1;
            commit_line(
                data,
                start..end,
                advance,
                BreakReason::Explicit,
                &mut committed_y,
                line_height,
            );
            start = end;
            i = end;
            advance = 0.0;
            prev_boundary = None;
            if limits_reached(data.lines.len(), committed_y, line_height, params) {
                stopped = true;
                break;
            }
            continue;
        }

        if params.break_mode == BreakMode::Word
            && i > start
            && !cluster.is_whitespace()
            && data.clusters[i - 1].whitespace == Whitespace::Space
        {
            prev_boundary = Some((i, advance));
        }

        let next_advance = advance + cluster.advance;
        if next_advance > params.max_advance && !cluster.is_whitespace() {
            if i == start {
                // A single cluster wider than the container still occupies
                // its line; splitting below a cluster is not possible.
                advance = next_advance;
                i += 1;
                continue;
            }
            let (end, line_advance, reason) = match prev_boundary.take() {
                Some((boundary, boundary_advance)) if boundary > start => {
                    (boundary, boundary_advance, BreakReason::Regular)
                }
                _ => {
                    let reason = match params.break_mode {
                        BreakMode::Word => BreakReason::Emergency,
                        BreakMode::Anywhere => BreakReason::Regular,
                    };
                    (i, advance, reason)
                }
            };
            commit_line(
                data,
                start..end,
                line_advance,
                reason,
                &mut committed_y,
                line_height,
            );
            start = end;
            i = end;
            advance = 0.0;
            prev_boundary = None;
            if limits_reached(data.lines.len(), committed_y, line_height, params) {
                stopped = true;
                break;
            }
            continue;
        }

        advance = next_advance;
        i += 1;
    }

    if !stopped && start < cluster_count {
        commit_line(
            data,
            start..cluster_count,
            advance,
            BreakReason::None,
            &mut committed_y,
            line_height,
        );
    }
}

fn limits_reached(
    lines_len: usize,
    committed_y: f64,
    line_height: f32,
    params: &LayoutParams,
) -> bool {
    if params.max_lines != 0 && lines_len >= params.max_lines {
        return true;
    }
    // The first line is always laid out, even in a container shorter than
    // one line.
    lines_len > 0 && committed_y + f64::from(line_height) > f64::from(params.max_height)
}

fn commit_line(
    data: &mut LayoutData,
    clusters: Range<usize>,
    advance: f32,
    break_reason: BreakReason,
    committed_y: &mut f64,
    line_height: f32,
) {
    debug_assert!(!clusters.is_empty(), "lines are committed non-empty");
    let text_range = data.clusters[clusters.start].text_offset
        ..data.clusters[clusters.end - 1].text_range().end;
    let mut trailing_whitespace = 0.0;
    for cluster in data.clusters[clusters.clone()].iter().rev() {
        if !cluster.is_whitespace() {
            break;
        }
        trailing_whitespace += cluster.advance;
    }
    let min_coord = *committed_y as f32;
    *committed_y += f64::from(line_height);
    let metrics = LineMetrics {
        min_coord,
        max_coord: *committed_y as f32,
        advance,
        trailing_whitespace,
    };
    data.width = data.width.max(metrics.content_advance());
    data.full_width = data.full_width.max(metrics.advance);
    data.height = *committed_y as f32;
    data.lines.push(LineData {
        text_range,
        cluster_range: clusters,
        metrics,
        break_reason,
    });
}
