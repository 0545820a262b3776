// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for unit tests.

use crate::FixedMetrics;

/// A simple concrete brush for exercising the generic APIs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ColorBrush {
    pub(crate) color: peniko::Color,
}

impl ColorBrush {
    pub(crate) const fn new(color: peniko::Color) -> Self {
        Self { color }
    }
}

impl Default for ColorBrush {
    fn default() -> Self {
        Self::new(peniko::Color::BLACK)
    }
}

pub(crate) const WHITE: ColorBrush = ColorBrush::new(peniko::Color::WHITE);
pub(crate) const BLUE: ColorBrush = ColorBrush::new(peniko::Color::from_rgba8(0, 0, 255, 255));

/// One character advances by 10, one line is 10 tall.
pub(crate) const METRICS: FixedMetrics = FixedMetrics::new(10.0, 10.0);
