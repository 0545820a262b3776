// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{RangeError, TextStorage};

/// A validated byte range into a UTF-8 text buffer.
///
/// Construction checks, once, everything the run-maintenance code relies
/// on: `start <= end`, both offsets in bounds, and both offsets on UTF-8
/// character boundaries. APIs taking a `TextRange` can then be infallible
/// with respect to range correctness.
///
/// The validation is not tied to a particular buffer identity — only to its
/// content. Reusing a `TextRange` with different text is the caller's
/// mistake; [`SpannedText::apply`] clamps out-of-bounds offsets rather than
/// panicking when that happens.
///
/// [`SpannedText::apply`]: crate::SpannedText::apply
///
/// ## Example
///
/// ```
/// use spanned_text::{SpannedText, TextRange};
///
/// let mut text = SpannedText::new("Hello!", 0_u8);
/// let range = TextRange::new(text.text(), 0..5).unwrap();
/// text.apply(range, |_| 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns a validated `TextRange` for the provided text.
    pub fn new<T: TextStorage>(text: &T, range: Range<usize>) -> Result<Self, RangeError> {
        let Range { start, end } = range;
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        if end > text.len() {
            return Err(RangeError::OutOfBounds {
                start,
                end,
                len: text.len(),
            });
        }
        for index in [start, end] {
            if !text.is_char_boundary(index) {
                return Err(RangeError::NotOnCharBoundary { index });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates a `TextRange` without validation.
    ///
    /// This is intended for callers that already maintain range invariants.
    #[must_use]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the range with both offsets clamped to `len`.
    pub(crate) fn clamp_to(self, len: usize) -> Range<usize> {
        self.start.min(len)..self.end.min(len)
    }
}

impl From<TextRange> for Range<usize> {
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}
