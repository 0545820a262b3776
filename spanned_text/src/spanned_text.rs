// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Range;

use crate::{TextRange, TextStorage};

/// A block of text with an attribute attached to every byte.
///
/// The attributes are stored as runs: byte ranges paired with an attribute
/// value. The runs are contiguous, non-overlapping, and sorted, and together
/// they cover the full text. Empty text has no runs. The invariant is
/// maintained on every mutation, so [`attribute_at`] is a plain binary
/// search and callers never resolve overlaps themselves.
///
/// Construction establishes a single run carrying a base attribute;
/// [`apply`] rewrites the attribute over a sub-range, splitting runs at the
/// range endpoints and re-merging neighbors that end up equal.
///
/// [`apply`]: SpannedText::apply
/// [`attribute_at`]: SpannedText::attribute_at
///
/// # Examples
///
/// ```
/// use spanned_text::{SpannedText, TextRange};
///
/// let mut text = SpannedText::new("hello world", false);
/// let range = TextRange::new(text.text(), 6..11).unwrap();
/// text.apply(range, |_| true);
///
/// assert_eq!(text.attribute_at(0), Some(&false));
/// assert_eq!(text.attribute_at(6), Some(&true));
/// assert_eq!(text.runs_len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedText<T, Attr>
where
    T: Debug + TextStorage,
    Attr: Debug + Clone + PartialEq,
{
    text: T,
    runs: Vec<(Range<usize>, Attr)>,
}

impl<T, Attr> SpannedText<T, Attr>
where
    T: Debug + TextStorage,
    Attr: Debug + Clone + PartialEq,
{
    /// Create a `SpannedText` with `base` applied to the whole text.
    pub fn new(text: T, base: Attr) -> Self {
        let len = text.len();
        let mut runs = Vec::new();
        if len > 0 {
            runs.push((0..len, base));
        }
        Self { text, runs }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrow the underlying text as a string slice.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rewrite the attribute over `range`.
    ///
    /// Each run overlapping the range contributes its current attribute to
    /// `f`, which produces the replacement. Runs straddling an endpoint are
    /// split first, and equal neighbors are merged afterwards, so the
    /// contiguity invariant holds on return.
    ///
    /// The range must have been validated against this value's text content;
    /// offsets beyond the current length are clamped.
    pub fn apply<F>(&mut self, range: TextRange, f: F)
    where
        F: Fn(&Attr) -> Attr,
    {
        let Range { start, end } = range.clamp_to(self.text.len());
        if start >= end {
            return;
        }
        self.split_at(start);
        self.split_at(end);
        for (run, attr) in &mut self.runs {
            if run.start >= start && run.end <= end {
                *attr = f(attr);
            }
        }
        self.merge_equal_neighbors();
    }

    /// Returns the attribute covering the byte at `index`.
    ///
    /// Returns `None` when `index` is at or past the end of the text.
    pub fn attribute_at(&self, index: usize) -> Option<&Attr> {
        let run_index = self.run_index_for(index)?;
        Some(&self.runs[run_index].1)
    }

    /// Iterate over the attribute runs in text order.
    ///
    /// The yielded ranges are contiguous and non-overlapping, and cover the
    /// full text.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.runs.iter().map(|(range, attr)| (range, attr))
    }

    /// Returns the number of attribute runs.
    pub fn runs_len(&self) -> usize {
        self.runs.len()
    }

    fn run_index_for(&self, index: usize) -> Option<usize> {
        self.runs
            .binary_search_by(|(range, _)| {
                if index < range.start {
                    Ordering::Greater
                } else if index >= range.end {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()
    }

    /// Split the run containing `offset` so that a run boundary falls on it.
    ///
    /// No-op when `offset` already sits on a boundary (including 0 and len).
    fn split_at(&mut self, offset: usize) {
        let Some(index) = self.run_index_for(offset) else {
            return;
        };
        let (run, attr) = &mut self.runs[index];
        if run.start == offset {
            return;
        }
        let tail = offset..run.end;
        run.end = offset;
        let tail_attr = attr.clone();
        self.runs.insert(index + 1, (tail, tail_attr));
    }

    fn merge_equal_neighbors(&mut self) {
        self.runs.dedup_by(|next, prev| {
            if prev.1 == next.1 {
                prev.0.end = next.0.end;
                true
            } else {
                false
            }
        });
    }
}
