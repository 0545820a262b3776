// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Reasons a byte range can fail validation against a text buffer.
///
/// Each variant carries the offending offsets so callers can report exactly
/// what was rejected without re-deriving it from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    /// The range had `start > end`.
    Inverted {
        /// The start byte offset the caller provided.
        start: usize,
        /// The end byte offset the caller provided.
        end: usize,
    },
    /// The range extended past the end of the text.
    OutOfBounds {
        /// The start byte offset the caller provided.
        start: usize,
        /// The end byte offset the caller provided.
        end: usize,
        /// The length of the text in bytes.
        len: usize,
    },
    /// A range endpoint fell inside a multi-byte character.
    NotOnCharBoundary {
        /// The offending byte offset.
        index: usize,
    },
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Inverted { start, end } => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            Self::OutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for len {len}")
            }
            Self::NotOnCharBoundary { index } => {
                write!(f, "index {index} is not a UTF-8 character boundary")
            }
        }
    }
}

impl core::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::RangeError;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offsets() {
        let msg = RangeError::Inverted { start: 4, end: 3 }.to_string();
        assert!(msg.contains("4..3"), "got: {msg}");

        let msg = RangeError::OutOfBounds {
            start: 0,
            end: 7,
            len: 6,
        }
        .to_string();
        assert!(msg.contains("0..7"), "got: {msg}");
        assert!(msg.contains("len 6"), "got: {msg}");

        let msg = RangeError::NotOnCharBoundary { index: 1 }.to_string();
        assert!(msg.contains("index 1"), "got: {msg}");
    }
}
