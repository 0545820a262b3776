// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanned Text is a Rust crate for text that carries per-range attributes.
//!
//! The central type, [`SpannedText`], pairs a text buffer with an ordered
//! sequence of attribute runs. Unlike a free-form span list, the runs are
//! kept contiguous and non-overlapping at all times: every byte of the text
//! belongs to exactly one run, so finding the attribute under a byte offset
//! is a single binary search rather than an overlap resolution pass.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod error;
mod spanned_text;
mod text_range;
mod text_storage;

pub use crate::error::RangeError;
pub use crate::spanned_text::SpannedText;
pub use crate::text_range::TextRange;
pub use crate::text_storage::TextStorage;
