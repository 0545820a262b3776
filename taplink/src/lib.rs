// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Taplink turns plain label text into styled, tappable rich text.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! - [`detect`] scans text for URLs and reports them as ordered,
//!   non-overlapping [`LinkSpan`]s.
//! - [`format_text`] styles the text: a base brush everywhere, the link
//!   brush plus a URL attribute over each detected span. The result is a
//!   [`RichText`] whose attribute runs are contiguous, so per-character
//!   lookups are cheap.
//! - [`resolve_link`] maps a tap point back to the link under it, by
//!   reproducing the renderer's greedy line wrapping (via a [`TextMetrics`]
//!   measurement oracle) under the exact [`LayoutParams`] geometry the text
//!   was displayed with.
//!
//! [`Linkifier`] ties the stages together and dispatches resolved taps to a
//! configured handler, or to the host's URL opener when none is set.
//!
//! Everything is synchronous and pure: formatting and resolution recompute
//! from their inputs on every call, and no state is shared between calls.
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

pub use spanned_text;
pub use url;

mod builder;
mod detect;
mod hit;
mod linkifier;
mod metrics;
mod open;

pub mod layout;
pub mod style;

#[cfg(test)]
mod testing;

pub use url::Url;

pub use builder::{RichText, build, format_text};
pub use detect::{LinkSpan, detect};
pub use hit::resolve_link;
pub use layout::{BreakMode, Layout, LayoutParams, Point};
pub use linkifier::Linkifier;
pub use metrics::{FixedMetrics, TextMetrics};
pub use open::{SystemOpener, UrlOpener};
