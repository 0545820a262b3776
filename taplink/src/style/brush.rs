// Copyright 2025 the Taplink Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trait for types that represent the color of text.
///
/// The crate never interprets a brush; it only copies brushes into attribute
/// runs, so any renderer-side color (or richer paint) type qualifies.
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}
