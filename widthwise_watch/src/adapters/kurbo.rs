// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Kurbo viewport geometry.
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! ## Notes
//!
//! These helpers feed Kurbo-typed viewport geometry into a
//! [`ManualWidth<f64>`] facility. Only the width component is consulted; the
//! watch layer tracks a single axis.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::manual::{ManualToken, ManualWidth};
use crate::types::Flip;

/// Observe a new viewport size, reporting the resulting flips.
///
/// Feed the flips to [`Watcher::pump`](crate::Watcher::pump).
pub fn set_viewport_size(manual: &mut ManualWidth<f64>, size: Size) -> Vec<Flip<ManualToken>> {
    manual.set_width(size.width)
}

/// Observe a new viewport rectangle, reporting the resulting flips.
///
/// Uses the rectangle's width; its origin is irrelevant to breakpoints.
pub fn set_viewport_rect(manual: &mut ManualWidth<f64>, rect: Rect) -> Vec<Flip<ManualToken>> {
    manual.set_width(rect.width())
}
