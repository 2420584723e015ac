// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width-range predicates and scale construction errors.

use core::cmp::Ordering;
use core::fmt;

/// An exclusive range predicate over the viewport width axis.
///
/// One range is derived per breakpoint by [`Scale::ranges`](crate::Scale::ranges):
/// the narrowest breakpoint owns everything up to its threshold, interior
/// breakpoints own the half-open span above their predecessor's threshold,
/// and the widest breakpoint owns everything beyond its predecessor. The
/// ranges of a scale are pairwise disjoint and jointly cover the axis, so a
/// width matches exactly one of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WidthRange<T> {
    /// `width <= bound`. Owned by the narrowest breakpoint.
    UpTo(T),
    /// `lo < width <= hi`. Owned by interior breakpoints.
    Between(T, T),
    /// `width > bound`. Owned by the widest breakpoint.
    Above(T),
    /// The whole axis. Owned by the sole breakpoint of a single-entry scale.
    Full,
}

impl<T: Copy + PartialOrd> WidthRange<T> {
    /// Whether the range contains the given width.
    ///
    /// Widths are assumed comparable (no NaN); an incomparable width is
    /// contained only by [`WidthRange::Full`].
    pub fn contains(&self, width: T) -> bool {
        match *self {
            Self::UpTo(hi) => le(width, hi),
            Self::Between(lo, hi) => lt(lo, width) && le(width, hi),
            Self::Above(lo) => lt(lo, width),
            Self::Full => true,
        }
    }
}

/// Errors rejected by [`Scale::new`](crate::Scale::new).
///
/// A scale that fails these checks would produce ambiguous or non-covering
/// width ranges, so construction fails fast instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScaleError {
    /// The breakpoint table had no entries.
    Empty,
    /// Two breakpoints shared a threshold (or their thresholds failed to
    /// compare, e.g. NaN), which would create a zero-width range.
    DuplicateThreshold,
    /// One name was given more than one threshold, so it has no single rank.
    DuplicateName,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("breakpoint table is empty"),
            Self::DuplicateThreshold => {
                f.write_str("two breakpoints share a threshold")
            }
            Self::DuplicateName => f.write_str("breakpoint name appears twice"),
        }
    }
}

impl core::error::Error for ScaleError {}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_to_includes_its_bound() {
        let r = WidthRange::UpTo(600_u32);
        assert!(r.contains(0));
        assert!(r.contains(600));
        assert!(!r.contains(601));
    }

    #[test]
    fn between_excludes_lo_includes_hi() {
        let r = WidthRange::Between(600_u32, 960);
        assert!(!r.contains(600));
        assert!(r.contains(601));
        assert!(r.contains(960));
        assert!(!r.contains(961));
    }

    #[test]
    fn above_excludes_its_bound() {
        let r = WidthRange::Above(1280_u32);
        assert!(!r.contains(1280));
        assert!(r.contains(1281));
    }

    #[test]
    fn full_contains_everything() {
        let r: WidthRange<u32> = WidthRange::Full;
        assert!(r.contains(0));
        assert!(r.contains(u32::MAX));
    }

    // NaN widths fail every comparison-backed predicate.
    #[test]
    fn nan_width_only_matches_full() {
        assert!(!WidthRange::UpTo(10.0_f64).contains(f64::NAN));
        assert!(!WidthRange::Between(1.0_f64, 10.0).contains(f64::NAN));
        assert!(!WidthRange::Above(1.0_f64).contains(f64::NAN));
        assert!(WidthRange::<f64>::Full.contains(f64::NAN));
    }

    #[test]
    fn adjacent_ranges_are_disjoint_at_the_shared_bound() {
        let below = WidthRange::UpTo(600_u32);
        let above = WidthRange::Between(600_u32, 960);
        assert!(below.contains(600));
        assert!(!above.contains(600));
        assert!(!below.contains(601));
        assert!(above.contains(601));
    }
}
