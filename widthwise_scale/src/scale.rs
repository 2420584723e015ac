// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The breakpoint scale: validated table, ascending ordering, and ranks.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::types::{ScaleError, WidthRange, lt};

/// A named breakpoint scale over the viewport width axis.
///
/// Each entry maps a breakpoint name to a numeric threshold: the inclusive
/// upper bound of that breakpoint's width range. The narrowest breakpoint
/// implicitly starts at the minimum width, and the widest breakpoint's own
/// threshold participates only in ordering (its range is open-ended above its
/// predecessor).
///
/// A scale is immutable once constructed. The ascending ordering and the
/// rank of every name are derived at construction, so lookups never observe
/// an unsorted or partially validated table.
///
/// Names are caller-defined: `&'static str`, `String`, or a custom enum all
/// work. Thresholds are generic over the scalar; integer pixel widths are
/// typical, floats are supported under a no-NaN assumption (construction
/// rejects incomparable thresholds, and width classification falls back to
/// the widest breakpoint for incomparable widths).
#[derive(Clone, Debug, PartialEq)]
pub struct Scale<K, T> {
    /// Ascending by threshold.
    entries: Vec<(K, T)>,
    /// Name → zero-based position in `entries`.
    ranks: BTreeMap<K, usize>,
}

impl<K, T> Scale<K, T>
where
    K: Clone + Ord + Debug,
    T: Copy + PartialOrd + Debug,
{
    /// Build a scale from `(name, threshold)` pairs.
    ///
    /// The input need not be sorted; entries are stable-sorted ascending by
    /// threshold. Construction fails fast on configurations that would
    /// produce ambiguous ranges:
    ///
    /// - no entries → [`ScaleError::Empty`]
    /// - two entries with equal (or incomparable) thresholds →
    ///   [`ScaleError::DuplicateThreshold`]
    /// - one name used twice → [`ScaleError::DuplicateName`]
    pub fn new<I>(entries: I) -> Result<Self, ScaleError>
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let mut entries: Vec<(K, T)> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(ScaleError::Empty);
        }
        entries.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        for pair in entries.windows(2) {
            if !lt(pair[0].1, pair[1].1) {
                return Err(ScaleError::DuplicateThreshold);
            }
        }
        let mut ranks = BTreeMap::new();
        for (rank, (name, _)) in entries.iter().enumerate() {
            if ranks.insert(name.clone(), rank).is_some() {
                return Err(ScaleError::DuplicateName);
            }
        }
        Ok(Self { entries, ranks })
    }

    /// Number of breakpoints on the scale. Always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Breakpoint names in ascending threshold order.
    pub fn order(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// `(name, threshold)` pairs in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, T)> {
        self.entries.iter().map(|(name, threshold)| (name, *threshold))
    }

    /// Zero-based rank of a name in the ascending ordering.
    pub fn rank_of(&self, name: &K) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Name at the given rank.
    pub fn name_at(&self, rank: usize) -> Option<&K> {
        self.entries.get(rank).map(|(name, _)| name)
    }

    /// Threshold configured for a name.
    pub fn threshold_of(&self, name: &K) -> Option<T> {
        self.rank_of(name).map(|rank| self.entries[rank].1)
    }

    /// The narrowest (lowest-threshold) breakpoint.
    pub fn narrowest(&self) -> &K {
        &self.entries[0].0
    }

    /// The widest (highest-threshold) breakpoint.
    pub fn widest(&self) -> &K {
        &self.entries[self.entries.len() - 1].0
    }

    /// One exclusive width range per breakpoint, in rank order.
    ///
    /// For thresholds `t0 < t1 < … < t(n-1)` the ranges are `width <= t0`,
    /// then `t(i-1) < width <= ti` for interior breakpoints, then
    /// `width > t(n-2)` for the widest. A single-entry scale owns the whole
    /// axis. The ranges are pairwise disjoint and leave no gaps; this is the
    /// invariant everything downstream relies on.
    pub fn ranges(&self) -> impl Iterator<Item = (usize, &K, WidthRange<T>)> {
        let n = self.entries.len();
        self.entries.iter().enumerate().map(move |(rank, (name, _))| {
            let range = if n == 1 {
                WidthRange::Full
            } else if rank == 0 {
                WidthRange::UpTo(self.entries[0].1)
            } else if rank == n - 1 {
                WidthRange::Above(self.entries[n - 2].1)
            } else {
                WidthRange::Between(self.entries[rank - 1].1, self.entries[rank].1)
            };
            (rank, name, range)
        })
    }

    /// The `(rank, name)` of the breakpoint whose range contains `width`.
    ///
    /// Exactly one range matches any comparable width. An incomparable width
    /// (NaN) matches none and falls back to the widest breakpoint.
    pub fn classify(&self, width: T) -> (usize, &K) {
        for (rank, name, range) in self.ranges() {
            if range.contains(width) {
                return (rank, name);
            }
        }
        (self.entries.len() - 1, self.widest())
    }

    /// Whether `width` falls at or above the named breakpoint.
    ///
    /// Returns `None` if the name is not on the scale.
    pub fn at_least(&self, width: T, name: &K) -> Option<bool> {
        let min = self.rank_of(name)?;
        Some(self.classify(width).0 >= min)
    }

    /// Whether `width` falls between two named breakpoints, inclusive.
    ///
    /// Returns `None` if either name is not on the scale.
    pub fn between(&self, width: T, lo: &K, hi: &K) -> Option<bool> {
        let lo = self.rank_of(lo)?;
        let hi = self.rank_of(hi)?;
        let rank = self.classify(width).0;
        Some(rank >= lo && rank <= hi)
    }
}

impl Scale<&'static str, u32> {
    /// A conventional five-step scale for CSS-like pixel widths.
    ///
    /// | Name | Range           |
    /// |------|-----------------|
    /// | `xs` | width ≤ 575     |
    /// | `sm` | 576 ..= 767     |
    /// | `md` | 768 ..= 991     |
    /// | `lg` | 992 ..= 1199    |
    /// | `xl` | width ≥ 1200    |
    ///
    /// The `xl` threshold (1399) only orders the scale; its range is
    /// open-ended above `lg`.
    pub fn standard() -> Self {
        let entries = alloc::vec![
            ("xs", 575_u32),
            ("sm", 767),
            ("md", 991),
            ("lg", 1199),
            ("xl", 1399),
        ];
        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, (name, _))| (*name, rank))
            .collect();
        Self { entries, ranks }
    }
}
