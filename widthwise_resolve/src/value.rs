// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive value types: a scalar, or a default with per-breakpoint
//! overrides.

use alloc::collections::BTreeMap;

use widthwise_scale::Scale;

/// A per-breakpoint value table: a mandatory default plus overrides keyed by
/// breakpoint name.
///
/// An override at breakpoint `X` applies to `X` and to every wider breakpoint
/// up to the next override; see the resolution rules on
/// [`Responsive::resolve`](crate::Responsive::resolve). Overrides keyed by
/// names that are not on the scale being resolved against are never matched.
/// That is legal, but presumably not what the caller meant;
/// [`ResponsiveTable::dead_overrides`] finds them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsiveTable<K, V> {
    default: V,
    overrides: BTreeMap<K, V>,
}

impl<K: Ord, V> ResponsiveTable<K, V> {
    /// A table with no overrides: every breakpoint resolves to `default`.
    pub fn new(default: V) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Builder-style override insertion.
    pub fn with(mut self, name: K, value: V) -> Self {
        self.overrides.insert(name, value);
        self
    }

    /// Insert or replace an override, returning the previous value.
    pub fn set(&mut self, name: K, value: V) -> Option<V> {
        self.overrides.insert(name, value)
    }

    /// Remove an override, returning it.
    pub fn remove(&mut self, name: &K) -> Option<V> {
        self.overrides.remove(name)
    }

    /// The mandatory fallback value.
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// The override for a name, if any.
    pub fn override_for(&self, name: &K) -> Option<&V> {
        self.overrides.get(name)
    }

    /// All overrides, in name order.
    pub fn overrides(&self) -> impl Iterator<Item = (&K, &V)> {
        self.overrides.iter()
    }

    /// Override names that the given scale can never match.
    ///
    /// Dead overrides cannot affect resolution for any breakpoint of the
    /// scale; they are a configuration smell, not an error.
    pub fn dead_overrides<'s, T>(&'s self, scale: &'s Scale<K, T>) -> impl Iterator<Item = &'s K>
    where
        K: Clone + core::fmt::Debug,
        T: Copy + PartialOrd + core::fmt::Debug,
    {
        self.overrides
            .keys()
            .filter(move |name| scale.rank_of(name).is_none())
    }
}

/// A value that may vary by breakpoint.
///
/// The variant is the discriminant: a [`Responsive::Value`] resolves to
/// itself at every breakpoint, a [`Responsive::Table`] resolves by cascade.
/// There is no structural sniffing; a scalar whose type happens to look like
/// a table is still a scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Responsive<K, V> {
    /// The same value at every breakpoint.
    Value(V),
    /// A default plus per-breakpoint overrides.
    Table(ResponsiveTable<K, V>),
}

impl<K: Ord, V> Responsive<K, V> {
    /// A value that does not vary by breakpoint.
    pub fn value(value: V) -> Self {
        Self::Value(value)
    }

    /// A table with a default and no overrides yet; combine with
    /// [`ResponsiveTable::with`] via [`Responsive::Table`], or use
    /// [`Responsive::with`] directly.
    pub fn table(default: V) -> Self {
        Self::Table(ResponsiveTable::new(default))
    }

    /// Builder-style override insertion; converts a plain value into a table
    /// using the value as the default.
    pub fn with(self, name: K, value: V) -> Self {
        let table = match self {
            Self::Value(default) => ResponsiveTable::new(default),
            Self::Table(table) => table,
        };
        Self::Table(table.with(name, value))
    }
}

impl<K, V> From<V> for Responsive<K, V> {
    fn from(value: V) -> Self {
        Self::Value(value)
    }
}
