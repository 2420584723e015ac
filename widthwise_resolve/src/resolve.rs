// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascade resolution of responsive values.
//!
//! ## Rules
//!
//! A plain value resolves to itself. A table resolves by scanning ranks from
//! the current breakpoint downward toward the narrowest: the first rank with
//! an override wins, otherwise the default. An override at `X` therefore
//! covers `X` and every wider breakpoint up to the next override, while the
//! scan never goes upward, so an override defined only for a breakpoint wider
//! than the current one does not apply. This is the usual mobile-first
//! cascade, not a nearest-neighbor match.

use core::fmt;
use core::fmt::Debug;

use widthwise_scale::Scale;
use widthwise_watch::Context;

use crate::value::{Responsive, ResponsiveTable};

/// Error from [`Responsive::resolve_at`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The supplied current name is not a breakpoint of the scale, so there
    /// is no rank to cascade from.
    UnknownBreakpoint,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBreakpoint => {
                f.write_str("current breakpoint is not on the scale")
            }
        }
    }
}

impl core::error::Error for ResolveError {}

/// Downward scan from `rank`: first override wins, else the default.
fn cascade<'v, K, T, V>(
    table: &'v ResponsiveTable<K, V>,
    scale: &Scale<K, T>,
    rank: usize,
) -> &'v V
where
    K: Clone + Ord + Debug,
    T: Copy + PartialOrd + Debug,
{
    for rank in (0..=rank).rev() {
        if let Some(name) = scale.name_at(rank)
            && let Some(value) = table.override_for(name)
        {
            return value;
        }
    }
    table.default_value()
}

impl<K, V> Responsive<K, V>
where
    K: Clone + Ord + Debug,
{
    /// Resolve against a live context snapshot.
    ///
    /// Infallible: a [`Context`] always carries a current breakpoint with a
    /// defined rank. Resolution is pure; resolving twice against the same
    /// snapshot yields the same value.
    pub fn resolve<'v, T>(&'v self, cx: &Context<K, T>) -> &'v V
    where
        T: Copy + PartialOrd + Debug,
    {
        match self {
            Self::Value(value) => value,
            Self::Table(table) => cascade(table, cx.scale(), cx.rank()),
        }
    }

    /// Resolve against a scale and an explicit current breakpoint.
    ///
    /// For callers without a watcher (fixed-width rendering, tests). A plain
    /// value passes through untouched; a table needs `current` to be on the
    /// scale, otherwise [`ResolveError::UnknownBreakpoint`].
    pub fn resolve_at<'v, T>(
        &'v self,
        scale: &Scale<K, T>,
        current: &K,
    ) -> Result<&'v V, ResolveError>
    where
        T: Copy + PartialOrd + Debug,
    {
        match self {
            Self::Value(value) => Ok(value),
            Self::Table(table) => {
                let rank = scale
                    .rank_of(current)
                    .ok_or(ResolveError::UnknownBreakpoint)?;
                Ok(cascade(table, scale, rank))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel_scale() -> Scale<&'static str, u32> {
        Scale::new([
            ("xs", 0_u32),
            ("sm", 600),
            ("md", 960),
            ("lg", 1280),
            ("xl", 1920),
        ])
        .unwrap()
    }

    fn full_table() -> Responsive<&'static str, &'static str> {
        Responsive::table("meow")
            .with("xs", "xs")
            .with("sm", "sm")
            .with("md", "md")
            .with("lg", "lg")
            .with("xl", "xl")
    }

    #[test]
    fn exact_override_wins() {
        let scale = pixel_scale();
        let value = full_table();
        assert_eq!(value.resolve_at(&scale, &"md").unwrap(), &"md");
    }

    // Without an md override, md falls back to the nearest narrower one.
    #[test]
    fn missing_override_falls_back_to_narrower() {
        let scale = pixel_scale();
        let mut value = full_table();
        if let Responsive::Table(table) = &mut value {
            table.remove(&"md");
        }
        assert_eq!(value.resolve_at(&scale, &"md").unwrap(), &"sm");
    }

    // An override only for a wider breakpoint never applies downward.
    #[test]
    fn wider_only_override_never_applies() {
        let scale = pixel_scale();
        let value = Responsive::table("meow").with("xl", "xl");
        assert_eq!(value.resolve_at(&scale, &"xs").unwrap(), &"meow");
        assert_eq!(value.resolve_at(&scale, &"lg").unwrap(), &"meow");
        assert_eq!(value.resolve_at(&scale, &"xl").unwrap(), &"xl");
    }

    #[test]
    fn an_override_covers_everything_wider_until_the_next() {
        let scale = pixel_scale();
        let value = Responsive::table(0_u32).with("sm", 8).with("lg", 16);
        assert_eq!(value.resolve_at(&scale, &"xs").unwrap(), &0);
        assert_eq!(value.resolve_at(&scale, &"sm").unwrap(), &8);
        assert_eq!(value.resolve_at(&scale, &"md").unwrap(), &8);
        assert_eq!(value.resolve_at(&scale, &"lg").unwrap(), &16);
        assert_eq!(value.resolve_at(&scale, &"xl").unwrap(), &16);
    }

    #[test]
    fn scalar_passes_through_unchanged() {
        let scale = pixel_scale();
        let value: Responsive<&str, u32> = 42.into();
        for name in ["xs", "sm", "md", "lg", "xl"] {
            assert_eq!(value.resolve_at(&scale, &name).unwrap(), &42);
        }
        // Even a bogus current name: there is nothing to cascade.
        assert_eq!(value.resolve_at(&scale, &"nope").unwrap(), &42);
    }

    #[test]
    fn unknown_current_is_a_configuration_error() {
        let scale = pixel_scale();
        let value = full_table();
        let err = value.resolve_at(&scale, &"nope").unwrap_err();
        assert_eq!(err, ResolveError::UnknownBreakpoint);
    }

    #[test]
    fn dead_overrides_never_match() {
        let scale = pixel_scale();
        let value = Responsive::table("base").with("tablet", "dead");
        for name in ["xs", "sm", "md", "lg", "xl"] {
            assert_eq!(value.resolve_at(&scale, &name).unwrap(), &"base");
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let scale = pixel_scale();
        let value = full_table();
        let first = value.resolve_at(&scale, &"lg").unwrap();
        let second = value.resolve_at(&scale, &"lg").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn context_resolution_matches_explicit_resolution() {
        let scale = pixel_scale();
        let value = Responsive::table(1_u32).with("sm", 2).with("lg", 3);
        for name in ["xs", "sm", "md", "lg", "xl"] {
            let cx = Context::new(scale.clone(), name).unwrap();
            assert_eq!(value.resolve(&cx), value.resolve_at(&scale, &name).unwrap());
        }
    }
}
