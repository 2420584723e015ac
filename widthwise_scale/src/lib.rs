// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widthwise Scale: a named breakpoint scale for the viewport width axis.
//!
//! ## Overview
//!
//! A [`Scale`] maps caller-defined breakpoint names to numeric thresholds and
//! derives everything the rest of Widthwise needs from them:
//!
//! - the sequence of names sorted ascending by threshold, and the inverse
//!   rank mapping (name → zero-based position);
//! - one exclusive [`WidthRange`] per breakpoint, pairwise disjoint and
//!   jointly covering the whole axis, so any width belongs to exactly one
//!   breakpoint;
//! - direct width lookups ([`Scale::classify`], [`Scale::at_least`],
//!   [`Scale::between`]).
//!
//! A threshold is the inclusive upper bound of its breakpoint's range; the
//! narrowest breakpoint implicitly starts at the minimum width and the widest
//! is open-ended. Misconfigured tables (empty, shared thresholds, repeated
//! names) are rejected at construction with a [`ScaleError`] rather than
//! producing silently wrong ranges.
//!
//! The scale is pure data: no subscriptions, no state. Keeping a live
//! "current breakpoint" synchronized with viewport changes is the job of the
//! `widthwise_watch` crate, and per-breakpoint value tables are resolved by
//! `widthwise_resolve`.
//!
//! # Example
//!
//! ```rust
//! use widthwise_scale::{Scale, WidthRange};
//!
//! // Input order does not matter; the ordering is derived.
//! let scale = Scale::new([("md", 960_u32), ("xs", 0), ("sm", 600)]).unwrap();
//! assert_eq!(scale.order().collect::<Vec<_>>(), [&"xs", &"sm", &"md"]);
//! assert_eq!(scale.rank_of(&"sm"), Some(1));
//!
//! // Each breakpoint owns an exclusive slice of the axis.
//! let ranges: Vec<_> = scale.ranges().map(|(_, _, r)| r).collect();
//! assert_eq!(
//!     ranges,
//!     [
//!         WidthRange::UpTo(0),
//!         WidthRange::Between(0, 600),
//!         WidthRange::Above(600),
//!     ]
//! );
//!
//! // A width classifies to exactly one breakpoint.
//! assert_eq!(*scale.classify(600).1, "sm");
//! assert_eq!(*scale.classify(601).1, "md");
//! ```
//!
//! ## Float semantics
//!
//! This crate assumes no NaNs for floating-point thresholds and widths.
//! Construction rejects incomparable thresholds; classification of an
//! incomparable width falls back to the widest breakpoint.

#![no_std]

extern crate alloc;

pub mod scale;
pub mod types;

pub use scale::Scale;
pub use types::{ScaleError, WidthRange};
