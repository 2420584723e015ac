// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widthwise Resolve: per-breakpoint value tables and their resolution.
//!
//! ## Overview
//!
//! Presentation code often wants a single scalar (a padding, a column count,
//! a font size) whose value depends on the viewport. This crate models that as
//! a [`Responsive`] value: either a plain [`Responsive::Value`], or a
//! [`Responsive::Table`] holding a mandatory default plus overrides keyed by
//! breakpoint name. Which variant a value is, is carried by the type, never
//! guessed from its shape.
//!
//! Resolution is a mobile-first cascade: starting at the current breakpoint's
//! rank, scan downward toward the narrowest breakpoint and take the first
//! override found, else the default. An override therefore applies to its own
//! breakpoint and everything wider until a more specific override takes over,
//! and an override defined only for a wider breakpoint than the current one
//! never applies.
//!
//! The current breakpoint comes from a `widthwise_watch` [`Context`] snapshot
//! ([`Responsive::resolve`]), or is passed explicitly
//! ([`Responsive::resolve_at`]).
//!
//! # Example
//!
//! ```rust
//! use widthwise_resolve::Responsive;
//! use widthwise_scale::Scale;
//!
//! let scale = Scale::new([("sm", 600_u32), ("md", 960), ("lg", 1280)]).unwrap();
//!
//! // Two columns by default, more on wider viewports.
//! let columns = Responsive::table(2_u32).with("md", 3).with("lg", 4);
//! assert_eq!(columns.resolve_at(&scale, &"sm").unwrap(), &2);
//! assert_eq!(columns.resolve_at(&scale, &"md").unwrap(), &3);
//! assert_eq!(columns.resolve_at(&scale, &"lg").unwrap(), &4);
//!
//! // Plain values resolve to themselves everywhere.
//! let gap: Responsive<&str, u32> = 8.into();
//! assert_eq!(gap.resolve_at(&scale, &"lg").unwrap(), &8);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod resolve;
pub mod value;

pub use resolve::ResolveError;
pub use value::{Responsive, ResponsiveTable};
