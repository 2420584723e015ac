// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widthwise Watch: keep a "current breakpoint" synchronized with the
//! viewport.
//!
//! ## Overview
//!
//! This crate connects a `widthwise_scale` breakpoint scale to a live
//! viewport. A [`Watcher`] registers one width-range subscription per
//! breakpoint with a [`WidthWatch`] facility and moves its current
//! breakpoint whenever a subscription reports that its predicate turned
//! true. The result is exposed as a read-only [`Context`] snapshot:
//! {scale, current name, current rank, revision}.
//!
//! ## The facility seam
//!
//! The crate does not observe the viewport itself. [`WidthWatch`] abstracts
//! "a facility that can say whether a width-range predicate currently holds,
//! and deliver a notification each time that truth value flips". Embedders
//! with a predicate-aware host implement the trait; everyone else uses
//! [`ManualWidth`], which is driven by explicit width updates and computes
//! the flips itself.
//!
//! ## Lifecycle and delivery
//!
//! Mount acquires the subscription set (releasing any acquired prefix if the
//! facility refuses partway), rebuild swaps it atomically with respect to
//! notifications (full release before re-acquisition), and teardown releases
//! it exactly once. Consumers either read the snapshot on demand or register
//! a [`ContextObserver`] to be called synchronously on every [`Change`].
//!
//! # Example
//!
//! ```rust
//! use widthwise_scale::Scale;
//! use widthwise_watch::{ManualWidth, Watcher};
//!
//! let scale = Scale::new([("sm", 600_u32), ("md", 960), ("lg", 1280)]).unwrap();
//! let mut manual = ManualWidth::new();
//! let mut watcher = Watcher::mount(scale, &mut manual).unwrap();
//!
//! // No width observed yet: the widest breakpoint is current.
//! assert_eq!(watcher.current().unwrap(), &"lg");
//!
//! // Drive the viewport; forward the flips to the watcher.
//! let change = watcher.pump(manual.set_width(700)).unwrap();
//! assert_eq!(change.current, "md");
//! assert_eq!(watcher.context().unwrap().rank(), 1);
//!
//! // Teardown releases every subscription; later notifications are inert.
//! watcher.teardown(&mut manual);
//! assert_eq!(manual.live_registrations(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod context;
pub mod manual;
pub mod types;
pub mod watcher;

pub use context::Context;
pub use manual::{ManualToken, ManualWidth};
pub use types::{Change, ContextChange, ContextError, ContextObserver, Flip, WatchError, WidthWatch};
pub use watcher::{ObserverId, Watcher};
