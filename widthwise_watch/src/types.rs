// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the watch layer: the facility trait, flips, change
//! reporting, observers, and errors.

use core::fmt;
use core::fmt::Debug;

use widthwise_scale::WidthRange;

/// A facility that watches width-range predicates over the live viewport.
///
/// The watch layer does not observe the viewport itself; the embedder supplies
/// something that can. A facility answers two questions per registration:
/// does the predicate currently hold, and (out of band) when did its truth
/// value flip. Flip delivery is the embedder's job: collect them from the
/// host and feed them to [`Watcher::notify`](crate::Watcher::notify).
///
/// [`ManualWidth`](crate::ManualWidth) is a ready-made implementation driven
/// by explicit width updates, suitable for tests, demos, and hosts that
/// deliver plain resize events.
///
/// Implementations must not hand out a token equal to one that is still
/// registered; tokens may be recycled after `unregister`.
pub trait WidthWatch<T> {
    /// Registration handle.
    type Token: Copy + Eq + Debug;

    /// Register interest in a width range.
    ///
    /// Returns `None` if the facility refuses the registration (for example
    /// a capacity limit); the caller is then responsible for releasing any
    /// registrations it already acquired.
    fn register(&mut self, range: WidthRange<T>) -> Option<Self::Token>;

    /// Whether the registered predicate currently holds.
    ///
    /// Unknown or stale tokens report `false`.
    fn holds(&self, token: Self::Token) -> bool;

    /// Remove a registration. Unknown or stale tokens are ignored.
    fn unregister(&mut self, token: Self::Token);
}

/// A truth-value flip for one registration, produced when the viewport width
/// changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Flip<Tok> {
    /// The registration whose predicate flipped.
    pub token: Tok,
    /// The predicate's new truth value.
    pub holds: bool,
}

bitflags::bitflags! {
    /// Which fields of the context snapshot changed.
    ///
    /// Carried on every [`Change`]. A viewport crossing reports `CURRENT`;
    /// swapping the scale reports `TABLE`, plus `ORDERING` when the ordered
    /// name sequence differs and `CURRENT` when the current name could not be
    /// carried over.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ContextChange: u8 {
        /// The breakpoint table was replaced.
        const TABLE    = 0b0000_0001;
        /// The ascending name ordering differs from the previous table's.
        const ORDERING = 0b0000_0010;
        /// The current breakpoint name changed.
        const CURRENT  = 0b0000_0100;
    }
}

/// A context snapshot transition.
///
/// Returned by [`Watcher::notify`](crate::Watcher::notify) and
/// [`Watcher::rebuild`](crate::Watcher::rebuild), and delivered synchronously
/// to every registered [`ContextObserver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change<K> {
    /// Current breakpoint before the transition.
    pub previous: K,
    /// Current breakpoint after the transition.
    pub current: K,
    /// Which snapshot fields changed.
    pub what: ContextChange,
    /// Revision of the snapshot after the transition.
    pub revision: u64,
}

/// Consumer interest in context changes.
///
/// Observers are invoked synchronously, after the snapshot has been updated,
/// in registration order. They receive the [`Change`] itself rather than the
/// watcher, so consumers stay decoupled from any particular refresh
/// mechanism.
pub trait ContextObserver<K> {
    /// Called once per context transition.
    fn context_changed(&mut self, change: &Change<K>);
}

/// Errors from the watcher lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WatchError {
    /// The facility refused a width-range registration during mount or
    /// rebuild. Registrations acquired before the refusal have been
    /// released.
    Rejected,
    /// The watcher was torn down; its subscriptions are gone and its context
    /// is no longer live.
    TornDown,
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => f.write_str("facility refused a width-range registration"),
            Self::TornDown => f.write_str("watcher has been torn down"),
        }
    }
}

impl core::error::Error for WatchError {}

/// Error from [`Context::new`](crate::Context::new).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// The supplied current name is not a breakpoint of the scale.
    UnknownBreakpoint,
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBreakpoint => {
                f.write_str("current breakpoint is not on the scale")
            }
        }
    }
}

impl core::error::Error for ContextError {}
