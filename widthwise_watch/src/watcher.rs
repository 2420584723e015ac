// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Watcher implementation.
//!
//! ## Overview
//!
//! The watcher turns a breakpoint scale into a live "current breakpoint":
//! it registers one width-range subscription per breakpoint with a
//! [`WidthWatch`] facility, moves the current name whenever a subscription
//! reports its predicate turned true, and exposes the result as a read-only
//! [`Context`] snapshot.
//!
//! ## Lifecycle
//!
//! - [`Watcher::mount`] acquires the subscription set. If the facility
//!   refuses a registration partway through, the acquired prefix is released
//!   before the error returns; there is no path out of mount with a partial
//!   set left behind.
//! - [`Watcher::notify`] is the single writer of the current breakpoint.
//!   Redundant, false, stale, and post-teardown notifications are no-ops.
//! - [`Watcher::rebuild`] swaps the scale: the old subscription set is
//!   released in full before the new one is established.
//! - [`Watcher::teardown`] releases every live subscription exactly once;
//!   afterwards the watcher is inert and its context reports
//!   [`WatchError::TornDown`].
//!
//! The ranges of one scale are pairwise disjoint, so at most one
//! subscription can turn true per viewport change.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use widthwise_scale::Scale;

use crate::context::Context;
use crate::types::{Change, ContextChange, ContextObserver, Flip, WatchError, WidthWatch};

/// Generational handle for a registered [`ContextObserver`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u32, u32);

impl ObserverId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Observer slots are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct ObserverSlot<K> {
    generation: u32,
    observer: Option<Box<dyn ContextObserver<K>>>,
}

/// Tracks the current breakpoint by subscribing to one width-range predicate
/// per breakpoint of a [`Scale`].
///
/// The watcher does not own the facility; the embedder passes it in for the
/// operations that touch registrations (mount, rebuild, teardown) and routes
/// the facility's flip notifications back via [`Watcher::notify`] or
/// [`Watcher::pump`]. Everything runs on the embedder's single logical
/// thread; the watcher's notification handler is the only writer of the
/// current breakpoint.
pub struct Watcher<K, T, S: WidthWatch<T>> {
    context: Context<K, T>,
    /// Live subscriptions: facility token and the rank it watches.
    subs: Vec<(S::Token, usize)>,
    observers: Vec<ObserverSlot<K>>,
    free_observers: Vec<usize>,
    torn_down: bool,
}

impl<K: Debug, T: Debug, S: WidthWatch<T>> Debug for Watcher<K, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Watcher")
            .field("context", &self.context)
            .field("subscriptions", &self.subs.len())
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<K, T, S> Watcher<K, T, S>
where
    K: Clone + Ord + Debug,
    T: Copy + PartialOrd + Debug,
    S: WidthWatch<T>,
{
    /// Mount a watcher: register one subscription per breakpoint range.
    ///
    /// The current breakpoint starts at the widest name, then reflects
    /// whichever freshly registered predicate already holds (a facility that
    /// knows its width is visible immediately).
    ///
    /// On [`WatchError::Rejected`] the facility refused a registration and
    /// the already-acquired prefix has been released.
    pub fn mount(scale: Scale<K, T>, source: &mut S) -> Result<Self, WatchError> {
        let subs = acquire_ranges(&scale, source)?;
        let mut rank = scale.len() - 1;
        for &(token, sub_rank) in &subs {
            if source.holds(token) {
                rank = sub_rank;
                break;
            }
        }
        Ok(Self {
            context: Context::from_rank(scale, rank),
            subs,
            observers: Vec::new(),
            free_observers: Vec::new(),
            torn_down: false,
        })
    }

    /// Handle one subscription notification.
    ///
    /// A `true` notification moves the current breakpoint to the one the
    /// token watches and returns the resulting [`Change`]. Everything else is
    /// a no-op returning `None`: `false` notifications, notifications for the
    /// already-current breakpoint, tokens that are stale or unknown (for
    /// example from a subscription set replaced by
    /// [`Watcher::rebuild`]), and any notification after teardown.
    pub fn notify(&mut self, token: S::Token, holds: bool) -> Option<Change<K>> {
        if self.torn_down || !holds {
            return None;
        }
        let rank = self
            .subs
            .iter()
            .find(|&&(t, _)| t == token)
            .map(|&(_, rank)| rank)?;
        if rank == self.context.rank() {
            return None;
        }
        let previous = self.context.current().clone();
        self.context.set_current_rank(rank);
        let change = Change {
            previous,
            current: self.context.current().clone(),
            what: ContextChange::CURRENT,
            revision: self.context.revision(),
        };
        self.deliver(&change);
        Some(change)
    }

    /// Feed a batch of flips through [`Watcher::notify`].
    ///
    /// Convenience for facilities like
    /// [`ManualWidth`](crate::ManualWidth) that report flips in batches.
    /// Returns the last change produced; ranges are disjoint, so a batch from
    /// a single width change produces at most one.
    pub fn pump<I>(&mut self, flips: I) -> Option<Change<K>>
    where
        I: IntoIterator<Item = Flip<S::Token>>,
    {
        let mut last = None;
        for flip in flips {
            if let Some(change) = self.notify(flip.token, flip.holds) {
                last = Some(change);
            }
        }
        last
    }

    /// Replace the scale, re-registering the subscription set from scratch.
    ///
    /// The old set is released in full before the new one is established, so
    /// no notification tied to the old set can alter the current breakpoint
    /// afterwards. The current name is carried over when the new scale still
    /// has it (a live facility wins over the carried name); otherwise it
    /// resets to the widest.
    ///
    /// On [`WatchError::Rejected`] the watcher keeps its previous context but
    /// holds no live subscriptions; tear it down or rebuild again.
    pub fn rebuild(&mut self, scale: Scale<K, T>, source: &mut S) -> Result<Change<K>, WatchError> {
        if self.torn_down {
            return Err(WatchError::TornDown);
        }
        for (token, _) in self.subs.drain(..) {
            source.unregister(token);
        }
        let subs = acquire_ranges(&scale, source)?;

        let previous = self.context.current().clone();
        let ordering_changed = !self.context.scale().order().eq(scale.order());
        let mut rank = scale.rank_of(&previous).unwrap_or(scale.len() - 1);
        for &(token, sub_rank) in &subs {
            if source.holds(token) {
                rank = sub_rank;
                break;
            }
        }
        self.subs = subs;
        self.context.replace_scale(scale, rank);

        let mut what = ContextChange::TABLE;
        if ordering_changed {
            what |= ContextChange::ORDERING;
        }
        if self.context.current() != &previous {
            what |= ContextChange::CURRENT;
        }
        let change = Change {
            previous,
            current: self.context.current().clone(),
            what,
            revision: self.context.revision(),
        };
        self.deliver(&change);
        Ok(change)
    }

    /// Release every live subscription exactly once and go inert.
    ///
    /// Idempotent: a second teardown does nothing. After teardown,
    /// notifications are ignored and [`Watcher::context`] reports
    /// [`WatchError::TornDown`].
    pub fn teardown(&mut self, source: &mut S) {
        if self.torn_down {
            return;
        }
        for (token, _) in self.subs.drain(..) {
            source.unregister(token);
        }
        self.torn_down = true;
    }

    /// The live context snapshot, or [`WatchError::TornDown`].
    pub fn context(&self) -> Result<&Context<K, T>, WatchError> {
        if self.torn_down {
            Err(WatchError::TornDown)
        } else {
            Ok(&self.context)
        }
    }

    /// The current breakpoint name, or [`WatchError::TornDown`].
    pub fn current(&self) -> Result<&K, WatchError> {
        self.context().map(|cx| cx.current())
    }

    /// Whether [`Watcher::teardown`] has run.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of live subscriptions (one per breakpoint while mounted).
    pub fn subscription_count(&self) -> usize {
        self.subs.len()
    }

    /// Register interest in context changes.
    ///
    /// Observers are invoked synchronously on every change, in registration
    /// order, after the snapshot has been updated.
    pub fn observe(&mut self, observer: Box<dyn ContextObserver<K>>) -> ObserverId {
        if let Some(idx) = self.free_observers.pop() {
            let slot = &mut self.observers[idx];
            slot.generation += 1;
            slot.observer = Some(observer);
            ObserverId::new(idx, slot.generation)
        } else {
            self.observers.push(ObserverSlot {
                generation: 1,
                observer: Some(observer),
            });
            ObserverId::new(self.observers.len() - 1, 1)
        }
    }

    /// Remove an observer. Returns false for stale or unknown ids.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let Some(slot) = self.observers.get_mut(id.idx()) else {
            return false;
        };
        if slot.generation == id.1 && slot.observer.is_some() {
            slot.observer = None;
            self.free_observers.push(id.idx());
            true
        } else {
            false
        }
    }

    fn deliver(&mut self, change: &Change<K>) {
        for slot in &mut self.observers {
            if let Some(observer) = slot.observer.as_mut() {
                observer.context_changed(change);
            }
        }
    }
}

/// Register one subscription per breakpoint range, releasing the acquired
/// prefix if the facility refuses one partway through.
fn acquire_ranges<K, T, S>(
    scale: &Scale<K, T>,
    source: &mut S,
) -> Result<Vec<(S::Token, usize)>, WatchError>
where
    K: Clone + Ord + Debug,
    T: Copy + PartialOrd + Debug,
    S: WidthWatch<T>,
{
    struct Rollback<'s, T, S: WidthWatch<T>> {
        source: &'s mut S,
        acquired: Vec<(S::Token, usize)>,
        commit: bool,
        _scalar: core::marker::PhantomData<fn() -> T>,
    }

    impl<T, S: WidthWatch<T>> Drop for Rollback<'_, T, S> {
        fn drop(&mut self) {
            if !self.commit {
                for (token, _) in self.acquired.drain(..) {
                    self.source.unregister(token);
                }
            }
        }
    }

    let mut guard = Rollback {
        source,
        acquired: Vec::with_capacity(scale.len()),
        commit: false,
        _scalar: core::marker::PhantomData,
    };
    for (rank, _, range) in scale.ranges() {
        match guard.source.register(range) {
            Some(token) => guard.acquired.push((token, rank)),
            None => return Err(WatchError::Rejected),
        }
    }
    guard.commit = true;
    Ok(core::mem::take(&mut guard.acquired))
}
