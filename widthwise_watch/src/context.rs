// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only context snapshot exposed to consumers.

use core::fmt::Debug;

use widthwise_scale::Scale;

use crate::types::ContextError;

/// A read-only snapshot of the breakpoint state: the scale (table plus its
/// derived ordering and ranks) and the current breakpoint.
///
/// The watcher owns one and rewrites it on every transition; consumers read
/// it by reference or clone it. The current name always names a breakpoint of
/// the scale ([`Context::new`] validates, and the watcher never writes a name
/// from outside the ordering), so [`Context::rank`] is always defined.
///
/// The revision counter gives each snapshot state a cheap identity: it is
/// bumped exactly once per transition, so two reads with equal revisions saw
/// the same snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Context<K, T> {
    scale: Scale<K, T>,
    current: K,
    rank: usize,
    revision: u64,
}

impl<K, T> Context<K, T>
where
    K: Clone + Ord + Debug,
    T: Copy + PartialOrd + Debug,
{
    /// Build a snapshot directly from a scale and a current name.
    ///
    /// Fails with [`ContextError::UnknownBreakpoint`] if `current` is not on
    /// the scale. Most consumers get their context from a
    /// [`Watcher`](crate::Watcher) instead; direct construction exists for
    /// tests and for resolving against a fixed breakpoint.
    pub fn new(scale: Scale<K, T>, current: K) -> Result<Self, ContextError> {
        let rank = scale
            .rank_of(&current)
            .ok_or(ContextError::UnknownBreakpoint)?;
        Ok(Self {
            scale,
            current,
            rank,
            revision: 0,
        })
    }

    /// Infallible constructor for watcher internals: the rank is known valid.
    pub(crate) fn from_rank(scale: Scale<K, T>, rank: usize) -> Self {
        let (rank, current) = match scale.name_at(rank) {
            Some(name) => (rank, name.clone()),
            None => (scale.len() - 1, scale.widest().clone()),
        };
        Self {
            scale,
            current,
            rank,
            revision: 0,
        }
    }

    /// The breakpoint scale this snapshot was taken against.
    pub fn scale(&self) -> &Scale<K, T> {
        &self.scale
    }

    /// The current breakpoint name.
    pub fn current(&self) -> &K {
        &self.current
    }

    /// Rank of the current breakpoint in the ascending ordering.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Snapshot identity counter; bumped once per transition.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Move the current breakpoint to `rank`, bumping the revision.
    pub(crate) fn set_current_rank(&mut self, rank: usize) {
        if let Some(name) = self.scale.name_at(rank) {
            self.current = name.clone();
            self.rank = rank;
        }
        self.revision += 1;
    }

    /// Replace the scale, moving current to `rank` on the new scale and
    /// bumping the revision.
    pub(crate) fn replace_scale(&mut self, scale: Scale<K, T>, rank: usize) {
        let (rank, current) = match scale.name_at(rank) {
            Some(name) => (rank, name.clone()),
            None => (scale.len() - 1, scale.widest().clone()),
        };
        self.scale = scale;
        self.current = current;
        self.rank = rank;
        self.revision += 1;
    }
}
