// Copyright 2026 the Widthwise Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A width-watch facility driven by explicit width updates.

use alloc::vec::Vec;
use core::fmt::Debug;

use widthwise_scale::WidthRange;

use crate::types::{Flip, WidthWatch};

/// Generational handle for [`ManualWidth`] registrations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ManualToken(u32, u32);

impl ManualToken {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Registration slots are intentionally 32-bit; higher bits are truncated by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    range: WidthRange<T>,
    holds: bool,
    /// Dead slots stay in place so their generation survives for recycling.
    live: bool,
}

/// A [`WidthWatch`] facility the embedder drives by hand.
///
/// Hosts that deliver plain resize events (and tests, and demos) do not need
/// a predicate-aware transport: feed each new width to
/// [`ManualWidth::set_width`] and forward the returned [`Flip`]s to
/// [`Watcher::notify`](crate::Watcher::notify) (or
/// [`Watcher::pump`](crate::Watcher::pump)).
///
/// Tokens are generational, so a token from an unregistered slot never aliases
/// a later registration in the same slot.
#[derive(Clone, Debug)]
pub struct ManualWidth<T> {
    width: Option<T>,
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    limit: Option<usize>,
}

impl<T> Default for ManualWidth<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ManualWidth<T> {
    /// Create a facility with no width observed yet.
    ///
    /// Until the first [`ManualWidth::set_width`], every registration reports
    /// `holds == false`.
    pub fn new() -> Self {
        Self {
            width: None,
            slots: Vec::new(),
            free_list: Vec::new(),
            limit: None,
        }
    }

    /// Create a facility that refuses registrations beyond `limit`.
    ///
    /// Useful for exercising a consumer's partial-acquisition handling.
    pub fn with_register_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Change the registration limit. `None` removes it.
    ///
    /// Affects future registrations only; live ones are untouched.
    pub fn set_register_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    /// Number of live registrations.
    pub fn live_registrations(&self) -> usize {
        self.slots.iter().filter(|slot| slot.live).count()
    }
}

impl<T: Copy + PartialOrd + Debug> ManualWidth<T> {
    /// The last observed width, if any.
    pub fn width(&self) -> Option<T> {
        self.width
    }

    /// Observe a new width and report which predicates flipped.
    ///
    /// For registrations derived from one scale the ranges are disjoint, so a
    /// width change across a threshold yields exactly two flips: the old
    /// range turning false and the new range turning true.
    pub fn set_width(&mut self, width: T) -> Vec<Flip<ManualToken>> {
        self.width = Some(width);
        let mut flips = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if !slot.live {
                continue;
            }
            let now = slot.range.contains(width);
            if now != slot.holds {
                slot.holds = now;
                flips.push(Flip {
                    token: ManualToken::new(idx, slot.generation),
                    holds: now,
                });
            }
        }
        flips
    }
}

impl<T: Copy + PartialOrd + Debug> WidthWatch<T> for ManualWidth<T> {
    type Token = ManualToken;

    fn register(&mut self, range: WidthRange<T>) -> Option<ManualToken> {
        if let Some(limit) = self.limit
            && self.live_registrations() >= limit
        {
            return None;
        }
        let holds = self.width.is_some_and(|w| range.contains(w));
        if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx];
            slot.generation += 1;
            slot.range = range;
            slot.holds = holds;
            slot.live = true;
            Some(ManualToken::new(idx, slot.generation))
        } else {
            self.slots.push(Slot {
                generation: 1,
                range,
                holds,
                live: true,
            });
            Some(ManualToken::new(self.slots.len() - 1, 1))
        }
    }

    fn holds(&self, token: ManualToken) -> bool {
        self.slots
            .get(token.idx())
            .is_some_and(|slot| slot.live && slot.generation == token.1 && slot.holds)
    }

    fn unregister(&mut self, token: ManualToken) {
        let Some(slot) = self.slots.get_mut(token.idx()) else {
            return;
        };
        if slot.live && slot.generation == token.1 {
            slot.live = false;
            slot.holds = false;
            self.free_list.push(token.idx());
        }
    }
}
