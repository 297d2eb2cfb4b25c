// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boundlist_bind --heading-base-level=0

//! Boundlist Bind: the observed-value surface of a bound list.
//!
//! Declarative UI layers bind observable values — the item collection, the
//! "is fetching" flags, the scroll callbacks — to a list component. The
//! framework machinery doing the observing is host business; what this crate
//! pins down is the shape each observation lands on: a plain setter on
//! [`BoundList`] that treats an absent value as "no update".
//!
//! [`BoundList`] composes a
//! [`BoundListAdapter`](boundlist_adapter::BoundListAdapter) with an
//! [`EdgeTracker`](boundlist_paging::EdgeTracker) and adds the lifecycle the
//! pair needs when driven by real observations:
//!
//! - [`submit_items`](BoundList::submit_items),
//!   [`set_fetching_from_top`](BoundList::set_fetching_from_top) and
//!   [`set_fetching_from_bottom`](BoundList::set_fetching_from_bottom) take
//!   `Option`s; `None` is a no-op, never an error.
//! - [`on_scrolled`](BoundList::on_scrolled) feeds the tracker with the
//!   adapter's own row count, so threshold arithmetic always sees the same
//!   position space the host renders — and it suppresses an edge's signal
//!   while that edge's fetch indicator is visible, since the visible spinner
//!   *is* the in-flight request.
//! - [`detach`](BoundList::detach) tears the binding down: a detached list
//!   ignores every later delivery, so observations outliving their view
//!   cannot mutate a recycled surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use boundlist_bind::BoundList;
//! use boundlist_diff::KeyedDiff;
//! use boundlist_item::IdentityKeyed;
//! use boundlist_paging::{EdgeEvent, ScrollPhase, VisibleRange};
//! use kurbo::Vec2;
//!
//! #[derive(Clone, PartialEq)]
//! struct Message {
//!     id: u64,
//! }
//!
//! impl IdentityKeyed for Message {
//!     type Key = u64;
//!
//!     fn identity_key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut list = BoundList::new(KeyedDiff);
//!
//! // An observation delivers the first snapshot; `None` would be ignored.
//! list.submit_items(Some((1..=10).map(|id| Message { id }).collect()));
//! assert_eq!(list.adapter().item_count(), 10);
//!
//! // Scrolling down to within 3 rows of the tail requests the next page.
//! let events = list.on_scrolled(Vec2::new(0.0, 20.0), Some(VisibleRange::new(5, 7)));
//! assert_eq!(events.as_slice(), &[EdgeEvent::BottomReached]);
//!
//! // The fetch starts: show the tail spinner row.
//! list.set_fetching_from_bottom(Some(true));
//! assert_eq!(list.adapter().item_count(), 11);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use boundlist_adapter::{BoundListAdapter, Indicators, ItemsUpdate, RowUpdate};
use boundlist_diff::DiffEngine;
use boundlist_item::DifferentiableItem;
use boundlist_paging::{EdgeConfig, EdgeEvent, EdgeTracker, ScrollPhase, VisibleRange};
use kurbo::Vec2;
use smallvec::SmallVec;

/// A bound list: adapter plus edge tracking behind observed-value setters.
///
/// The controller exclusively owns its adapter; hosts read row state through
/// [`adapter`](Self::adapter) and deliver observations through the setters.
/// Every setter and scroll hook is inert once [`detach`](Self::detach) has
/// been called.
#[derive(Debug)]
pub struct BoundList<T, D> {
    adapter: BoundListAdapter<T, D>,
    tracker: EdgeTracker,
    attached: bool,
}

impl<T, D> BoundList<T, D>
where
    T: DifferentiableItem,
    D: DiffEngine<T>,
{
    /// Creates a bound list refreshing through `engine`, with default
    /// edge-tracking configuration.
    #[must_use]
    pub fn new(engine: D) -> Self {
        Self::with_config(engine, EdgeConfig::default())
    }

    /// Creates a bound list with an explicit edge-tracking configuration.
    #[must_use]
    pub fn with_config(engine: D, config: EdgeConfig) -> Self {
        Self {
            adapter: BoundListAdapter::new(engine),
            tracker: EdgeTracker::new(config),
            attached: true,
        }
    }

    /// Returns the adapter, for position/count/kind/item queries.
    #[must_use]
    pub fn adapter(&self) -> &BoundListAdapter<T, D> {
        &self.adapter
    }

    /// Returns the edge tracker's current state.
    #[must_use]
    pub fn tracker(&self) -> &EdgeTracker {
        &self.tracker
    }

    /// Returns `true` until [`detach`](Self::detach) is called.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Tears the binding down.
    ///
    /// All subsequent deliveries — snapshots, flags, scroll events — are
    /// ignored. Detaching is idempotent and irreversible; a new view gets a
    /// new `BoundList`.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Delivers an observed item snapshot.
    ///
    /// `None` (no value yet) is a no-op. Returns what changed, in view
    /// positions, when a snapshot was applied.
    pub fn submit_items(&mut self, items: Option<Vec<T>>) -> Option<ItemsUpdate> {
        if !self.attached {
            return None;
        }
        items.map(|items| self.adapter.set_items(items))
    }

    /// Delivers the observed "fetching older data" flag.
    ///
    /// `None` is a no-op, as is re-delivering the current value. A change
    /// toggles the head indicator row and returns its boundary update.
    pub fn set_fetching_from_top(&mut self, fetching: Option<bool>) -> Option<RowUpdate> {
        if !self.attached {
            return None;
        }
        fetching.and_then(|fetching| self.adapter.set_top_indicator(fetching))
    }

    /// Delivers the observed "fetching newer data" flag.
    ///
    /// Same contract as [`set_fetching_from_top`](Self::set_fetching_from_top),
    /// at the tail boundary.
    pub fn set_fetching_from_bottom(&mut self, fetching: Option<bool>) -> Option<RowUpdate> {
        if !self.attached {
            return None;
        }
        fetching.and_then(|fetching| self.adapter.set_bottom_indicator(fetching))
    }

    /// Delivers a discrete scroll-state transition.
    pub fn on_phase(&mut self, phase: ScrollPhase) {
        if self.attached {
            self.tracker.on_phase(phase);
        }
    }

    /// Delivers a scroll delta plus the host-queried visible bounds.
    ///
    /// The row count the threshold arithmetic runs against is the adapter's
    /// own [`item_count`](BoundListAdapter::item_count), indicator rows
    /// included. An edge whose fetch indicator is currently visible has a
    /// request in flight already; its signal is dropped until the indicator
    /// retracts.
    pub fn on_scrolled(
        &mut self,
        delta: Vec2,
        visible: Option<VisibleRange>,
    ) -> SmallVec<[EdgeEvent; 2]> {
        if !self.attached {
            return SmallVec::new();
        }
        let mut events = self
            .tracker
            .on_scrolled(delta, visible, self.adapter.item_count());
        let indicators = self.adapter.indicators();
        events.retain(|event| match *event {
            EdgeEvent::TopReached => !indicators.contains(Indicators::TOP),
            EdgeEvent::BottomReached => !indicators.contains(Indicators::BOTTOM),
        });
        events
    }

    /// Re-arms the bottom pagination signal without a row-count change.
    ///
    /// See [`EdgeTracker::rearm_bottom`].
    pub fn rearm_bottom(&mut self) {
        if self.attached {
            self.tracker.rearm_bottom();
        }
    }
}
