// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge tracking: when scrolling should trigger a page fetch.

use core::num::NonZeroUsize;

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::ScrollPhase;

/// Default distance from the tail, in rows, at which to request more data.
pub const DEFAULT_BOTTOM_THRESHOLD: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Configuration for an [`EdgeTracker`].
///
/// A zero bottom threshold is unrepresentable: the field is a
/// [`NonZeroUsize`], so misconfiguration is rejected when the config is
/// built, not discovered as silent wrong behavior later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Fire the bottom signal when this many rows remain below the viewport.
    pub fetch_from_bottom_threshold: NonZeroUsize,
    /// Suppress repeat bottom signals until the row count changes.
    ///
    /// The trigger condition keeps holding at an unchanged scroll offset, so
    /// without debouncing every further scroll event re-fires the signal
    /// while a fetch is still in flight. Set to `false` to get that raw
    /// behavior and debounce elsewhere.
    pub debounce_bottom: bool,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            fetch_from_bottom_threshold: DEFAULT_BOTTOM_THRESHOLD,
            debounce_bottom: true,
        }
    }
}

/// First and last visible view positions, as queried from the host surface.
///
/// `first <= last`; both are positions in the adapter's view space, with
/// indicator rows included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    /// First fully or partially visible position.
    pub first: usize,
    /// Last fully or partially visible position.
    pub last: usize,
}

impl VisibleRange {
    /// Creates a range from host-queried first/last visible positions.
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }
}

/// A pagination signal produced by scrolling near an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeEvent {
    /// The viewport reached position 0 under a user-initiated drag.
    TopReached,
    /// The viewport came within the configured threshold of the tail.
    BottomReached,
}

/// Turns scroll deltas and visible-position bounds into pagination signals.
///
/// The tracker is fed by the host on every scroll tick and on every discrete
/// scroll-state transition; it owns the little state both edges need:
///
/// - **Bottom**: on a downward (non-negative `y`) delta, fires
///   [`EdgeEvent::BottomReached`] when the last visible position equals
///   `item_count - fetch_from_bottom_threshold`. With debouncing on (the
///   default) it fires at most once per item count; a changed count — the
///   requested page arrived — re-arms it, as does [`rearm_bottom`].
/// - **Top**: armed only once a [`ScrollPhase::Dragging`] transition has
///   been observed. On an upward (non-positive `y`) delta with position 0
///   visible, fires [`EdgeEvent::TopReached`] once and disarms until the
///   next drag begins, so a programmatic snap back to the top never fires.
///
/// [`rearm_bottom`]: Self::rearm_bottom
#[derive(Debug, Default)]
pub struct EdgeTracker {
    config: EdgeConfig,
    phase: ScrollPhase,
    /// Set on a `Dragging` transition, cleared when the top signal fires.
    top_armed: bool,
    /// Item count at which the bottom signal last fired.
    bottom_fired_at: Option<usize>,
}

impl EdgeTracker {
    /// Creates a tracker with the given configuration.
    #[must_use]
    pub fn new(config: EdgeConfig) -> Self {
        Self {
            config,
            phase: ScrollPhase::Idle,
            top_armed: false,
            bottom_fired_at: None,
        }
    }

    /// Returns the tracker's configuration.
    #[must_use]
    pub const fn config(&self) -> EdgeConfig {
        self.config
    }

    /// Returns the most recently delivered scroll phase.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Delivers a discrete scroll-state transition.
    ///
    /// Entering [`ScrollPhase::Dragging`] arms the top-edge signal.
    pub fn on_phase(&mut self, phase: ScrollPhase) {
        self.phase = phase;
        if phase.is_dragging() {
            self.top_armed = true;
        }
    }

    /// Delivers a scroll delta plus the host-queried visible bounds.
    ///
    /// `item_count` is the adapter's total position count, indicator rows
    /// included. An empty viewport (`visible == None`) produces no events.
    /// At most one event per edge is returned per call.
    pub fn on_scrolled(
        &mut self,
        delta: Vec2,
        visible: Option<VisibleRange>,
        item_count: usize,
    ) -> SmallVec<[EdgeEvent; 2]> {
        let mut events = SmallVec::new();

        // New data arrived since the bottom signal fired: re-arm.
        if self.bottom_fired_at.is_some_and(|count| count != item_count) {
            self.bottom_fired_at = None;
        }

        let Some(visible) = visible else {
            return events;
        };

        if delta.y >= 0.0
            && let Some(trigger) =
                item_count.checked_sub(self.config.fetch_from_bottom_threshold.get())
            && visible.last == trigger
            && (!self.config.debounce_bottom || self.bottom_fired_at.is_none())
        {
            self.bottom_fired_at = Some(item_count);
            events.push(EdgeEvent::BottomReached);
        }

        if delta.y <= 0.0 && self.top_armed && visible.first == 0 {
            self.top_armed = false;
            events.push(EdgeEvent::TopReached);
        }

        events
    }

    /// Re-arms the bottom signal without a row-count change.
    ///
    /// For hosts whose fetch completes without growing the list (an empty
    /// last page, a failed request that should be retryable).
    pub fn rearm_bottom(&mut self) {
        self.bottom_fired_at = None;
    }
}
