// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boundlist_paging --heading-base-level=0

//! Boundlist Paging: scroll-driven pagination signals.
//!
//! An infinitely scrolling list needs to know two things its rendering
//! surface won't tell it directly: "the user is running out of rows below"
//! and "the user pulled back to the very top". This crate computes both from
//! the raw material a host surface already has — per-tick scroll deltas,
//! discrete scroll-state transitions, and synchronous first/last visible
//! position queries — and hands them back as event values:
//!
//! - [`ScrollPhase`]: idle / dragging / settling, as delivered by the host.
//! - [`EdgeTracker`]: the small state machine. Downward scrolling fires
//!   [`EdgeEvent::BottomReached`] when the last visible position crosses the
//!   configured threshold from the tail (debounced per item count by
//!   default); upward scrolling fires [`EdgeEvent::TopReached`] at position
//!   0, but only when armed by a user-initiated drag, so programmatic
//!   scroll resets stay silent.
//! - [`EdgeConfig`]: the threshold (a [`core::num::NonZeroUsize`]; zero is
//!   unrepresentable) and the debounce toggle.
//!
//! Like its sibling crates, this one accepts pre-computed information and
//! returns events; it never calls back into the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use boundlist_paging::{EdgeEvent, EdgeTracker, ScrollPhase, VisibleRange};
//! use kurbo::Vec2;
//!
//! let mut tracker = EdgeTracker::default();
//!
//! // Ten rows on screen 5..=7 of 10; threshold 3 puts the trigger at 7.
//! let events = tracker.on_scrolled(Vec2::new(0.0, 16.0), Some(VisibleRange::new(5, 7)), 10);
//! assert_eq!(events.as_slice(), &[EdgeEvent::BottomReached]);
//!
//! // The same offset keeps matching, but the signal is debounced until the
//! // requested page actually arrives.
//! let events = tracker.on_scrolled(Vec2::new(0.0, 4.0), Some(VisibleRange::new(5, 7)), 10);
//! assert!(events.is_empty());
//!
//! // The top edge only fires under a user-initiated drag.
//! tracker.on_phase(ScrollPhase::Dragging);
//! let events = tracker.on_scrolled(Vec2::new(0.0, -8.0), Some(VisibleRange::new(0, 2)), 10);
//! assert_eq!(events.as_slice(), &[EdgeEvent::TopReached]);
//! ```
//!
//! This crate is `no_std` (events spill to `alloc` only past the inline
//! capacity, which a single tick never exceeds).

#![no_std]

mod edge;
mod phase;

pub use edge::{DEFAULT_BOTTOM_THRESHOLD, EdgeConfig, EdgeEvent, EdgeTracker, VisibleRange};
pub use phase::ScrollPhase;
