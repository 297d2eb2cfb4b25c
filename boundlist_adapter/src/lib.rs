// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boundlist_adapter --heading-base-level=0

//! Boundlist Adapter: an ordered item collection behind a view-position space.
//!
//! [`BoundListAdapter`] owns the current snapshot of a diffable item
//! collection and answers the queries a list-rendering surface makes while
//! laying out rows: how many positions exist, what kind of row a position
//! holds, and which item backs it. Two synthetic *indicator rows* — loading
//! spinners at the head and tail — can be reserved independently; while
//! reserved, they shift every data row's position by the head offset.
//!
//! The adapter never calls into the host. Each mutation returns a value
//! describing the change:
//!
//! - [`BoundListAdapter::set_items`] replaces the collection wholesale and
//!   returns an [`ItemsUpdate`] computed by the configured
//!   [`DiffEngine`](boundlist_diff::DiffEngine) — either minimal edits in
//!   view positions, or a coarse reload.
//! - The indicator setters return at most one boundary [`RowUpdate`], so the
//!   host can animate a single row in or out without disturbing scroll
//!   position. Re-setting a flag to its current value returns `None`.
//!
//! ## Minimal example
//!
//! ```rust
//! use boundlist_adapter::{BoundListAdapter, RowKind, RowUpdate};
//! use boundlist_diff::KeyedDiff;
//! use boundlist_item::IdentityKeyed;
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
//! let mut adapter = BoundListAdapter::new(KeyedDiff);
//! adapter.set_items(vec![Message { id: 1 }, Message { id: 2 }]);
//!
//! // A fetch of older messages starts: reserve the head indicator row.
//! let update = adapter.set_top_indicator(true);
//! assert_eq!(update, Some(RowUpdate::Inserted { position: 0 }));
//!
//! assert_eq!(adapter.item_count(), 3);
//! assert_eq!(adapter.row_kind(0), RowKind::TopIndicator);
//! // Data rows shifted down by one.
//! assert_eq!(adapter.item(1).map(|m| m.id), Some(1));
//! ```
//!
//! This crate deliberately does **not** know about views, recycling pools, or
//! scroll events. Hosts own rendering; pagination signals live in
//! `boundlist_paging`; the observed-value binding surface lives in
//! `boundlist_bind`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod row;

pub use adapter::BoundListAdapter;
pub use row::{Indicators, ItemsUpdate, RowKind, RowUpdate};
