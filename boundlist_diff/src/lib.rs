// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boundlist_diff --heading-base-level=0

//! Boundlist Diff: edit scripts and baseline diff engines.
//!
//! When a bound list replaces its item collection wholesale, the host surface
//! wants to know *what changed* so it can animate minimal row updates instead
//! of rebuilding every view. This crate provides:
//!
//! - [`ListEdit`]: positional edit runs (`Inserted` / `Removed` / `Updated`)
//!   with a fixed application order, see below.
//! - [`DiffOutcome`]: either an edit script or a coarse
//!   [`Reload`](DiffOutcome::Reload) meaning "rebuild all rows".
//! - [`DiffEngine`]: the seam between an adapter and whatever computes the
//!   edits. Choosing an engine is how an adapter is configured for coarse
//!   vs. fine-grained refresh.
//! - [`KeyedDiff`]: a baseline engine for items with a hashable identity key,
//!   covering the changes pagination actually produces (append, prepend,
//!   drop, in-place content edits).
//! - [`ReloadDiff`]: an engine that always requests a full rebuild.
//!
//! ## Edit script convention
//!
//! An edit script transforms the old list into the new list when applied in
//! sequence:
//!
//! 1. `Removed` runs, in **descending** old-list positions,
//! 2. `Inserted` runs, in **ascending** new-list positions,
//! 3. `Updated` runs, in **ascending** new-list positions.
//!
//! Descending removals keep earlier run positions valid while later runs are
//! applied; ascending insertions then index directly into the growing result.
//!
//! ## Minimal example
//!
//! ```rust
//! use boundlist_diff::{DiffEngine, DiffOutcome, KeyedDiff, ListEdit};
//! use boundlist_item::IdentityKeyed;
//!
//! #[derive(Clone, PartialEq)]
//! struct Row(u32, &'static str);
//!
//! impl IdentityKeyed for Row {
//!     type Key = u32;
//!
//!     fn identity_key(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let old = [Row(1, "a"), Row(2, "b")];
//! let new = [Row(1, "a"), Row(2, "b"), Row(3, "c")];
//!
//! // A page arrived at the tail: one insertion run, nothing else.
//! let outcome = KeyedDiff.diff(&old, &new);
//! assert_eq!(
//!     outcome,
//!     DiffOutcome::Edits(vec![ListEdit::Inserted { at: 2, count: 1 }])
//! );
//! ```
//!
//! [`KeyedDiff`] never guesses: survivors that changed relative order, or
//! collections with duplicate keys, degrade to [`DiffOutcome::Reload`].
//! Hosts backed by a platform diff utility can wrap it in their own
//! [`DiffEngine`] implementation and keep the rest of the stack unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod edit;
mod engine;
mod keyed;

pub use edit::{DiffOutcome, ListEdit};
pub use engine::{DiffEngine, ReloadDiff};
pub use keyed::KeyedDiff;
