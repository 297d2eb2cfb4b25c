// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row classification and row-update vocabulary.

use alloc::vec::Vec;

use boundlist_diff::ListEdit;

bitflags::bitflags! {
    /// Synthetic indicator rows currently reserved in the position space.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Indicators: u8 {
        /// A loading row reserved at position 0.
        const TOP    = 0b0000_0001;
        /// A loading row reserved after the last data row.
        const BOTTOM = 0b0000_0010;
    }
}

impl Indicators {
    /// Number of positions this set reserves.
    #[must_use]
    pub const fn reserved(self) -> usize {
        self.bits().count_ones() as usize
    }
}

/// What a view position holds.
///
/// Hosts first ask for the kind, then either render the matching indicator
/// or bind the data row obtained from the adapter's item query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// The head loading indicator.
    TopIndicator,
    /// A data row; resolve the concrete view from the item itself.
    Item,
    /// The tail loading indicator.
    BottomIndicator,
}

/// A single structural change at one boundary of the position space.
///
/// Indicator toggles produce exactly one of these — never a full refresh —
/// so the host surface can animate the boundary row without disturbing
/// scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowUpdate {
    /// A row appeared at `position`.
    Inserted {
        /// The new row's position.
        position: usize,
    },
    /// The row formerly at `position` disappeared.
    Removed {
        /// The removed row's former position.
        position: usize,
    },
}

/// Outcome of replacing the item collection wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsUpdate {
    /// No edit script was available; rebuild all rows.
    Reloaded,
    /// Minimal edits, already expressed in view positions (head-indicator
    /// offset applied).
    Edits(Vec<ListEdit>),
}
