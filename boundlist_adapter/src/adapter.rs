// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adapter: item snapshot, indicator flags, and position arithmetic.

use alloc::vec::Vec;

use boundlist_diff::{DiffEngine, DiffOutcome};
use boundlist_item::DifferentiableItem;

use crate::{Indicators, ItemsUpdate, RowKind, RowUpdate};

/// Maps an ordered item collection onto a view-position space.
///
/// The adapter exclusively owns its item snapshot and its two indicator
/// flags; the host surface only reads, via the position queries. The view
/// position space is the item index space shifted by the *head offset*: one
/// extra position at the front while the top indicator is visible, and one
/// extra position after the last data row while the bottom indicator is.
///
/// All queries are total: a position that lands on an indicator row or
/// outside the collection answers `None`, never a panic.
///
/// Mutations report what changed as a value. Indicator toggles yield at most
/// one boundary [`RowUpdate`]; wholesale replacement yields an
/// [`ItemsUpdate`] produced by the configured [`DiffEngine`].
#[derive(Debug)]
pub struct BoundListAdapter<T, D> {
    items: Vec<T>,
    indicators: Indicators,
    engine: D,
}

impl<T, D> BoundListAdapter<T, D>
where
    T: DifferentiableItem,
    D: DiffEngine<T>,
{
    /// Creates an empty adapter refreshing through `engine`.
    #[must_use]
    pub fn new(engine: D) -> Self {
        Self {
            items: Vec::new(),
            indicators: Indicators::empty(),
            engine,
        }
    }

    /// Returns the current item snapshot, without indicator rows.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` if the adapter holds no data rows.
    ///
    /// Indicator rows do not count; a list showing only a spinner is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the currently reserved indicator rows.
    #[must_use]
    pub const fn indicators(&self) -> Indicators {
        self.indicators
    }

    /// Number of synthetic rows preceding the first data row (0 or 1).
    #[must_use]
    pub fn head_offset(&self) -> usize {
        usize::from(self.indicators.contains(Indicators::TOP))
    }

    /// Total number of view positions, indicator rows included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len() + self.indicators.reserved()
    }

    /// Classifies a view position.
    ///
    /// The top indicator claims position 0 while visible; the bottom
    /// indicator claims the last position. Everything else is a data row.
    /// Positions at or beyond [`item_count`](Self::item_count) classify as
    /// [`RowKind::Item`] and answer `None` from the item queries.
    #[must_use]
    pub fn row_kind(&self, position: usize) -> RowKind {
        if self.indicators.contains(Indicators::TOP) && position == 0 {
            RowKind::TopIndicator
        } else if self.indicators.contains(Indicators::BOTTOM)
            && position + 1 == self.item_count()
        {
            RowKind::BottomIndicator
        } else {
            RowKind::Item
        }
    }

    /// Maps a view position to its underlying item index.
    ///
    /// Returns `None` for indicator rows and out-of-bounds positions.
    #[must_use]
    pub fn index_of_position(&self, position: usize) -> Option<usize> {
        if self.row_kind(position) != RowKind::Item {
            return None;
        }
        let index = position - self.head_offset();
        (index < self.items.len()).then_some(index)
    }

    /// Maps an item index to its view position.
    ///
    /// The mapping is defined for any index; whether the position currently
    /// holds a data row depends on the snapshot length.
    #[must_use]
    pub fn position_of_index(&self, index: usize) -> usize {
        index + self.head_offset()
    }

    /// Returns the item shown at a view position.
    ///
    /// Indicator rows and out-of-bounds positions answer `None`.
    #[must_use]
    pub fn item(&self, position: usize) -> Option<&T> {
        self.index_of_position(position)
            .and_then(|index| self.items.get(index))
    }

    /// Replaces the item collection wholesale.
    ///
    /// The configured engine diffs the previous snapshot against `items`;
    /// the resulting edits are shifted into view positions before being
    /// returned. Indicator flags are untouched.
    pub fn set_items(&mut self, items: Vec<T>) -> ItemsUpdate {
        let outcome = self.engine.diff(&self.items, &items);
        self.items = items;
        match outcome {
            DiffOutcome::Reload => ItemsUpdate::Reloaded,
            DiffOutcome::Edits(mut edits) => {
                let offset = self.head_offset();
                if offset > 0 {
                    for edit in &mut edits {
                        *edit = edit.offset_by(offset);
                    }
                }
                ItemsUpdate::Edits(edits)
            }
        }
    }

    /// Shows or hides the head loading indicator.
    ///
    /// Setting the flag to its current value is a no-op and returns `None`;
    /// otherwise exactly one boundary update at position 0 is returned.
    pub fn set_top_indicator(&mut self, visible: bool) -> Option<RowUpdate> {
        if self.indicators.contains(Indicators::TOP) == visible {
            return None;
        }
        self.indicators.set(Indicators::TOP, visible);
        Some(if visible {
            RowUpdate::Inserted { position: 0 }
        } else {
            RowUpdate::Removed { position: 0 }
        })
    }

    /// Shows or hides the tail loading indicator.
    ///
    /// Setting the flag to its current value is a no-op and returns `None`.
    /// The boundary position is the indicator row's own position — the last
    /// position after an insertion, the former last position after a
    /// removal — which is the same value either way.
    pub fn set_bottom_indicator(&mut self, visible: bool) -> Option<RowUpdate> {
        if self.indicators.contains(Indicators::BOTTOM) == visible {
            return None;
        }
        self.indicators.set(Indicators::BOTTOM, visible);
        let position = self.items.len() + self.head_offset();
        Some(if visible {
            RowUpdate::Inserted { position }
        } else {
            RowUpdate::Removed { position }
        })
    }
}
