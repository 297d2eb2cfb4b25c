// Copyright 2026 the Boundlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id-keyed baseline diff engine.

use alloc::vec::Vec;
use core::hash::Hash;

use boundlist_item::{DifferentiableItem, IdentityKeyed};
use hashbrown::HashMap;

use crate::{DiffEngine, DiffOutcome, ListEdit};

/// Baseline engine for items with a hashable identity key.
///
/// `KeyedDiff` expresses a replacement as an edit script whenever the items
/// that survive it keep their relative order. That covers the shapes a paged
/// data source actually produces: appending a page at the tail, prepending
/// one at the head, dropping evicted rows, and in-place content updates.
///
/// When a replacement cannot be expressed that way, the engine degrades to
/// [`DiffOutcome::Reload`] instead of producing a wrong script:
///
/// - survivors whose relative order changed (a genuine reorder),
/// - duplicate identity keys within the old collection, or among survivors.
///
/// Duplicate keys confined to freshly inserted items are not detected; they
/// violate the identity contract but still produce a correct script here.
///
/// Runs in `O(|old| + |new|)` time and allocates one key map per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedDiff;

impl<T> DiffEngine<T> for KeyedDiff
where
    T: DifferentiableItem + IdentityKeyed,
    T::Key: Eq + Hash,
{
    fn diff(&mut self, old: &[T], new: &[T]) -> DiffOutcome {
        let mut old_index = HashMap::with_capacity(old.len());
        for (i, item) in old.iter().enumerate() {
            if old_index.insert(item.identity_key(), i).is_some() {
                return DiffOutcome::Reload;
            }
        }

        // Survivors in new-list order, paired with their old positions. The
        // old positions must be strictly ascending; anything else is a
        // reorder this engine does not express. A key shared by two new
        // items trips the same check, since both map to one old position.
        let mut survivors: Vec<(usize, usize)> = Vec::new();
        let mut last_old = None;
        for (new_pos, item) in new.iter().enumerate() {
            if let Some(&old_pos) = old_index.get(&item.identity_key()) {
                if last_old.is_some_and(|prev| prev >= old_pos) {
                    return DiffOutcome::Reload;
                }
                last_old = Some(old_pos);
                survivors.push((new_pos, old_pos));
            }
        }

        let mut edits = Vec::new();

        // Removals: old positions without a survivor, descending runs.
        let mut survived_old = survivors.iter().map(|&(_, i)| i).peekable();
        let removed = (0..old.len()).filter(|i| survived_old.next_if_eq(i).is_none());
        for (at, count) in runs(removed).into_iter().rev() {
            edits.push(ListEdit::Removed { at, count });
        }

        // Insertions: new positions without a survivor, ascending runs.
        let mut survived_new = survivors.iter().map(|&(j, _)| j).peekable();
        let inserted = (0..new.len()).filter(|j| survived_new.next_if_eq(j).is_none());
        for (at, count) in runs(inserted) {
            edits.push(ListEdit::Inserted { at, count });
        }

        // Updates: survivors whose contents changed, ascending runs over new
        // positions. Identity-and-contents-equal survivors produce nothing.
        let updated = survivors
            .iter()
            .filter(|&&(new_pos, old_pos)| !old[old_pos].same_contents(&new[new_pos]))
            .map(|&(new_pos, _)| new_pos);
        for (at, count) in runs(updated) {
            edits.push(ListEdit::Updated { at, count });
        }

        DiffOutcome::Edits(edits)
    }
}

/// Collapses an ascending index sequence into maximal `(start, count)` runs.
fn runs(indices: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    for index in indices {
        current = Some(match current {
            Some((start, count)) if start + count == index => (start, count + 1),
            Some(run) => {
                out.push(run);
                (index, 1)
            }
            None => (index, 1),
        });
    }
    if let Some(run) = current {
        out.push(run);
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use boundlist_item::IdentityKeyed;

    use super::{KeyedDiff, runs};
    use crate::{DiffEngine, DiffOutcome, ListEdit};

    #[derive(Clone, Debug, PartialEq)]
    struct Row(u32, &'static str);

    impl IdentityKeyed for Row {
        type Key = u32;

        fn identity_key(&self) -> u32 {
            self.0
        }
    }

    fn edits(old: &[Row], new: &[Row]) -> Vec<ListEdit> {
        match KeyedDiff.diff(old, new) {
            DiffOutcome::Edits(edits) => edits,
            DiffOutcome::Reload => panic!("expected an edit script, got Reload"),
        }
    }

    #[test]
    fn identical_snapshots_are_a_noop() {
        let items = [Row(1, "a"), Row(2, "b")];
        assert_eq!(edits(&items, &items), vec![]);
    }

    #[test]
    fn disjoint_identities_remove_all_then_insert_all() {
        let old = [Row(1, "a"), Row(2, "b")];
        let new = [Row(3, "c"), Row(4, "d"), Row(5, "e")];
        assert_eq!(
            edits(&old, &new),
            vec![
                ListEdit::Removed { at: 0, count: 2 },
                ListEdit::Inserted { at: 0, count: 3 },
            ]
        );
    }

    #[test]
    fn appended_page_is_one_tail_insertion() {
        let old = [Row(1, "a"), Row(2, "b")];
        let new = [Row(1, "a"), Row(2, "b"), Row(3, "c"), Row(4, "d")];
        assert_eq!(edits(&old, &new), vec![ListEdit::Inserted { at: 2, count: 2 }]);
    }

    #[test]
    fn prepended_page_is_one_head_insertion() {
        let old = [Row(3, "c")];
        let new = [Row(1, "a"), Row(2, "b"), Row(3, "c")];
        assert_eq!(edits(&old, &new), vec![ListEdit::Inserted { at: 0, count: 2 }]);
    }

    #[test]
    fn dropped_middle_rows_are_one_removal_run() {
        let old = [Row(1, "a"), Row(2, "b"), Row(3, "c"), Row(4, "d"), Row(5, "e")];
        let new = [Row(1, "a"), Row(4, "d"), Row(5, "e")];
        assert_eq!(edits(&old, &new), vec![ListEdit::Removed { at: 1, count: 2 }]);
    }

    #[test]
    fn removals_are_reported_in_descending_runs() {
        let old = [Row(1, "a"), Row(2, "b"), Row(3, "c"), Row(4, "d")];
        let new = [Row(2, "b"), Row(4, "d")];
        assert_eq!(
            edits(&old, &new),
            vec![
                ListEdit::Removed { at: 2, count: 1 },
                ListEdit::Removed { at: 0, count: 1 },
            ]
        );
    }

    #[test]
    fn content_change_on_a_survivor_is_an_update() {
        let old = [Row(1, "a"), Row(2, "b")];
        let new = [Row(1, "a2"), Row(2, "b"), Row(3, "c")];
        assert_eq!(
            edits(&old, &new),
            vec![
                ListEdit::Inserted { at: 2, count: 1 },
                ListEdit::Updated { at: 0, count: 1 },
            ]
        );
    }

    #[test]
    fn equal_identity_and_contents_produce_no_update() {
        let old = [Row(1, "a"), Row(2, "b")];
        // Same values at the same positions, plus a new head row.
        let new = [Row(9, "z"), Row(1, "a"), Row(2, "b")];
        assert_eq!(edits(&old, &new), vec![ListEdit::Inserted { at: 0, count: 1 }]);
    }

    #[test]
    fn head_and_tail_growth_yields_two_insertion_runs() {
        let old = [Row(2, "b"), Row(3, "c")];
        let new = [Row(1, "a"), Row(2, "b"), Row(3, "c"), Row(4, "d")];
        assert_eq!(
            edits(&old, &new),
            vec![
                ListEdit::Inserted { at: 0, count: 1 },
                ListEdit::Inserted { at: 3, count: 1 },
            ]
        );
    }

    #[test]
    fn reordered_survivors_degrade_to_reload() {
        let old = [Row(1, "a"), Row(2, "b")];
        let new = [Row(2, "b"), Row(1, "a")];
        assert_eq!(KeyedDiff.diff(&old, &new), DiffOutcome::Reload);
    }

    #[test]
    fn duplicate_old_keys_degrade_to_reload() {
        let old = [Row(1, "a"), Row(1, "a")];
        let new = [Row(1, "a")];
        assert_eq!(KeyedDiff.diff(&old, &new), DiffOutcome::Reload);
    }

    #[test]
    fn duplicate_surviving_keys_degrade_to_reload() {
        let old = [Row(1, "a")];
        let new = [Row(1, "a"), Row(1, "a")];
        assert_eq!(KeyedDiff.diff(&old, &new), DiffOutcome::Reload);
    }

    #[test]
    fn empty_to_empty_and_back() {
        let none: [Row; 0] = [];
        let some = [Row(1, "a")];
        assert_eq!(edits(&none, &none), vec![]);
        assert_eq!(edits(&none, &some), vec![ListEdit::Inserted { at: 0, count: 1 }]);
        assert_eq!(edits(&some, &none), vec![ListEdit::Removed { at: 0, count: 1 }]);
    }

    #[test]
    fn runs_collapse_consecutive_indices() {
        assert_eq!(runs([0, 1, 2, 5, 6, 9]), vec![(0, 3), (5, 2), (9, 1)]);
        assert_eq!(runs(core::iter::empty()), vec![]);
    }
}
