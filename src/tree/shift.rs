/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Bulk coordinate shifts along one axis.

use crate::entry::{Entries, Entry};
use crate::tree::ImmutableRangeTree;

impl<E: Entry> ImmutableRangeTree<E> {
    /// Shifts every entry whose coordinate at `dimension` is `>= index`
    /// by `number`, returning the new tree version together with the
    /// entries that moved and the entries that were removed.
    ///
    /// A positive `number` shifts upward; callers are expected to keep the
    /// target region sparse enough that no collisions occur, and to make
    /// sure `coordinate + number` cannot overflow. A negative `number` may
    /// push coordinates below `index`; such entries are removed from the
    /// new version and reported in the second returned list. Survivors are
    /// reported in the first list with their stored coordinates untouched:
    /// the shift is tracked by the caller, not re-encoded into the tree.
    ///
    /// The shift is applied only where the walked dimension equals
    /// `dimension`, which the walk reaches solely at the top level; child
    /// dimensions are carried over as unwalked clones, and the two result
    /// lists are filled only when `dimension` is the last one. For a
    /// multi-dimension tree this means a dimension-1 shift can drop entire
    /// subtrees while the removal list, and therefore [`len`](Self::len),
    /// stay unchanged.
    ///
    /// Calls with `dimension` past the tree's last dimension or with
    /// `number == 0` return an unchanged version of the receiver and empty
    /// lists.
    pub fn insert_at_dimension(
        &self,
        dimension: u64,
        index: i64,
        number: i64,
    ) -> (Self, Entries<E>, Entries<E>) {
        if dimension > self.dimensions() || number == 0 {
            return (self.clone(), Entries::new(), Entries::new());
        }

        let mut modified = Entries::new();
        let mut deleted = Entries::new();

        let top = self.top().insert(
            dimension,
            1,
            self.dimensions(),
            index,
            number,
            &mut modified,
            &mut deleted,
        );

        let tree = self.with_top(top, self.len() - deleted.len() as u64);
        (tree, modified, deleted)
    }
}
