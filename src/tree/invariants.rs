/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks, compiled only under the `unittest`
//! feature and run after every add and delete.

use crate::entry::Entry;
use crate::ordered::OrderedNodes;
use crate::tree::ImmutableRangeTree;

impl<E: Entry> ImmutableRangeTree<E> {
    /// Panics when the tree violates a structural invariant:
    /// strictly ascending coordinates in every list, no childless inner
    /// node, and a stored count matching the reachable leaves.
    pub(crate) fn check_invariants(&self) {
        let leaves = self.check_list(self.top(), 1);
        assert_eq!(
            leaves,
            self.len(),
            "stored entry count does not match reachable leaves"
        );
    }

    fn check_list(&self, list: &OrderedNodes<E>, dimension: u64) -> u64 {
        let mut leaves = 0;
        let mut previous: Option<i64> = None;

        for i in 0..list.len() {
            let node = &list[i];
            if let Some(previous) = previous {
                assert!(
                    previous < node.value,
                    "coordinates not strictly ascending at dimension {dimension}: \
                     {previous} before {}",
                    node.value
                );
            }
            previous = Some(node.value);

            if self.is_last_dimension(dimension) {
                leaves += 1;
            } else {
                assert!(
                    !node.children.is_empty(),
                    "childless inner node {} at dimension {dimension}",
                    node.value
                );
                leaves += self.check_list(&node.children, dimension + 1);
            }
        }

        leaves
    }
}
