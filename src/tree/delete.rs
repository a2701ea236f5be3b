/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Removal with empty-ancestor pruning.

use std::borrow::Borrow;
use std::sync::Arc;

use crate::entry::Entry;
use crate::ordered::OrderedNodes;
use crate::tree::ImmutableRangeTree;

impl<E: Entry> ImmutableRangeTree<E> {
    /// Removes `entries` and returns the tree version without them.
    ///
    /// Each entry is located by its full coordinate path; paths that are
    /// not present contribute nothing. Intermediate nodes whose child list
    /// becomes empty are pruned on the way back up, so the new version
    /// never carries childless inner nodes.
    ///
    /// The receiver is never modified and keeps answering queries with its
    /// original contents.
    pub fn delete<I>(&self, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut top = self.top().clone();
        let mut deleted = 0u64;

        for entry in entries {
            if self.delete_entry(&mut top, entry.borrow()) {
                deleted += 1;
            }
        }

        let tree = self.with_top(top, self.len() - deleted);
        #[cfg(all(feature = "unittest", not(miri)))]
        tree.check_invariants();
        tree
    }

    /// Removes one entry's path from `top`. Returns whether the full path
    /// existed.
    fn delete_entry(&self, top: &mut OrderedNodes<E>, entry: &E) -> bool {
        // Probe first: record the slot index of every inner level and bail
        // out on the first miss, before anything has been cloned.
        let mut inner = Vec::with_capacity((self.dimensions() - 1) as usize);
        {
            let mut list = &*top;
            for dimension in 1..=self.dimensions() {
                let (node, index) = list.get(entry.value_at_dimension(dimension));
                let Some(node) = node else {
                    return false;
                };
                if !self.is_last_dimension(dimension) {
                    inner.push(index);
                    list = &node.children;
                }
            }
        }

        Self::remove_path(top, &inner, entry.value_at_dimension(self.dimensions()));
        true
    }

    /// Walks the recorded path copy-on-write, removes the leaf, and prunes
    /// every ancestor left without children.
    fn remove_path(list: &mut OrderedNodes<E>, inner: &[usize], leaf_value: i64) {
        match inner {
            [] => list.delete(leaf_value),
            [index, rest @ ..] => {
                let now_empty = {
                    let node = Arc::make_mut(&mut list[*index]);
                    Self::remove_path(&mut node.children, rest, leaf_value);
                    node.children.is_empty()
                };
                if now_empty {
                    list.delete_at(*index);
                }
            }
        }
    }
}
