/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Batch insertion.

use std::sync::Arc;

use crate::cache::DimensionCache;
use crate::entry::Entry;
use crate::node::RangeNode;
use crate::ordered::OrderedNodes;
use crate::tree::ImmutableRangeTree;

impl<E: Entry> ImmutableRangeTree<E> {
    /// Adds `entries` and returns the tree version containing them.
    ///
    /// An entry whose full coordinate path is already present overwrites
    /// the stored entry at that path without changing [`len`](Self::len);
    /// an entry with a new path grows the count by one. An empty batch
    /// returns an unchanged version of the receiver.
    ///
    /// The receiver is never modified and keeps answering queries with its
    /// original contents.
    pub fn add<I>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = Arc<E>>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return self.clone();
        }

        let mut cache = DimensionCache::new(self.dimensions());
        let mut top = self.top().clone();
        let mut added = 0u64;

        for entry in entries {
            self.add_entry(&mut top, &mut cache, entry, &mut added);
        }

        let tree = self.with_top(top, self.len() + added);
        #[cfg(all(feature = "unittest", not(miri)))]
        tree.check_invariants();
        tree
    }

    fn add_entry(
        &self,
        top: &mut OrderedNodes<E>,
        cache: &mut DimensionCache,
        entry: Arc<E>,
        added: &mut u64,
    ) {
        self.add_at_dimension(top, cache, entry, 1, added);
    }

    fn add_at_dimension(
        &self,
        list: &mut OrderedNodes<E>,
        cache: &mut DimensionCache,
        entry: Arc<E>,
        dimension: u64,
        added: &mut u64,
    ) {
        if self.is_last_dimension(dimension) {
            let value = entry.value_at_dimension(dimension);
            let overwritten = list.add(Arc::new(RangeNode::new(value, entry)));
            if !overwritten {
                *added += 1;
            }
            return;
        }

        let (slot, created) = list.get_or_add(&entry, dimension);
        let value = slot.value;
        if created {
            // A node created this batch already owns a fresh child list.
            cache.insert(dimension, value);
        } else if !cache.exists(dimension, value) {
            // First crossing of this parent in the batch: replace it with
            // a clone holding a shallow copy of the child list, so the
            // list referenced by older tree versions stays untouched.
            // Later entries of the batch find the coordinate in the cache
            // and reuse the clone.
            cache.insert(dimension, value);
            *slot = Arc::new((**slot).clone());
        }

        // Resolves in place for nodes created or cloned above. The copy
        // path is reachable when two parents on different paths share a
        // coordinate at the same level, which the per-level cache cannot
        // tell apart.
        let node = Arc::make_mut(slot);
        self.add_at_dimension(&mut node.children, cache, entry, dimension + 1, added);
    }
}
