/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Range traversal and buffered queries.

use std::sync::Arc;

use crate::entry::{Entries, Entry, Interval};
use crate::ordered::OrderedNodes;
use crate::tree::ImmutableRangeTree;

impl<E: Entry> ImmutableRangeTree<E> {
    /// Calls `f` with every entry inside `interval`, in ascending order by
    /// coordinate at every dimension, outermost dimension first.
    ///
    /// Returning `false` from `f` cancels the traversal; no further entry
    /// is visited at any level.
    pub fn apply<I, F>(&self, interval: &I, mut f: F)
    where
        I: Interval + ?Sized,
        F: FnMut(&Arc<E>) -> bool,
    {
        self.apply_at_dimension(self.top(), interval, 1, &mut f);
    }

    /// Returns the entries inside `interval`, in the same order
    /// [`apply`](Self::apply) would visit them.
    ///
    /// Two queries against the same tree version produce identical
    /// buffers. Call [`Entries::dispose`] on the result to release the
    /// entry references eagerly.
    pub fn query<I>(&self, interval: &I) -> Entries<E>
    where
        I: Interval + ?Sized,
    {
        let mut entries = Entries::new();
        self.apply(interval, |entry| {
            entries.push(Arc::clone(entry));
            true
        });
        entries
    }

    fn apply_at_dimension<I, F>(
        &self,
        list: &OrderedNodes<E>,
        interval: &I,
        dimension: u64,
        f: &mut F,
    ) -> bool
    where
        I: Interval + ?Sized,
        F: FnMut(&Arc<E>) -> bool,
    {
        let low = interval.low_at_dimension(dimension);
        let high = interval.high_at_dimension(dimension);

        if self.is_last_dimension(dimension) {
            list.apply(low, high, |node| f(&node.entry))
        } else {
            list.apply(low, high, |node| {
                self.apply_at_dimension(&node.children, interval, dimension + 1, &mut *f)
            })
        }
    }
}
