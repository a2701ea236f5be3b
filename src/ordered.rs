/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A coordinate-sorted list of nodes, the building block of every
//! dimensional layer.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use crate::entry::{Entries, Entry};
use crate::node::RangeNode;

/// An ordered sequence of nodes, sorted strictly ascending by coordinate.
///
/// No two nodes in the same list share a coordinate. Lookups use binary
/// search, so locating a coordinate is `O(log k)` while insertion and
/// removal are `O(k)` due to element shifting.
///
/// Elements are reference-counted: cloning a list is a shallow copy that
/// shares every node with the original. All mutating operations on the tree
/// clone the lists on their path first, which is what lets older tree
/// values keep reading the originals.
#[derive(Debug)]
pub(crate) struct OrderedNodes<E>(Vec<Arc<RangeNode<E>>>);

impl<E> OrderedNodes<E> {
    pub(crate) const fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The least index whose node's coordinate is `>= value`, or `len()`
    /// if every coordinate is smaller.
    pub(crate) fn search(&self, value: i64) -> usize {
        self.0.partition_point(|node| node.value < value)
    }

    /// Inserts `node` at its sorted position. If a node with the same
    /// coordinate is already present it is replaced instead; returns
    /// whether that overwrite happened.
    pub(crate) fn add(&mut self, node: Arc<RangeNode<E>>) -> bool {
        let i = self.search(node.value);
        if i < self.0.len() && self.0[i].value == node.value {
            self.0[i] = node;
            return true;
        }
        self.0.insert(i, node);
        false
    }

    /// The node at `value` if present, along with the search index.
    pub(crate) fn get(&self, value: i64) -> (Option<&Arc<RangeNode<E>>>, usize) {
        let i = self.search(value);
        match self.0.get(i) {
            Some(node) if node.value == value => (Some(node), i),
            _ => (None, i),
        }
    }

    /// Removes the node at `index`. Out-of-bounds indices are ignored.
    pub(crate) fn delete_at(&mut self, index: usize) {
        if index < self.0.len() {
            self.0.remove(index);
        }
    }

    /// Removes the node at `value` if present.
    pub(crate) fn delete(&mut self, value: i64) {
        let i = self.search(value);
        // The bounds check has to come first: a missed search lands one
        // past the end.
        if i == self.0.len() || self.0[i].value != value {
            return;
        }
        self.delete_at(i);
    }

    /// Visits every node whose coordinate lies in `[low, high)` in
    /// ascending order. Stops and returns `false` as soon as `f` does.
    pub(crate) fn apply<F>(&self, low: i64, high: i64, mut f: F) -> bool
    where
        F: FnMut(&Arc<RangeNode<E>>) -> bool,
    {
        for node in &self.0[self.search(low)..] {
            if node.value >= high {
                break;
            }
            if !f(node) {
                return false;
            }
        }
        true
    }
}

impl<E: Entry> OrderedNodes<E> {
    /// Looks up the node at `entry`'s coordinate for `dimension`, creating
    /// and inserting a childless one if absent. Returns the node's slot and
    /// whether it was created by this call.
    pub(crate) fn get_or_add(
        &mut self,
        entry: &Arc<E>,
        dimension: u64,
    ) -> (&mut Arc<RangeNode<E>>, bool) {
        let value = entry.value_at_dimension(dimension);
        let i = self.search(value);
        let found = i < self.0.len() && self.0[i].value == value;
        if !found {
            self.0
                .insert(i, Arc::new(RangeNode::new(value, Arc::clone(entry))));
        }
        (&mut self.0[i], !found)
    }

    /// The axis-shift helper behind
    /// [`insert_at_dimension`](crate::ImmutableRangeTree::insert_at_dimension).
    ///
    /// Returns a shallow clone of this list. When `insert_dimension` is the
    /// dimension this list lives at, every node whose coordinate is
    /// `>= index` is examined: nodes whose coordinate would fall below
    /// `index` after adding `number` are removed from the clone, the rest
    /// survive with their stored coordinate untouched (callers account for
    /// the shift externally). `modified` and `deleted` are only filled at
    /// the last dimension, where nodes are entries.
    ///
    /// Lists at other dimensions are returned as unwalked clones.
    pub(crate) fn insert(
        &self,
        insert_dimension: u64,
        dimension: u64,
        max_dimension: u64,
        index: i64,
        number: i64,
        modified: &mut Entries<E>,
        deleted: &mut Entries<E>,
    ) -> Self {
        let mut cp = self.clone();
        if insert_dimension != dimension {
            return cp;
        }

        let last_dimension = dimension >= max_dimension;
        let mut to_delete = Vec::new();

        for j in cp.search(index)..cp.0.len() {
            let node = &cp.0[j];
            if node.value + number < index {
                to_delete.push(j);
                if last_dimension {
                    deleted.push(Arc::clone(&node.entry));
                }
                continue;
            }
            if last_dimension {
                modified.push(Arc::clone(&node.entry));
            }
        }

        for (removed, j) in to_delete.into_iter().enumerate() {
            cp.delete_at(j - removed);
        }

        cp
    }
}

// Shallow: shares every node with the original, so no `E: Clone` bound.
impl<E> Clone for OrderedNodes<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> Index<usize> for OrderedNodes<E> {
    type Output = Arc<RangeNode<E>>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<E> IndexMut<usize> for OrderedNodes<E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}
