/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The persistent tree root and its operations.
//!
//! The implementation is split into sub-modules by concern:
//! - [`add`][]: batch insertion with per-batch copy-on-write
//! - [`delete`][]: removal with empty-ancestor pruning
//! - [`shift`][]: bulk coordinate shifts along one axis
//! - [`apply`][]: range traversal and buffered queries

mod add;
mod apply;
mod delete;
#[cfg(all(feature = "unittest", not(miri)))]
mod invariants;
mod shift;

use crate::error::RangeTreeError;
use crate::ordered::OrderedNodes;

/// A persistent N-dimensional range tree.
///
/// Entries are indexed by one signed 64-bit coordinate per dimension
/// (see [`Entry`](crate::Entry)). Every mutating operation returns a new
/// tree value and leaves the receiver untouched, so any number of older
/// versions can be retained and queried concurrently, without locks, for
/// as long as they are held.
///
/// # Structural sharing
///
/// Versions share sub-structure: a mutation shallow-clones only the
/// ordered-node lists on its path and rebuilds the nodes above them, while
/// everything off-path stays referenced by both the old and the new tree.
/// A per-batch dimension cache makes sure each ancestor list is cloned at
/// most once per operation even when many entries of a batch descend
/// through it.
///
/// Because older versions keep the originals alive, this tree trades write
/// throughput for history retention; the mutable siblings of this data
/// structure are faster when history is not needed.
#[derive(Debug)]
pub struct ImmutableRangeTree<E> {
    /// Number of dimensions, fixed at construction.
    dimensions: u64,
    /// The ordered-node list of dimension 1.
    top: OrderedNodes<E>,
    /// Count of leaf entries reachable from `top`.
    number: u64,
}

impl<E> ImmutableRangeTree<E> {
    /// Creates an empty tree indexing entries along `dimensions` axes.
    ///
    /// # Errors
    ///
    /// Returns [`RangeTreeError::ZeroDimensions`] when `dimensions` is 0.
    pub fn new(dimensions: u64) -> Result<Self, RangeTreeError> {
        if dimensions == 0 {
            return Err(RangeTreeError::ZeroDimensions);
        }
        Ok(Self {
            dimensions,
            top: OrderedNodes::new(),
            number: 0,
        })
    }

    /// The number of entries in this tree version. `O(1)`.
    pub const fn len(&self) -> u64 {
        self.number
    }

    /// Whether this tree version holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.number == 0
    }

    /// The number of dimensions entries are indexed along.
    pub const fn dimensions(&self) -> u64 {
        self.dimensions
    }

    /// Whether `dimension` is the last one, where leaves live.
    pub(crate) const fn is_last_dimension(&self, dimension: u64) -> bool {
        dimension >= self.dimensions
    }

    /// A new version built from this one's layout and a replaced top list.
    pub(crate) fn with_top(&self, top: OrderedNodes<E>, number: u64) -> Self {
        Self {
            dimensions: self.dimensions,
            top,
            number,
        }
    }

    pub(crate) fn top(&self) -> &OrderedNodes<E> {
        &self.top
    }
}

// Hand-written so that cloning shares the top list instead of requiring
// `E: Clone`. Cloning a tree value is `O(k)` reference-count bumps in the
// width of the top list.
impl<E> Clone for ImmutableRangeTree<E> {
    fn clone(&self) -> Self {
        Self {
            dimensions: self.dimensions,
            top: self.top.clone(),
            number: self.number,
        }
    }
}
