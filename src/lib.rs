/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A persistent multi-dimensional range tree.
//!
//! Entries are indexed by one signed 64-bit coordinate per dimension and
//! queried with axis-aligned, half-open hyper-intervals. Every mutating
//! operation returns a new tree value; prior values remain valid and
//! queryable, which makes history retention and lock-free concurrent reads
//! trivial.
//!
//! # Architecture
//!
//! The tree consists of three main components:
//!
//! - `OrderedNodes`: a coordinate-sorted node list, one per dimensional
//!   layer, located by binary search.
//!
//! - `RangeNode`: pairs a coordinate with an entry reference and, below the
//!   last dimension, the ordered-node list of the next layer.
//!
//! - [`ImmutableRangeTree`]: the root container wiring the layers together
//!   and exposing insertion, deletion, axis shifts, and range queries.
//!
//! # Persistence
//!
//! Versions share sub-structure. A mutation shallow-clones only the lists
//! on its path, driven by a per-batch cache so each ancestor list is
//! cloned at most once per operation, and everything off-path stays
//! referenced by old and new versions alike. Reclamation is by reference
//! count: sub-structure is freed once the last tree version holding it is
//! dropped.

mod cache;
mod entry;
mod error;
mod node;
mod ordered;
mod tree;

pub use entry::{Entries, Entry, Interval};
pub use error::RangeTreeError;
pub use tree::ImmutableRangeTree;
