/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use thiserror::Error;

/// Errors reported by [`ImmutableRangeTree`](crate::ImmutableRangeTree).
///
/// Construction is the only fallible operation. Everything else treats
/// error-adjacent input as a documented no-op: deleting an absent entry,
/// shifting past the last dimension, or shifting by zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeTreeError {
    /// A tree indexes entries along at least one axis.
    #[error("a range tree requires at least one dimension")]
    ZeroDimensions,
}
