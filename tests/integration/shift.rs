/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for `ImmutableRangeTree::insert_at_dimension`.

use pretty_assertions::assert_eq;

use immutable_range_tree::{Entries, ImmutableRangeTree};

use crate::helpers::{MockEntry, MockInterval, coordinates, tree_of};

/// A 1-D tree holding the given coordinates, entry ids matching positions.
fn line_of(values: &[i64]) -> ImmutableRangeTree<MockEntry> {
    let empty = ImmutableRangeTree::new(1).expect("one dimension is valid");
    empty.add(
        values
            .iter()
            .enumerate()
            .map(|(id, &v)| MockEntry::new(id as u64, &[v])),
    )
}

fn values(entries: &Entries<MockEntry>) -> Vec<i64> {
    entries.iter().map(|e| e.coordinates[0]).collect()
}

fn ids(entries: &Entries<MockEntry>) -> Vec<u64> {
    entries.iter().map(|e| e.id).collect()
}

#[test]
fn negative_shift_deletes_entire_line() {
    let tree = line_of(&[4, 1, 2]);
    let (shifted, modified, deleted) = tree.insert_at_dimension(1, 0, -5);

    assert_eq!(0, shifted.len());
    assert!(modified.is_empty());
    assert_eq!(vec![1, 2, 4], values(&deleted));
    // Removal order follows the coordinates, not insertion order.
    assert_eq!(vec![1, 2, 0], ids(&deleted));
    assert!(coordinates(&shifted.query(&MockInterval::full(1))).is_empty());

    // The previous version keeps all three.
    assert_eq!(3, tree.len());
}

#[test]
fn positive_shift_reports_survivors_with_stored_coordinates() {
    let tree = line_of(&[1, 2, 4]);
    let (shifted, modified, deleted) = tree.insert_at_dimension(1, 2, 10);

    assert_eq!(3, shifted.len());
    assert_eq!(vec![2, 4], values(&modified));
    assert!(deleted.is_empty());

    // Stored coordinates stay as they were; the shift is the caller's to
    // account for.
    assert_eq!(
        vec![vec![1], vec![2], vec![4]],
        coordinates(&shifted.query(&MockInterval::full(1)))
    );
}

#[test]
fn negative_shift_splits_deleted_from_modified() {
    let tree = line_of(&[1, 2, 4]);
    let (shifted, modified, deleted) = tree.insert_at_dimension(1, 2, -2);

    assert_eq!(2, shifted.len());
    assert_eq!(vec![4], values(&modified));
    assert_eq!(vec![2], values(&deleted));
    assert_eq!(
        vec![vec![1], vec![4]],
        coordinates(&shifted.query(&MockInterval::full(1)))
    );
}

#[test]
fn dimension_past_the_last_is_a_noop() {
    let tree = line_of(&[1, 2]);
    let (same, modified, deleted) = tree.insert_at_dimension(2, 0, 5);

    assert_eq!(2, same.len());
    assert!(modified.is_empty());
    assert!(deleted.is_empty());
}

#[test]
fn zero_shift_is_a_noop() {
    let tree = line_of(&[1, 2]);
    let (same, modified, deleted) = tree.insert_at_dimension(1, 0, 0);

    assert_eq!(2, same.len());
    assert!(modified.is_empty());
    assert!(deleted.is_empty());
}

// The shift is only applied where the walked dimension equals the
// requested one, which the walk reaches solely at the top level.
#[test]
fn inner_dimension_shift_is_carried_over_unwalked() {
    let tree = tree_of(&[(1, 4), (2, 1)]);
    let (same, modified, deleted) = tree.insert_at_dimension(2, 0, -10);

    assert!(modified.is_empty());
    assert!(deleted.is_empty());
    assert_eq!(2, same.len());
    assert_eq!(
        vec![vec![1, 4], vec![2, 1]],
        coordinates(&same.query(&MockInterval::full(2)))
    );
}

// A dimension-1 shift on a multi-dimension tree drops whole subtrees while
// the result lists are only filled at the last dimension, so the reported
// deletions and the stored count do not reflect the dropped entries.
#[test]
fn top_level_shift_on_two_dimensions_drops_subtrees_silently() {
    let tree = tree_of(&[(1, 4), (5, 1)]);
    let (shifted, modified, deleted) = tree.insert_at_dimension(1, 0, -3);

    assert!(modified.is_empty());
    assert!(deleted.is_empty());
    assert_eq!(2, shifted.len());
    assert_eq!(
        vec![vec![5, 1]],
        coordinates(&shifted.query(&MockInterval::full(2)))
    );
}
