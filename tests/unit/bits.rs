//! Tests for IN bit allocation.

use compkeys::{Bit, InBuilder};

fn allocate(n: usize) -> (InBuilder, Vec<Bit>) {
    let mut builder = InBuilder::new();
    let bits = (0..n).map(|_| builder.new_bit()).collect();
    (builder, bits)
}

#[test]
fn test_capacity_is_sixteen() {
    assert_eq!(InBuilder::capacity(), 16);
    let (builder, bits) = allocate(16);
    assert_eq!(builder.allocated(), 16);
    assert_eq!(bits.last().copied(), Some(1 << 15));
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_seventeenth_bit_panics() {
    let (mut builder, _) = allocate(16);
    builder.new_bit();
}

#[test]
fn test_four_value_universe() {
    let (builder, bits) = allocate(4);
    let (a, c) = (bits[0], bits[2]);

    assert_eq!(builder.indexes_for(&[a, c]), vec!["5", "7", "13", "15"]);
    assert_eq!(builder.filter_for(&[a, c]), "5");
}

#[test]
fn test_every_matching_query_finds_the_document() {
    let (builder, bits) = allocate(4);
    let doc = builder.indexes_for(&[bits[1]]);

    // All 15 non-empty queries; those naming bit 1 must hit.
    for query_mask in 1u32..16 {
        let query: Vec<Bit> = (0..4)
            .filter(|i| query_mask & (1 << i) != 0)
            .map(|i| bits[i])
            .collect();
        let key = builder.filter_for(&query);
        assert_eq!(
            doc.contains(&key),
            query_mask & 0b10 != 0,
            "query {:#06b}",
            query_mask
        );
    }
}

#[test]
fn test_keys_grow_with_allocation() {
    let mut builder = InBuilder::new();
    let a = builder.new_bit();
    builder.new_bit();
    assert_eq!(builder.indexes_for(&[a]), vec!["1", "3"]);

    builder.new_bit();
    assert_eq!(builder.indexes_for(&[a]), vec!["1", "3", "5", "7"]);
}

#[test]
fn test_empty_query_is_zero() {
    let (builder, _) = allocate(3);
    assert_eq!(builder.filter_for(&[]), "0");
    assert!(builder.indexes_for(&[]).is_empty());
}

#[test]
#[should_panic(expected = "not allocated")]
fn test_bit_from_larger_builder_is_rejected() {
    let (_, bits) = allocate(6);
    let (small, _) = allocate(3);
    small.indexes_for(&[bits[5]]);
}
