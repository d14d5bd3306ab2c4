// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bit allocation for "value IN (v1, v2, ...)" queries.
//!
//! Each candidate value gets its own power-of-two bit. A query for any of a
//! chosen subset of values looks up one key, the OR of their bits. A document
//! whose value set is `S` writes every mask in the allocated universe that
//! contains all of `S`, so whichever query mask includes its bits is present
//! among the document's own keys.
//!
//! ```text
//! a=1 b=2 c=4 d=8      document {a, c}  →  5 7 13 15
//!                      query a OR c      →  5
//! ```
//!
//! The allocator only knows the bit sequence. Mapping domain values to bits
//! is the caller's job, and must be stable across documents and queries.

use log::trace;

use crate::contracts::{check_bit_sequence, check_bit_valid, check_superset_mask};
use crate::types::Bit;

/// Hands out IN bits and renders IN keys.
#[derive(Debug, Clone, Default)]
pub struct InBuilder {
    allocated: u32,
}

impl InBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next bit: 1, 2, 4, ...
    ///
    /// # Panics
    /// Panics once all [`capacity`](Self::capacity) bits are allocated. Running
    /// out means the caller designed more IN values than the key scheme holds,
    /// which no input at runtime can fix.
    pub fn new_bit(&mut self) -> Bit {
        if self.allocated >= Bit::BITS {
            panic!(
                "IN bit allocation exhausted: all {} bits are in use",
                Bit::BITS
            );
        }
        let bit: Bit = 1 << self.allocated;
        check_bit_valid(bit);
        check_bit_sequence(self.allocated, bit);
        self.allocated += 1;
        trace!("allocated IN bit {:#x}", bit);
        bit
    }

    /// Number of bits allocated so far.
    pub fn allocated(&self) -> u32 {
        self.allocated
    }

    /// Maximum number of bits this allocator hands out.
    pub const fn capacity() -> u32 {
        Bit::BITS
    }

    /// Keys a document carrying all of `bits` must write, ascending.
    ///
    /// Every mask in `1 ..= 2^allocated - 1` that contains each of `bits`.
    /// No bits means no keys.
    ///
    /// # Panics
    /// Panics if any of `bits` was not handed out by this builder.
    pub fn indexes_for(&self, bits: &[Bit]) -> Vec<String> {
        if bits.is_empty() {
            return Vec::new();
        }
        let required = self.union(bits);
        let universe = (1u32 << self.allocated) - 1;

        (1..=universe)
            .filter(|mask| mask & required == required)
            .map(|mask| {
                check_superset_mask(mask, required);
                mask.to_string()
            })
            .collect()
    }

    /// The single key a query for "any of `bits`" looks up.
    ///
    /// # Panics
    /// Panics if any of `bits` was not handed out by this builder.
    pub fn filter_for(&self, bits: &[Bit]) -> String {
        self.union(bits).to_string()
    }

    fn union(&self, bits: &[Bit]) -> u32 {
        bits.iter().fold(0u32, |acc, &bit| {
            // INVARIANT: only allocated bits reach a key
            if !bit.is_power_of_two() || bit.trailing_zeros() >= self.allocated {
                panic!(
                    "IN bit {:#x} was not allocated: {} bits in use",
                    bit, self.allocated
                );
            }
            acc | u32::from(bit)
        })
    }
}
