// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for emitted keys and allocated bits.
//!
//! These are debug-mode assertions. They cost nothing in release builds and
//! catch a broken key format or bit sequence at the point it is produced,
//! rather than when a stored document silently stops matching its query.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                       |
//! |----------------------------|------------------------------------------------|
//! | `check_composite_key`      | key starts with its decimal mask and a space  |
//! | `check_bit_valid`          | every allocated bit is a single power of two  |
//! | `check_bit_sequence`       | bits are handed out 1, 2, 4, ... in order     |
//! | `check_superset_mask`      | an IN index mask contains every queried bit   |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

use crate::types::{Bit, MAX_COMPOSITE_INDEX_LABELS};

/// Composite masks are `u8`, so the label ceiling must fit in eight bits.
const _: () = {
    // INVARIANT: one mask bit per composite label
    assert!(MAX_COMPOSITE_INDEX_LABELS <= u8::BITS as usize);
};

/// The allocator's documented capacity.
const _: () = {
    // INVARIANT: at least 16 IN values per allocator
    assert!(Bit::BITS >= 16);
};

// ============================================================================
// COMPOSITE KEY CONTRACTS
// ============================================================================

/// Check that a composite key carries its mask as a decimal prefix.
///
/// # Panics (debug builds only)
/// Panics if `mask` is zero or the key does not start with `"<mask> "`.
#[inline]
pub fn check_composite_key(key: &str, mask: u8) {
    debug_assert!(mask != 0, "Contract violation: composite key with empty mask");

    #[cfg(debug_assertions)]
    {
        let prefix = format!("{}{}", mask, crate::types::KEY_SEPARATOR);
        debug_assert!(
            key.starts_with(&prefix),
            "Contract violation: composite key '{}' does not start with '{}'",
            key,
            prefix
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = key;
}

// ============================================================================
// BIT CONTRACTS
// ============================================================================

/// Check that an allocated bit is a single power of two.
#[inline]
pub fn check_bit_valid(bit: Bit) {
    // INVARIANT: bit.is_power_of_two()
    debug_assert!(
        bit.is_power_of_two(),
        "Contract violation: bit {:#x} is not a power of two",
        bit
    );
}

/// Check that the `n`th allocated bit (zero-based) is `1 << n`.
#[inline]
pub fn check_bit_sequence(n: u32, bit: Bit) {
    // INVARIANT: allocation is sequential from 1
    debug_assert!(
        bit.trailing_zeros() == n,
        "Contract violation: bit #{} is {:#x}, expected {:#x}",
        n,
        bit,
        1u32 << n
    );
}

/// Check that an IN index mask includes every bit of the document's value set.
#[inline]
pub fn check_superset_mask(mask: u32, required: u32) {
    // INVARIANT: mask ⊇ required
    debug_assert!(
        mask & required == required,
        "Contract violation: mask {:#x} does not contain {:#x}",
        mask,
        required
    );
}
