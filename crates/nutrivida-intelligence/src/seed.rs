// ABOUTME: Polynomial string hash mapping selection seeds to catalog indices
// ABOUTME: 32-bit wrapping arithmetic over UTF-16 code units, stable across releases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriVida Contributors

//! Seed hashing
//!
//! `acc = acc * 31 + unit` over the UTF-16 code units of the seed, wrapping at
//! 32 bits after every step. The exact arithmetic is part of the persisted
//! contract: changing it changes which variant every user has already seen.

use nutrivida_core::models::{ContentSlot, ContextToken};

/// Rolling hash of the seed as a signed 32-bit integer
#[must_use]
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0_i32, |acc, unit| {
        acc.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Index in `[0, catalog_size)` for the seed
///
/// Returns 0 when `catalog_size` is zero; the catalog refuses to build empty
/// slots so that case never reaches a lookup.
#[must_use]
pub fn index_for(seed: &str, catalog_size: usize) -> usize {
    if catalog_size == 0 {
        return 0;
    }
    // |i32::MIN| does not fit in i32
    let magnitude = seed_hash(seed).checked_abs().unwrap_or(i32::MAX).unsigned_abs();
    usize::try_from(magnitude).map_or(0, |m| m % catalog_size)
}

/// Seed string for a (user, slot, token) triple
#[must_use]
pub fn selection_seed(user_id: &str, slot: ContentSlot, token: &ContextToken) -> String {
    format!("{user_id}{}{token}", slot.discriminator())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_hashes_to_zero() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(index_for("", 10), 0);
    }

    #[test]
    fn test_single_character() {
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(index_for("a", 10), 7);
        assert_eq!(index_for("a", 5), 2);
    }

    #[test]
    fn test_zero_catalog_size() {
        assert_eq!(index_for("anything", 0), 0);
    }

    #[test]
    fn test_min_hash_is_clamped() {
        let seed = "rusrjqnr\u{4f51}D";
        assert_eq!(seed_hash(seed), i32::MIN);
        assert_eq!(index_for(seed, 10), 7);
        assert_eq!(index_for(seed, 7), 1);
    }
}
