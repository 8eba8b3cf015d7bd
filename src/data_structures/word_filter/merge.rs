// Copyright (c) 2025 Word Filter Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Intersection of sorted index lists.

use std::cmp::Ordering;

/// Returns the largest value present in both `a` and `b`.
///
/// Both slices must be strictly increasing. The walk starts at both tails and
/// steps back on whichever side currently holds the larger value, so the first
/// equal pair met is the maximum common element. Runs in O(|a| + |b|) without
/// allocating.
pub fn max_common(a: &[usize], b: &[usize]) -> Option<usize> {
    debug_assert!(a.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(b.windows(2).all(|w| w[0] < w[1]));

    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        let (x, y) = (a[i - 1], b[j - 1]);
        match x.cmp(&y) {
            Ordering::Equal => return Some(x),
            Ordering::Greater => i -= 1,
            Ordering::Less => j -= 1,
        }
    }
    None
}
