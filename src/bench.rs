//! Benchmarking support for the word filter.
//!
//! Fixture generators shared by the criterion benchmarks in `benches/`.

/// Generates `size` deterministic lowercase words of 3 to 10 letters.
///
/// Words are produced by a linear congruential sequence, so every run of a
/// benchmark sees the same vocabulary and duplicates occur naturally.
pub fn synthetic_vocabulary(size: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    (0..size)
        .map(|_| {
            let len = 3 + (next() % 8) as usize;
            (0..len)
                .map(|_| char::from(b'a' + (next() % 26) as u8))
                .collect()
        })
        .collect()
}
