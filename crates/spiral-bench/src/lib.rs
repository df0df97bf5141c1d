//! Benchmark inputs for the square spiral crates.
//!
//! - [`sample_indices`]: deterministic spiral indices spread over a range
//! - [`REFERENCE_THRESHOLDS`]: thresholds whose answers are known

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Thresholds paired with the first walk value exceeding them.
pub const REFERENCE_THRESHOLDS: [(u64, u64); 4] =
    [(10, 11), (750, 806), (289_326, 295_229), (1_000_000_000, 1_262_247_784)];

/// `count` pseudo-random spiral indices in `1..=max`, reproducible per `seed`.
pub fn sample_indices(count: usize, max: u64, seed: u64) -> Vec<u64> {
    assert!(max > 0, "max must be positive");
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state % max + 1
        })
        .collect()
}
