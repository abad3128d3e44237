//! Benchmark profiles for natarray containers.
//!
//! - [`reference_sizes`]: element counts exercised by every benchmark.
//! - [`reference_grid`]: a deterministic jagged grid for `Array2D` benches.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use natarray_array::Array2D;
use natarray_core::{Allocator, ArrayError, ArrayOptions};

/// Element counts used by the 1D benchmarks: small, cache-resident, large.
pub fn reference_sizes() -> [usize; 3] {
    [128, 16_384, 1_048_576]
}

/// A jagged grid of `rows` rows whose lengths cycle through `1..=max_len`.
pub fn reference_grid(rows: usize, max_len: usize) -> Result<Array2D<f32>, ArrayError> {
    let source: Vec<Vec<f32>> = (0..rows)
        .map(|r| (0..(r % max_len.max(1)) + 1).map(|c| c as f32).collect())
        .collect();
    Array2D::create_from_jagged(&source, Allocator::Persistent, ArrayOptions::default())
}
