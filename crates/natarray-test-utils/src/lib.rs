//! Test fixtures for natarray development.
//!
//! Seeded random sequences and element-wise comparison helpers shared by
//! the unit tests, integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{are_same, are_same_slice, random_grid, random_list};
