//! natarray: manually-managed array containers with explicit allocation
//! strategies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all natarray sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use natarray::prelude::*;
//!
//! let mut row = Array1D::create_from(&[1, 2, 3], Allocator::TempJob, ArrayOptions::default())?;
//! row.set(0, 5)?;
//! assert_eq!(row.get(0)?, 5);
//!
//! row.lock();
//! assert_eq!(row.set(1, 0), Err(ArrayError::LockedViolation));
//! assert_eq!(row.get(1)?, 2);
//!
//! let mut grid = Array2D::create_from_jagged(
//!     &[vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]],
//!     Allocator::Persistent,
//!     ArrayOptions::default(),
//! )?;
//! grid.row(0)?.set(2, 5)?;
//! assert_eq!(grid.row(2)?.get(3)?, 9);
//!
//! grid.dispose();
//! row.dispose();
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `natarray-core` | `Allocator`, `ArrayError`, `ArrayOptions` |
//! | [`alloc`] | `natarray-alloc` | `Element`, `RawBuffer`, allocation ledger |
//! | [`array`] | `natarray-array` | `Array1D`, `Array2D` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: allocation tags, errors, options.
pub mod types {
    pub use natarray_core::*;
}

/// Raw buffers and allocation accounting.
pub mod alloc {
    pub use natarray_alloc::*;
}

/// The container types.
pub mod array {
    pub use natarray_array::*;
}

/// Common imports for container users.
pub mod prelude {
    pub use natarray_alloc::Element;
    pub use natarray_array::{Array1D, Array2D};
    pub use natarray_core::{Allocator, ArrayError, ArrayOptions};
}
