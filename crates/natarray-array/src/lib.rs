//! Manually-managed array containers.
//!
//! Two container shapes, the second built from the first:
//!
//! - [`Array1D`]: an owned, contiguous, fixed-length buffer with
//!   bounds-checked access and a cooperative write-lock.
//! - [`Array2D`]: an owned, jagged collection of independently sized
//!   [`Array1D`] rows.
//!
//! # Ownership
//!
//! Each container exclusively owns its storage. Storage is released on
//! [`Array1D::dispose`]/[`Array2D::dispose`] or, failing that, when the
//! container is dropped. Disposal is idempotent.
//!
//! # Locking
//!
//! The write-lock is advisory, single-owner state. It blocks writes through
//! the container API and never blocks reads. It is not a synchronisation
//! primitive; containers shared across threads need external
//! synchronisation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array1d;
pub mod array2d;

pub use array1d::Array1D;
pub use array2d::Array2D;
