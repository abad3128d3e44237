//! Core types for the natarray containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by every container, the allocation-strategy tag
//! recorded by each buffer, and the option set accepted by the
//! constructors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod error;
pub mod options;

pub use allocator::Allocator;
pub use error::ArrayError;
pub use options::ArrayOptions;
