//! Raw, allocator-tagged buffers for the natarray containers.
//!
//! This is the only crate in the workspace that contains `unsafe` code,
//! and it is confined to two modules: [`element`] (the marker trait
//! promising an all-zero bit pattern is a valid value) and `raw` (the
//! owning buffer over `std::alloc`).
//!
//! # Architecture
//!
//! ```text
//! RawBuffer<T: Element>
//! ├── NonNull<T> + len (exclusively owned)
//! ├── Layout (size * align, recorded at allocation)
//! └── Allocator tag (recorded at allocation, reused on release)
//!         │
//!         └── ledger (thread-local live counts per tag)
//! ```
//!
//! A buffer is released exactly once, by `Drop`, under the layout and tag
//! it was allocated with. Callers never supply a tag at release time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod element;
pub mod ledger;
mod raw;

pub use element::Element;
pub use ledger::LedgerEntry;
pub use raw::RawBuffer;
