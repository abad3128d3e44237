//! Allocation-strategy tags.
//!
//! An [`Allocator`] is an opaque label chosen by the caller at creation
//! time. The buffer records the tag it was allocated under and releases
//! itself under that same tag; callers never supply a tag at release time.

use std::fmt;

/// Which allocation strategy (lifetime pool) backs a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Allocator {
    /// No allocation. The tag of a never-created or disposed container.
    #[default]
    None,
    /// Short-lived scratch storage, released within the same scope.
    Temp,
    /// Storage handed to a downstream consumer for a bounded number of
    /// frames.
    TempJob,
    /// Storage that lives until explicitly disposed.
    Persistent,
}

impl Allocator {
    /// All tags that actually allocate, in ledger order.
    pub const ALLOCATING: [Allocator; 3] =
        [Allocator::Temp, Allocator::TempJob, Allocator::Persistent];

    /// Whether this tag can back a live buffer.
    pub fn is_allocating(self) -> bool {
        !matches!(self, Allocator::None)
    }

    /// Lower-case name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Allocator::None => "none",
            Allocator::Temp => "temp",
            Allocator::TempJob => "temp_job",
            Allocator::Persistent => "persistent",
        }
    }
}

impl fmt::Display for Allocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
