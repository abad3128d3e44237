//! Construction options for natarray containers.

use crate::error::ArrayError;

/// Options accepted by the `create` family of constructors.
///
/// Mirrors the defaulted parameters of the container API: alignment,
/// initial lock state, zero-clear, and a minimum length for copies from
/// external sequences. Validated when a buffer is allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Requested buffer alignment in bytes.
    ///
    /// Default: 8. Must be a non-zero power of two. The effective alignment
    /// is never below the element type's own alignment.
    pub alignment: usize,

    /// Whether the write-lock is engaged once construction completes.
    ///
    /// Default: `false`. Copies performed during construction are never
    /// blocked by the requested lock.
    pub locked: bool,

    /// Whether the buffer is zero-initialised by the allocator.
    ///
    /// Default: `true`. When `false` the zeroing pass is skipped and the
    /// buffer is initialised from the element's default value instead.
    pub clear: bool,

    /// Minimum length when creating from an external sequence.
    ///
    /// Default: 0. Indices past the sequence length read as zero.
    pub min_size: usize,
}

impl ArrayOptions {
    /// Default buffer alignment in bytes.
    pub const DEFAULT_ALIGNMENT: usize = 8;

    /// Create the default option set.
    pub const fn new() -> Self {
        Self {
            alignment: Self::DEFAULT_ALIGNMENT,
            locked: false,
            clear: true,
            min_size: 0,
        }
    }

    /// Set the requested alignment.
    pub const fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the initial lock state.
    pub const fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Set the zero-clear flag.
    pub const fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Set the minimum length for copies from external sequences.
    pub const fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Check that the alignment is a non-zero power of two.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if !self.alignment.is_power_of_two() {
            return Err(ArrayError::invalid_argument(format!(
                "alignment {} is not a power of two",
                self.alignment
            )));
        }
        Ok(())
    }

    /// Effective alignment for elements whose natural alignment is
    /// `element_align`.
    pub fn effective_alignment(&self, element_align: usize) -> usize {
        self.alignment.max(element_align)
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self::new()
    }
}
