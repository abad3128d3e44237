//! Owned, aligned, allocator-tagged buffers over `std::alloc`.
//!
//! Every `unsafe` block in this module carries a `// SAFETY:` comment.
//! The invariants a [`RawBuffer`] maintains:
//!
//! - `ptr` is non-null and aligned to `layout.align()`;
//! - when `layout.size() > 0`, `ptr` came from `std::alloc` with exactly
//!   `layout` and has not been freed;
//! - all `len` elements are initialised;
//! - the buffer is released once, in `Drop`, with the recorded layout.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use natarray_core::{Allocator, ArrayError};

use crate::element::Element;
use crate::ledger;

/// An exclusively-owned, fixed-length buffer of `T`.
///
/// The allocator tag and layout are recorded at construction and reused
/// on release, so deallocation can never use a mismatched strategy.
pub struct RawBuffer<T: Element> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
    allocator: Allocator,
    _owns: PhantomData<T>,
}

// SAFETY: the buffer exclusively owns its elements; moving it between
// threads moves ownership of plain `T` values.
unsafe impl<T: Element + Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Element + Sync> Sync for RawBuffer<T> {}

impl<T: Element> RawBuffer<T> {
    /// Allocate `len` zero-initialised elements.
    pub fn zeroed(len: usize, align: usize, allocator: Allocator) -> Result<Self, ArrayError> {
        let layout = Self::layout_for(len, align, allocator)?;
        let ptr = if layout.size() == 0 {
            Self::dangling(layout)
        } else {
            // SAFETY: layout has non-zero size.
            let raw = unsafe { alloc::alloc_zeroed(layout) };
            NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocationFailed {
                bytes: layout.size(),
                align: layout.align(),
            })?
        };
        // Zeroed memory is a valid `T` per the `Element` contract.
        Ok(Self::track(ptr, len, layout, allocator))
    }

    /// Allocate `len` elements, each initialised to `value`.
    ///
    /// Skips the allocator's zeroing pass.
    pub fn filled(
        len: usize,
        align: usize,
        allocator: Allocator,
        value: T,
    ) -> Result<Self, ArrayError> {
        let layout = Self::layout_for(len, align, allocator)?;
        let ptr = if layout.size() == 0 {
            Self::dangling(layout)
        } else {
            // SAFETY: layout has non-zero size.
            let raw = unsafe { alloc::alloc(layout) };
            let ptr = NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocationFailed {
                bytes: layout.size(),
                align: layout.align(),
            })?;
            for i in 0..len {
                // SAFETY: i < len, and the allocation holds `len` elements.
                unsafe { ptr.as_ptr().add(i).write(value) };
            }
            ptr
        };
        Ok(Self::track(ptr, len, layout, allocator))
    }

    fn layout_for(len: usize, align: usize, allocator: Allocator) -> Result<Layout, ArrayError> {
        if !allocator.is_allocating() {
            return Err(ArrayError::invalid_argument(
                "cannot allocate under Allocator::None",
            ));
        }
        if !align.is_power_of_two() {
            return Err(ArrayError::invalid_argument(format!(
                "alignment {align} is not a power of two"
            )));
        }
        let align = align.max(std::mem::align_of::<T>());
        Layout::array::<T>(len)
            .and_then(|layout| layout.align_to(align))
            .map_err(|_| ArrayError::AllocationFailed {
                bytes: len.saturating_mul(std::mem::size_of::<T>()),
                align,
            })
    }

    fn dangling(layout: Layout) -> NonNull<T> {
        // A non-zero address equal to the alignment is aligned and never
        // dereferenced for zero-sized accesses.
        let ptr = ptr::without_provenance_mut::<T>(layout.align());
        NonNull::new(ptr).unwrap_or(NonNull::dangling())
    }

    fn track(ptr: NonNull<T>, len: usize, layout: Layout, allocator: Allocator) -> Self {
        ledger::record_alloc(allocator, layout.size());
        tracing::trace!(
            %allocator,
            len,
            bytes = layout.size(),
            align = layout.align(),
            "raw buffer allocated"
        );
        Self {
            ptr,
            len,
            layout,
            allocator,
            _owns: PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The strategy this buffer was allocated under.
    pub fn allocator(&self) -> Allocator {
        self.allocator
    }

    /// Effective alignment of the allocation in bytes.
    pub fn align(&self) -> usize {
        self.layout.align()
    }

    /// Size of the allocation in bytes.
    pub fn byte_len(&self) -> usize {
        self.layout.size()
    }

    /// Shared view of all elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is aligned and non-null, all `len` elements are
        // initialised, and `&self` prevents concurrent mutation.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Mutable view of all elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Element> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: ptr was returned by `alloc`/`alloc_zeroed` with exactly
            // this layout and is released only here.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) };
        }
        ledger::record_release(self.allocator, self.layout.size());
        tracing::trace!(
            allocator = %self.allocator,
            len = self.len,
            bytes = self.layout.size(),
            "raw buffer released"
        );
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("allocator", &self.allocator)
            .field("align", &self.layout.align())
            .field("data", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_buffer_reads_zero() {
        let buf = RawBuffer::<i32>::zeroed(16, 8, Allocator::Temp).unwrap();
        assert_eq!(buf.len(), 16);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn filled_buffer_reads_value() {
        let buf = RawBuffer::filled(5, 8, Allocator::Persistent, 7u64).unwrap();
        assert_eq!(buf.as_slice(), &[7, 7, 7, 7, 7]);
    }

    #[test]
    fn alignment_is_honoured() {
        let buf = RawBuffer::<u8>::zeroed(3, 64, Allocator::Temp).unwrap();
        assert_eq!(buf.align(), 64);
        assert_eq!(buf.as_slice().as_ptr() as usize % 64, 0);
    }

    #[test]
    fn alignment_never_below_element_alignment() {
        let buf = RawBuffer::<u64>::zeroed(2, 1, Allocator::Temp).unwrap();
        assert_eq!(buf.align(), std::mem::align_of::<u64>());
    }

    #[test]
    fn zero_length_buffer_is_empty_and_aligned() {
        let buf = RawBuffer::<f32>::zeroed(0, 32, Allocator::TempJob).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.byte_len(), 0);
        assert_eq!(buf.as_slice().as_ptr() as usize % 32, 0);
    }

    #[test]
    fn none_tag_is_rejected() {
        let err = RawBuffer::<i32>::zeroed(4, 8, Allocator::None).unwrap_err();
        assert!(matches!(err, ArrayError::InvalidArgument { .. }));
    }

    #[test]
    fn bad_alignment_is_rejected() {
        let err = RawBuffer::<i32>::zeroed(4, 3, Allocator::Temp).unwrap_err();
        assert!(matches!(err, ArrayError::InvalidArgument { .. }));
    }

    #[test]
    fn oversized_layout_is_allocation_failure() {
        let err = RawBuffer::<u64>::zeroed(usize::MAX / 2, 8, Allocator::Temp).unwrap_err();
        assert!(matches!(err, ArrayError::AllocationFailed { .. }));
    }

    #[test]
    fn writes_are_visible_through_reads() {
        let mut buf = RawBuffer::<f32>::zeroed(4, 8, Allocator::Temp).unwrap();
        buf.as_mut_slice()[2] = 1.5;
        assert_eq!(buf.as_slice(), &[0.0, 0.0, 1.5, 0.0]);
    }

    #[test]
    fn drop_releases_ledger_entry() {
        let before = ledger::entry(Allocator::TempJob);
        {
            let _buf = RawBuffer::<u32>::zeroed(10, 8, Allocator::TempJob).unwrap();
            let during = ledger::entry(Allocator::TempJob);
            assert_eq!(during.live_allocations, before.live_allocations + 1);
            assert_eq!(during.live_bytes, before.live_bytes + 40);
        }
        let after = ledger::entry(Allocator::TempJob);
        assert_eq!(after.live_allocations, before.live_allocations);
        assert_eq!(after.live_bytes, before.live_bytes);
    }

    #[test]
    fn failed_allocation_does_not_touch_ledger() {
        let before = ledger::entry(Allocator::Temp);
        let _ = RawBuffer::<u64>::zeroed(usize::MAX / 2, 8, Allocator::Temp);
        assert_eq!(ledger::entry(Allocator::Temp), before);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn filled_matches_requested_len(len in 0usize..512, value in any::<i16>()) {
                let buf = RawBuffer::filled(len, 8, Allocator::Temp, value).unwrap();
                prop_assert_eq!(buf.len(), len);
                prop_assert!(buf.as_slice().iter().all(|&v| v == value));
            }
        }
    }
}
