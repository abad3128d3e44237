//! Fixed-length, allocator-tagged one-dimensional arrays.
//!
//! An [`Array1D`] is either *empty* (never created, or disposed) or
//! *created* (owns a [`RawBuffer`]). Its length only changes through an
//! explicit [`Array1D::resize`], which allocates a fresh buffer and drops
//! the old one; contents are not carried across.

use std::fmt;

use natarray_alloc::{Element, RawBuffer};
use natarray_core::{Allocator, ArrayError, ArrayOptions};

/// Reject negative sizes.
pub(crate) fn check_size(size: isize) -> Result<usize, ArrayError> {
    usize::try_from(size)
        .map_err(|_| ArrayError::invalid_argument(format!("size cannot be negative: {size}")))
}

/// Map `index` into `[0, len)`.
pub(crate) fn check_index(index: isize, len: usize) -> Result<usize, ArrayError> {
    match usize::try_from(index) {
        Ok(i) if i < len => Ok(i),
        _ => Err(ArrayError::IndexOutOfRange { index, len }),
    }
}

/// An owned, contiguous, fixed-length buffer of `T`.
///
/// Reads ([`get`](Array1D::get), [`as_slice`](Array1D::as_slice)) are never
/// blocked by the write-lock. Writes ([`set`](Array1D::set),
/// [`fill`](Array1D::fill), [`as_mut_slice`](Array1D::as_mut_slice)) fail
/// with [`ArrayError::LockedViolation`] while it is engaged.
pub struct Array1D<T: Element> {
    /// `Some` exactly when the array is created.
    buffer: Option<RawBuffer<T>>,
    /// Cooperative write-lock.
    locked: bool,
}

impl<T: Element> Array1D<T> {
    /// An empty, never-created array. Owns no storage.
    pub const fn empty() -> Self {
        Self {
            buffer: None,
            locked: false,
        }
    }

    /// Allocate `size` zeroed elements under `allocator` with default options.
    pub fn new(size: isize, allocator: Allocator) -> Result<Self, ArrayError> {
        Self::create(size, allocator, ArrayOptions::default())
    }

    /// Allocate `size` elements under `allocator`.
    ///
    /// With `options.clear` the buffer is zeroed by the allocator; without
    /// it every element starts at `T::default()`.
    pub fn create(
        size: isize,
        allocator: Allocator,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        let len = check_size(size)?;
        let buffer = Self::allocate(len, allocator, &options)?;
        tracing::debug!(%allocator, len, locked = options.locked, "array1d created");
        Ok(Self {
            buffer: Some(buffer),
            locked: options.locked,
        })
    }

    /// Allocate `size` elements under `allocator`, each set to `value`.
    ///
    /// `options.clear` is ignored: every element is written explicitly.
    pub fn create_filled(
        size: isize,
        allocator: Allocator,
        value: T,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        let len = check_size(size)?;
        options.validate()?;
        let buffer = RawBuffer::filled(len, options.alignment, allocator, value)?;
        tracing::debug!(
            %allocator,
            len,
            locked = options.locked,
            "array1d created (filled)"
        );
        Ok(Self {
            buffer: Some(buffer),
            locked: options.locked,
        })
    }

    /// Allocate `max(source.len(), options.min_size)` elements and copy
    /// `source` into the front.
    ///
    /// Indices past `source.len()` read as zero. The requested lock is
    /// applied only after the copy completes.
    pub fn create_from(
        source: &[T],
        allocator: Allocator,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        options.validate()?;
        let len = source.len().max(options.min_size);
        let mut buffer = RawBuffer::zeroed(len, options.alignment, allocator)?;
        buffer.as_mut_slice()[..source.len()].copy_from_slice(source);
        tracing::debug!(
            %allocator,
            len,
            copied = source.len(),
            locked = options.locked,
            "array1d created from sequence"
        );
        Ok(Self {
            buffer: Some(buffer),
            locked: options.locked,
        })
    }

    fn allocate(
        len: usize,
        allocator: Allocator,
        options: &ArrayOptions,
    ) -> Result<RawBuffer<T>, ArrayError> {
        options.validate()?;
        if options.clear {
            RawBuffer::zeroed(len, options.alignment, allocator)
        } else {
            RawBuffer::filled(len, options.alignment, allocator, T::default())
        }
    }

    /// Replace the buffer with a fresh one of `new_size` elements.
    ///
    /// No-op when `new_size` equals the current length. Otherwise the new
    /// buffer is allocated first and the old one released; existing
    /// contents are lost. On failure the array is left untouched.
    pub fn resize(
        &mut self,
        new_size: isize,
        allocator: Allocator,
        options: ArrayOptions,
    ) -> Result<(), ArrayError> {
        let len = check_size(new_size)?;
        if len == self.len() {
            return Ok(());
        }
        let buffer = Self::allocate(len, allocator, &options)?;
        let old_len = self.len();
        self.buffer = Some(buffer);
        self.locked = options.locked;
        tracing::debug!(%allocator, old_len, len, "array1d resized");
        Ok(())
    }

    /// Release the buffer and return to the empty state.
    ///
    /// Disposing an empty array is a no-op.
    pub fn dispose(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            tracing::debug!(
                allocator = %buffer.allocator(),
                len = buffer.len(),
                "array1d disposed"
            );
        }
        self.locked = false;
    }

    fn buffer(&self) -> Result<&RawBuffer<T>, ArrayError> {
        self.buffer.as_ref().ok_or(ArrayError::InvalidState)
    }

    fn writable_buffer(&mut self) -> Result<&mut RawBuffer<T>, ArrayError> {
        let locked = self.locked;
        let buffer = self.buffer.as_mut().ok_or(ArrayError::InvalidState)?;
        if locked {
            return Err(ArrayError::LockedViolation);
        }
        Ok(buffer)
    }

    /// Read the element at `index`.
    pub fn get(&self, index: isize) -> Result<T, ArrayError> {
        let data = self.buffer()?.as_slice();
        let i = check_index(index, data.len())?;
        Ok(data[i])
    }

    /// Write `value` at `index`.
    ///
    /// A failed write leaves the array unchanged.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), ArrayError> {
        let data = self.writable_buffer()?.as_mut_slice();
        let i = check_index(index, data.len())?;
        data[i] = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) -> Result<(), ArrayError> {
        self.writable_buffer()?.as_mut_slice().fill(value);
        Ok(())
    }

    /// Engage the write-lock.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the write-lock.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the write-lock is engaged.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Replace this array's contents and lock state with `source`'s.
    ///
    /// The destination is resized to `source.len()` under `allocator`, or
    /// under `source`'s own tag when `None`. Like [`resize`](Array1D::resize),
    /// this is a no-op when the lengths already match: the existing buffer
    /// is reused and keeps its original tag, whatever `allocator` says. An
    /// empty destination is always allocated, even for a zero-length
    /// source. The destination's lock is
    /// overwritten with the source's once the copy completes. The storage
    /// stays independent: later writes to either side are not shared.
    pub fn copy_from(
        &mut self,
        source: &Array1D<T>,
        allocator: Option<Allocator>,
    ) -> Result<(), ArrayError> {
        let src = source.buffer()?;
        let allocator = allocator.unwrap_or(src.allocator());
        if !self.is_created() || self.len() != src.len() {
            self.buffer = Some(RawBuffer::zeroed(src.len(), src.align(), allocator)?);
        }
        if let Some(dst) = self.buffer.as_mut() {
            dst.as_mut_slice().copy_from_slice(src.as_slice());
        }
        self.locked = source.locked;
        Ok(())
    }

    /// Re-create this array from an external sequence.
    ///
    /// Equivalent to [`create_from`](Array1D::create_from) with default
    /// options, except that the current lock state is kept.
    pub fn copy_from_slice(
        &mut self,
        source: &[T],
        allocator: Allocator,
    ) -> Result<(), ArrayError> {
        let options = ArrayOptions::default().with_locked(self.locked);
        *self = Self::create_from(source, allocator, options)?;
        Ok(())
    }

    /// Copy this array into `destination`. See [`copy_from`](Array1D::copy_from).
    pub fn copy_to(
        &self,
        destination: &mut Array1D<T>,
        allocator: Option<Allocator>,
    ) -> Result<(), ArrayError> {
        destination.copy_from(self, allocator)
    }

    /// Copy every element into caller-owned storage of the same length.
    pub fn copy_to_slice(&self, destination: &mut [T]) -> Result<(), ArrayError> {
        let data = self.buffer()?.as_slice();
        if destination.len() != data.len() {
            return Err(ArrayError::invalid_argument(format!(
                "destination length {} does not match array length {}",
                destination.len(),
                data.len()
            )));
        }
        destination.copy_from_slice(data);
        Ok(())
    }

    /// Copy every element into a new `Vec`.
    pub fn to_vec(&self) -> Result<Vec<T>, ArrayError> {
        Ok(self.buffer()?.as_slice().to_vec())
    }

    /// Read-only view of the elements. Never blocked by the lock.
    pub fn as_slice(&self) -> Result<&[T], ArrayError> {
        Ok(self.buffer()?.as_slice())
    }

    /// Mutable view of the elements. Blocked by the lock.
    pub fn as_mut_slice(&mut self) -> Result<&mut [T], ArrayError> {
        Ok(self.writable_buffer()?.as_mut_slice())
    }

    /// Iterate over the elements. Yields nothing when not created.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match &self.buffer {
            Some(buffer) => buffer.as_slice().iter(),
            None => <&[T]>::default().iter(),
        }
    }

    /// Sub-range views are not supported.
    pub fn slice(&self, _start: isize, _end: isize) -> Result<Array1D<T>, ArrayError> {
        Err(ArrayError::Unsupported { operation: "slice" })
    }

    /// Number of elements. Zero when not created.
    pub fn len(&self) -> usize {
        self.buffer.as_ref().map_or(0, RawBuffer::len)
    }

    /// Alias of [`len`](Array1D::len).
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the array owns a buffer.
    pub fn is_created(&self) -> bool {
        self.buffer.is_some()
    }

    /// Whether `index` lies in `[0, len)`.
    pub fn in_range(&self, index: isize) -> bool {
        check_index(index, self.len()).is_ok()
    }

    /// The strategy backing the buffer, or [`Allocator::None`].
    pub fn allocator(&self) -> Allocator {
        self.buffer
            .as_ref()
            .map_or(Allocator::None, RawBuffer::allocator)
    }

    /// Effective buffer alignment, if created.
    pub fn alignment(&self) -> Option<usize> {
        self.buffer.as_ref().map(RawBuffer::align)
    }
}

impl<T: Element> Default for Array1D<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element + PartialEq> PartialEq for Array1D<T> {
    /// Equal when both are created with equal contents, or both are empty.
    /// Lock state and allocator are not compared.
    fn eq(&self, other: &Self) -> bool {
        match (&self.buffer, &other.buffer) {
            (Some(a), Some(b)) => a.as_slice() == b.as_slice(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Array1D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array1D")
            .field("created", &self.is_created())
            .field("locked", &self.locked)
            .field("allocator", &self.allocator())
            .field("data", &self.iter().as_slice())
            .finish()
    }
}

impl<'a, T: Element> IntoIterator for &'a Array1D<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
