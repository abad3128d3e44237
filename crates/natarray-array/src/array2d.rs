//! Jagged two-dimensional arrays built from [`Array1D`] rows.
//!
//! An [`Array2D`] owns a row index (`Vec<Array1D<T>>`) and, through it,
//! every row. Rows are never shared between containers. Disposal releases
//! each row in index order, then the row index itself.

use std::fmt;

use natarray_alloc::Element;
use natarray_core::{Allocator, ArrayError, ArrayOptions};

use crate::array1d::{check_index, check_size, Array1D};

/// An owned, jagged collection of independently sized rows.
///
/// The container-level lock is independent of each row's own lock. It
/// gates every write path through the container: [`Array2D::set`],
/// [`Array2D::fill`] and mutable row access through [`Array2D::row`].
/// Shared access through [`Array2D::row_ref`] is never gated. A row's own
/// lock still applies to writes made through that row.
pub struct Array2D<T: Element> {
    rows: Vec<Array1D<T>>,
    created: bool,
    locked: bool,
    allocator: Allocator,
}

impl<T: Element> Array2D<T> {
    /// An empty, never-created container.
    pub const fn empty() -> Self {
        Self {
            rows: Vec::new(),
            created: false,
            locked: false,
            allocator: Allocator::None,
        }
    }

    /// Allocate `row_count` rows of `col_count` elements each.
    ///
    /// With `options.clear` every element is zero; without it every element
    /// is `fill`. `options.locked` applies to the container, not the rows.
    pub fn create_rectangular(
        row_count: isize,
        col_count: isize,
        allocator: Allocator,
        fill: T,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        let row_count = check_size(row_count)?;
        check_size(col_count)?;
        Self::check_allocator(allocator)?;
        options.validate()?;

        let mut rows = Vec::new();
        rows.try_reserve_exact(row_count)
            .map_err(|_| ArrayError::AllocationFailed {
                bytes: row_count.saturating_mul(std::mem::size_of::<Array1D<T>>()),
                align: std::mem::align_of::<Array1D<T>>(),
            })?;
        let row_options = options.with_locked(false).with_min_size(0);
        for _ in 0..row_count {
            rows.push(if options.clear {
                Array1D::create(col_count, allocator, row_options)?
            } else {
                Array1D::create_filled(col_count, allocator, fill, row_options)?
            });
        }

        tracing::debug!(
            %allocator,
            rows = row_count,
            cols = col_count,
            clear = options.clear,
            "array2d created (rectangular)"
        );
        Ok(Self::from_rows(rows, allocator, options.locked))
    }

    /// Allocate a `size` by `size` grid. See
    /// [`create_rectangular`](Array2D::create_rectangular).
    pub fn create_square(
        size: isize,
        allocator: Allocator,
        fill: T,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        Self::create_rectangular(size, size, allocator, fill, options)
    }

    /// Allocate one row per inner sequence, each sized and populated from it.
    ///
    /// `options.min_size` is ignored: row lengths come from the source.
    pub fn create_from_jagged<S: AsRef<[T]>>(
        source: &[S],
        allocator: Allocator,
        options: ArrayOptions,
    ) -> Result<Self, ArrayError> {
        Self::check_allocator(allocator)?;
        options.validate()?;

        let row_options = options.with_locked(false).with_min_size(0);
        let rows = source
            .iter()
            .map(|row| Array1D::create_from(row.as_ref(), allocator, row_options))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(%allocator, rows = rows.len(), "array2d created (jagged)");
        Ok(Self::from_rows(rows, allocator, options.locked))
    }

    fn check_allocator(allocator: Allocator) -> Result<(), ArrayError> {
        if allocator.is_allocating() {
            Ok(())
        } else {
            Err(ArrayError::invalid_argument(
                "cannot allocate under Allocator::None",
            ))
        }
    }

    fn from_rows(rows: Vec<Array1D<T>>, allocator: Allocator, locked: bool) -> Self {
        Self {
            rows,
            created: true,
            locked,
            allocator,
        }
    }

    fn rows_checked(&self) -> Result<&[Array1D<T>], ArrayError> {
        if self.created {
            Ok(&self.rows)
        } else {
            Err(ArrayError::InvalidState)
        }
    }

    /// Mutable reference to the row at `index`.
    ///
    /// Fails with [`ArrayError::LockedViolation`] while the container is
    /// locked; use [`row_ref`](Array2D::row_ref) to read. Element access and
    /// its failures (bounds, row lock) are then the row's own.
    pub fn row(&mut self, index: isize) -> Result<&mut Array1D<T>, ArrayError> {
        let len = self.rows_checked()?.len();
        if self.locked {
            return Err(ArrayError::LockedViolation);
        }
        let i = check_index(index, len)?;
        Ok(&mut self.rows[i])
    }

    /// Shared reference to the row at `index`.
    pub fn row_ref(&self, index: isize) -> Result<&Array1D<T>, ArrayError> {
        let rows = self.rows_checked()?;
        let i = check_index(index, rows.len())?;
        Ok(&rows[i])
    }

    /// Length of the row at `index`.
    pub fn row_len(&self, index: isize) -> Result<usize, ArrayError> {
        Ok(self.row_ref(index)?.len())
    }

    /// Read the element at (`row`, `col`).
    pub fn get(&self, row: isize, col: isize) -> Result<T, ArrayError> {
        self.row_ref(row)?.get(col)
    }

    /// Write `value` at (`row`, `col`).
    ///
    /// Fails with [`ArrayError::LockedViolation`] if either the container or
    /// the target row is locked.
    pub fn set(&mut self, row: isize, col: isize, value: T) -> Result<(), ArrayError> {
        self.rows_checked()?;
        if self.locked {
            return Err(ArrayError::LockedViolation);
        }
        self.row(row)?.set(col, value)
    }

    /// Set every element of every row to `value`.
    ///
    /// Checks every lock before writing anything, so a failure leaves the
    /// container unchanged.
    pub fn fill(&mut self, value: T) -> Result<(), ArrayError> {
        let rows = self.rows_checked()?;
        if self.locked || rows.iter().any(Array1D::is_locked) {
            return Err(ArrayError::LockedViolation);
        }
        for row in &mut self.rows {
            row.fill(value)?;
        }
        Ok(())
    }

    /// Engage the container-level write-lock.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Release the container-level write-lock.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the container-level write-lock is engaged.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Reshaping is not supported: row lengths are fixed at construction.
    pub fn resize(
        &mut self,
        _row_count: isize,
        _col_count: isize,
        _allocator: Allocator,
    ) -> Result<(), ArrayError> {
        Err(ArrayError::Unsupported {
            operation: "array2d resize",
        })
    }

    /// Copy every row into a new `Vec<Vec<T>>`.
    pub fn to_vecs(&self) -> Result<Vec<Vec<T>>, ArrayError> {
        self.rows_checked()?.iter().map(Array1D::to_vec).collect()
    }

    /// Iterate over the rows. Yields nothing when not created.
    pub fn rows(&self) -> std::slice::Iter<'_, Array1D<T>> {
        self.rows.iter()
    }

    /// Release every row in index order, then the row index.
    ///
    /// Disposing an empty container is a no-op.
    pub fn dispose(&mut self) {
        if !self.created {
            return;
        }
        for row in &mut self.rows {
            row.dispose();
        }
        let rows = std::mem::take(&mut self.rows).len();
        tracing::debug!(allocator = %self.allocator, rows, "array2d disposed");
        self.created = false;
        self.locked = false;
        self.allocator = Allocator::None;
    }

    /// Number of rows. Zero when not created.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Alias of [`row_count`](Array2D::row_count).
    pub fn len(&self) -> usize {
        self.row_count()
    }

    /// Whether the container has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the container has been created and not yet disposed.
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// The strategy shared by the row index and every row.
    pub fn allocator(&self) -> Allocator {
        self.allocator
    }
}

impl<T: Element> Default for Array2D<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array2D")
            .field("created", &self.created)
            .field("locked", &self.locked)
            .field("allocator", &self.allocator)
            .field("rows", &self.rows)
            .finish()
    }
}
