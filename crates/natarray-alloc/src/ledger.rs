//! Live-allocation accounting per allocation strategy.
//!
//! Every [`RawBuffer`](crate::RawBuffer) records itself here when it is
//! allocated and again when it is released. The ledger is thread-local:
//! a buffer released on a different thread from the one that allocated it
//! is counted against the releasing thread, saturating at zero.
//!
//! Once the ledger itself has been torn down (a buffer held in another
//! thread-local released during thread exit), recording is skipped and
//! queries report an empty entry.
//!
//! Callers use it to detect leaks (`live_allocations(tag) > 0` at a point
//! where every buffer should have been disposed).

use std::cell::RefCell;

use indexmap::IndexMap;
use natarray_core::Allocator;

/// Accounting for a single allocation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Buffers currently alive under this tag.
    pub live_allocations: usize,
    /// Bytes currently alive under this tag.
    pub live_bytes: usize,
    /// Buffers ever allocated under this tag.
    pub total_allocations: u64,
}

thread_local! {
    static LEDGER: RefCell<IndexMap<Allocator, LedgerEntry>> = RefCell::new(
        Allocator::ALLOCATING
            .iter()
            .map(|&tag| (tag, LedgerEntry::default()))
            .collect(),
    );
}

/// Apply `apply` to `allocator`'s entry. No-op once the ledger is gone.
fn update(allocator: Allocator, apply: impl FnOnce(&mut LedgerEntry)) {
    let _ = LEDGER.try_with(|ledger| {
        if let Ok(mut ledger) = ledger.try_borrow_mut() {
            apply(ledger.entry(allocator).or_default());
        }
    });
}

pub(crate) fn record_alloc(allocator: Allocator, bytes: usize) {
    update(allocator, |entry| {
        entry.live_allocations += 1;
        entry.live_bytes = entry.live_bytes.saturating_add(bytes);
        entry.total_allocations += 1;
    });
}

pub(crate) fn record_release(allocator: Allocator, bytes: usize) {
    update(allocator, |entry| {
        entry.live_allocations = entry.live_allocations.saturating_sub(1);
        entry.live_bytes = entry.live_bytes.saturating_sub(bytes);
    });
}

/// Accounting for `allocator` on the current thread.
pub fn entry(allocator: Allocator) -> LedgerEntry {
    LEDGER
        .try_with(|ledger| {
            ledger
                .try_borrow()
                .ok()
                .and_then(|ledger| ledger.get(&allocator).copied())
        })
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Buffers currently alive under `allocator` on the current thread.
pub fn live_allocations(allocator: Allocator) -> usize {
    entry(allocator).live_allocations
}

/// Bytes currently alive under `allocator` on the current thread.
pub fn live_bytes(allocator: Allocator) -> usize {
    entry(allocator).live_bytes
}

/// Copy of the whole ledger for the current thread, in tag order.
pub fn snapshot() -> IndexMap<Allocator, LedgerEntry> {
    LEDGER
        .try_with(|ledger| ledger.try_borrow().map(|l| l.clone()).ok())
        .ok()
        .flatten()
        .unwrap_or_default()
}
