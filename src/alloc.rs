//! Fail-fast allocation for `Id` buffers.
//!
//! The queue acquires memory in units of [`Id`] through the process
//! allocator. Allocation failure terminates the process via
//! `handle_alloc_error`; there is no recoverable error channel, so callers
//! never see a partially-grown buffer.
//!
//! Process-wide counters record every fresh allocation and every in-place
//! grow. They exist for diagnostics: amortization tests and benchmarks read
//! them to verify how much allocator traffic an operation sequence caused.

use core::alloc::Layout;
use core::ptr::NonNull;
use core::sync::atomic::{AtomicU64, Ordering};
use std::alloc::{alloc, dealloc, handle_alloc_error, realloc};

use crate::Id;

static ALLOCATIONS: AtomicU64 = AtomicU64::new(0);
static REALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// Number of fresh `Id` buffer allocations performed by this process.
#[inline]
pub fn allocation_count() -> u64 {
    ALLOCATIONS.load(Ordering::Relaxed)
}

/// Number of `Id` buffer reallocations performed by this process.
#[inline]
pub fn reallocation_count() -> u64 {
    REALLOCATIONS.load(Ordering::Relaxed)
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("Id buffer capacity overflows the address space");
}

#[inline]
fn layout_for(cap: usize) -> Layout {
    match Layout::array::<Id>(cap) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

/// Allocates a buffer of `cap` handles. Aborts the process on failure.
pub(crate) fn alloc_ids(cap: usize) -> NonNull<Id> {
    debug_assert!(cap > 0);
    let layout = layout_for(cap);
    // SAFETY: `cap > 0` and `Id` is not zero-sized, so the layout is non-zero.
    let ptr = unsafe { alloc(layout) };
    let Some(ptr) = NonNull::new(ptr.cast::<Id>()) else {
        handle_alloc_error(layout);
    };
    ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    ptr
}

/// Grows a buffer from `old_cap` to `new_cap` handles, preserving contents.
/// Aborts the process on failure.
///
/// # Safety
/// `ptr` must have been returned by [`alloc_ids`] or [`realloc_ids`] with
/// capacity `old_cap`, and not freed since.
pub(crate) unsafe fn realloc_ids(ptr: NonNull<Id>, old_cap: usize, new_cap: usize) -> NonNull<Id> {
    debug_assert!(new_cap > old_cap);
    let new_layout = layout_for(new_cap);
    let ptr = realloc(
        ptr.as_ptr().cast::<u8>(),
        layout_for(old_cap),
        new_layout.size(),
    );
    let Some(ptr) = NonNull::new(ptr.cast::<Id>()) else {
        handle_alloc_error(new_layout);
    };
    REALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    ptr
}

/// Releases a buffer of `cap` handles.
///
/// # Safety
/// `ptr` must have been returned by [`alloc_ids`] or [`realloc_ids`] with
/// capacity `cap`, and not freed since.
pub(crate) unsafe fn free_ids(ptr: NonNull<Id>, cap: usize) {
    dealloc(ptr.as_ptr().cast::<u8>(), layout_for(cap));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_grow_free_roundtrip() {
        let ptr = alloc_ids(8);
        unsafe {
            ptr.as_ptr().write(Id::new(42));
            let ptr = realloc_ids(ptr, 8, 16);
            assert_eq!(ptr.as_ptr().read(), Id::new(42));
            free_ids(ptr, 16);
        }
    }

    #[test]
    fn counters_are_monotonic() {
        let allocs = allocation_count();
        let reallocs = reallocation_count();
        let ptr = alloc_ids(4);
        let ptr = unsafe { realloc_ids(ptr, 4, 8) };
        unsafe { free_ids(ptr, 8) };
        assert!(allocation_count() > allocs);
        assert!(reallocation_count() > reallocs);
    }
}
