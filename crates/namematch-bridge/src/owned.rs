//! Single-owner heap allocation that can travel through an untyped pointer.

use std::any::type_name;
use std::ffi::c_void;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use crate::ledger;

/// Owns one `Box<T>`. Not `Copy`, not `Clone`: giving the value away consumes the
/// handle, so a second take does not compile on the Rust side.
pub(crate) struct Owned<T> {
    ptr: NonNull<T>,
}

impl<T> Owned<T> {
    pub(crate) fn new(value: T) -> Self {
        let ptr = NonNull::from(Box::leak(Box::new(value)));
        ledger::register(ptr.as_ptr() as usize, type_name::<T>());
        Self { ptr }
    }

    /// Re-adopts an allocation previously given away with [`into_raw`](Self::into_raw).
    ///
    /// Panics on null and misaligned pointers, and in debug builds on pointers that
    /// are not a live `T`.
    ///
    /// # Safety
    ///
    /// `raw` must come from `Owned::<T>::into_raw` and must not have been adopted
    /// since.
    pub(crate) unsafe fn from_raw(raw: *mut c_void) -> Self {
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            panic!("null {} handle", type_name::<T>());
        };
        if !ptr.as_ptr().is_aligned() {
            panic!("misaligned {} handle {raw:p}", type_name::<T>());
        }
        ledger::check_live(ptr.as_ptr() as usize, type_name::<T>());
        Self { ptr }
    }

    /// Gives the allocation away without releasing it.
    pub(crate) fn into_raw(self) -> *mut c_void {
        let this = ManuallyDrop::new(self);
        this.ptr.as_ptr().cast()
    }

    /// Ends this handle without freeing. Whoever holds the raw pointer owns the
    /// allocation again.
    pub(crate) fn leak(self) {
        std::mem::forget(self);
    }

    /// Moves the value out and frees the allocation.
    pub(crate) fn into_inner(self) -> T {
        let this = ManuallyDrop::new(self);
        ledger::release(this.ptr.as_ptr() as usize, type_name::<T>());
        // SAFETY: the pointer came from `Box::leak` and ownership ends here.
        *unsafe { Box::from_raw(this.ptr.as_ptr()) }
    }

    pub(crate) fn get(&self) -> &T {
        // SAFETY: the allocation is live for as long as `self` is.
        unsafe { self.ptr.as_ref() }
    }

    pub(crate) fn get_mut(&mut self) -> &mut T {
        // SAFETY: `&mut self` guarantees exclusive access.
        unsafe { self.ptr.as_mut() }
    }
}

impl<T> Drop for Owned<T> {
    fn drop(&mut self) {
        ledger::release(self.ptr.as_ptr() as usize, type_name::<T>());
        // SAFETY: the pointer came from `Box::leak` and nobody else owns it.
        drop(unsafe { Box::from_raw(self.ptr.as_ptr()) });
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

// SAFETY: `Owned<T>` is a uniquely owned `Box<T>`.
unsafe impl<T: Send> Send for Owned<T> {}
unsafe impl<T: Sync> Sync for Owned<T> {}

/// Borrows the value behind a raw handle without taking ownership.
///
/// # Safety
///
/// Same contract as [`Owned::from_raw`], and the returned reference must not outlive
/// the allocation.
pub(crate) unsafe fn borrow_raw<'a, T>(raw: *const c_void) -> &'a T {
    let Some(ptr) = NonNull::new(raw.cast_mut().cast::<T>()) else {
        panic!("null {} handle", type_name::<T>());
    };
    if !ptr.as_ptr().is_aligned() {
        panic!("misaligned {} handle {raw:p}", type_name::<T>());
    }
    ledger::check_live(ptr.as_ptr() as usize, type_name::<T>());
    // SAFETY: checked non-null and aligned; liveness is the caller's contract.
    unsafe { ptr.as_ref() }
}
