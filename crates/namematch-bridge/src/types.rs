//! Bridged handle types.
//!
//! Plain values (`BridgedSourceLoc`, `BridgedCharSourceRange`) cross the boundary by
//! copy. Everything that owns heap memory crosses as an opaque pointer wrapped in a
//! move-only handle; whoever holds the handle owns the allocation.

use std::ffi::c_void;
use std::ptr;

use namematch_core::{
    CharSourceRange, LabelRangeType, ResolvedLoc, ResolvedLocContext, ResolvedLocVector,
    SourceLoc,
};
use namematch_lib::SourceFile;

use crate::owned::{Owned, borrow_raw};

/// `firstTrailingLabel` value meaning "no trailing closure labels".
pub const NO_TRAILING_LABEL: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct BridgedSourceLoc {
    pub offset: u32,
}

impl From<SourceLoc> for BridgedSourceLoc {
    fn from(loc: SourceLoc) -> Self {
        Self {
            offset: loc.offset(),
        }
    }
}

impl From<BridgedSourceLoc> for SourceLoc {
    fn from(loc: BridgedSourceLoc) -> Self {
        SourceLoc::new(loc.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct BridgedCharSourceRange {
    pub start: BridgedSourceLoc,
    pub byte_length: u32,
}

impl From<CharSourceRange> for BridgedCharSourceRange {
    fn from(range: CharSourceRange) -> Self {
        Self {
            start: range.start().into(),
            byte_length: range.byte_length(),
        }
    }
}

impl From<BridgedCharSourceRange> for CharSourceRange {
    fn from(range: BridgedCharSourceRange) -> Self {
        CharSourceRange::new(range.start.into(), range.byte_length)
    }
}

// Label slices are lent to C as `BridgedCharSourceRange` arrays.
const _: () = {
    assert!(size_of::<BridgedCharSourceRange>() == size_of::<CharSourceRange>());
    assert!(align_of::<BridgedCharSourceRange>() == align_of::<CharSourceRange>());
};

/// Heap vector of label ranges, consumed by [`BridgedResolvedLoc::new`].
#[derive(Debug)]
pub struct BridgedCharSourceRangeVector(Owned<Vec<CharSourceRange>>);

impl BridgedCharSourceRangeVector {
    pub fn new() -> Self {
        Self(Owned::new(Vec::new()))
    }

    pub fn push(&mut self, range: impl Into<CharSourceRange>) {
        self.0.get_mut().push(range.into());
    }

    pub fn len(&self) -> usize {
        self.0.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.get().is_empty()
    }

    pub fn take_unbridged(self) -> Vec<CharSourceRange> {
        self.0.into_inner()
    }

    /// Gives up this handle after a raw-pointer round trip; the C caller keeps the
    /// vector.
    pub fn leak(self) {
        self.0.leak();
    }

    pub fn into_raw(self) -> *mut c_void {
        self.0.into_raw()
    }

    /// # Safety
    ///
    /// `raw` must come from [`into_raw`](Self::into_raw) and not have been adopted since.
    pub unsafe fn from_raw(raw: *mut c_void) -> Self {
        Self(unsafe { Owned::from_raw(raw) })
    }
}

impl Default for BridgedCharSourceRangeVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Heap-allocated record waiting to be appended to a [`BridgedResolvedLocVector`].
#[derive(Debug)]
pub struct BridgedResolvedLoc(Owned<ResolvedLoc>);

impl BridgedResolvedLoc {
    /// Builds a record, consuming `label_ranges`.
    ///
    /// `first_trailing_label` uses [`NO_TRAILING_LABEL`] for "absent". Arguments that
    /// break the record invariants panic, as with [`ResolvedLoc::new`].
    pub fn new(
        range: BridgedCharSourceRange,
        label_ranges: BridgedCharSourceRangeVector,
        first_trailing_label: u32,
        label_type: LabelRangeType,
        is_active: bool,
        context: ResolvedLocContext,
    ) -> Self {
        let first_trailing_label =
            (first_trailing_label != NO_TRAILING_LABEL).then_some(first_trailing_label);
        Self::from(ResolvedLoc::new(
            range.into(),
            label_ranges.take_unbridged(),
            first_trailing_label,
            label_type,
            is_active,
            context,
        ))
    }

    pub fn take_unbridged(self) -> ResolvedLoc {
        self.0.into_inner()
    }

    pub fn into_raw(self) -> *mut c_void {
        self.0.into_raw()
    }

    /// # Safety
    ///
    /// `raw` must come from [`into_raw`](Self::into_raw) and not have been adopted since.
    pub unsafe fn from_raw(raw: *mut c_void) -> Self {
        Self(unsafe { Owned::from_raw(raw) })
    }
}

impl From<ResolvedLoc> for BridgedResolvedLoc {
    fn from(loc: ResolvedLoc) -> Self {
        Self(Owned::new(loc))
    }
}

/// Heap-allocated result vector; the handle returned by the matcher.
///
/// The consumer ends its life exactly once: either [`drain`](Self::drain) then
/// [`release`](Self::release), or [`take_unbridged`](Self::take_unbridged).
#[derive(Debug)]
pub struct BridgedResolvedLocVector(Owned<ResolvedLocVector>);

impl BridgedResolvedLocVector {
    pub fn new() -> Self {
        Self::from(ResolvedLocVector::new())
    }

    pub fn append(&mut self, loc: BridgedResolvedLoc) {
        self.0.get_mut().append(loc.take_unbridged());
    }

    pub fn len(&self) -> usize {
        self.0.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.get().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedLoc> {
        self.0.get().get(index)
    }

    /// Gives the vector away as a pointer-sized value. Nothing is retained.
    pub fn opaque_value(self) -> *mut c_void {
        self.0.into_raw()
    }

    /// Takes ownership back from an opaque value.
    ///
    /// # Safety
    ///
    /// `opaque` must come from [`opaque_value`](Self::opaque_value) and must not have
    /// been reified since.
    pub unsafe fn from_opaque_value(opaque: *mut c_void) -> Self {
        Self(unsafe { Owned::from_raw(opaque) })
    }

    /// Moves every record out, leaving the vector empty but allocated.
    pub fn drain(&mut self) -> Vec<ResolvedLoc> {
        self.0.get_mut().drain()
    }

    /// Gives up this handle after a raw-pointer round trip; the C caller keeps the
    /// vector.
    pub fn leak(self) {
        self.0.leak();
    }

    pub fn release(self) {
        drop(self.0.into_inner());
    }

    /// Drain and release in one step.
    pub fn take_unbridged(self) -> ResolvedLocVector {
        self.0.into_inner()
    }
}

impl Default for BridgedResolvedLocVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ResolvedLocVector> for BridgedResolvedLocVector {
    fn from(vector: ResolvedLocVector) -> Self {
        Self(Owned::new(vector))
    }
}

/// Records moved out of a vector, one owned [`BridgedResolvedLoc`] handle each.
///
/// Every handle is released on its own; the array itself goes back through
/// [`namematch_resolved_loc_array_free`](crate::ffi::namematch_resolved_loc_array_free),
/// which does not touch the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct BridgedResolvedLocArray {
    pub data: *mut *mut c_void,
    pub count: usize,
}

impl BridgedResolvedLocArray {
    pub const fn empty() -> Self {
        Self {
            data: ptr::null_mut(),
            count: 0,
        }
    }

    pub fn from_locs(locs: Vec<ResolvedLoc>) -> Self {
        if locs.is_empty() {
            return Self::empty();
        }
        let handles: Box<[*mut c_void]> = locs
            .into_iter()
            .map(|loc| BridgedResolvedLoc::from(loc).into_raw())
            .collect();
        let count = handles.len();
        let data = Box::into_raw(handles).cast::<*mut c_void>();
        Self { data, count }
    }

    /// # Safety
    ///
    /// `self` must come from [`from_locs`](Self::from_locs) and not be freed yet.
    pub unsafe fn handles(&self) -> &[*mut c_void] {
        if self.data.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.data, self.count) }
    }

    /// Frees the array. The records it points to stay live.
    ///
    /// # Safety
    ///
    /// `self` must come from [`from_locs`](Self::from_locs) and is freed at most once.
    pub unsafe fn free(self) {
        if self.data.is_null() {
            return;
        }
        let slice = ptr::slice_from_raw_parts_mut(self.data, self.count);
        // SAFETY: reconstructs the boxed slice leaked in `from_locs`.
        drop(unsafe { Box::from_raw(slice) });
    }
}

impl Default for BridgedResolvedLocArray {
    fn default() -> Self {
        Self::empty()
    }
}

/// Read-only view of one record for C callers.
///
/// Borrowed from the vector or record handle it was read from: `label_ranges` stays
/// valid until that owner is drained or released.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct BridgedResolvedLocView {
    pub range: BridgedCharSourceRange,
    pub label_ranges: *const BridgedCharSourceRange,
    pub label_count: usize,
    pub first_trailing_label: u32,
    pub label_type: u8,
    pub context: u8,
    pub is_active: bool,
}

impl BridgedResolvedLocView {
    pub fn new(loc: &ResolvedLoc) -> Self {
        let labels = loc.label_ranges();
        Self {
            range: loc.range().into(),
            label_ranges: labels.as_ptr().cast(),
            label_count: labels.len(),
            first_trailing_label: loc.first_trailing_label().unwrap_or(NO_TRAILING_LABEL),
            label_type: loc.label_type().as_raw(),
            context: loc.context().as_raw(),
            is_active: loc.is_active(),
        }
    }

    /// # Safety
    ///
    /// The vector the view was taken from must still be alive and unmodified.
    pub unsafe fn labels(&self) -> &[BridgedCharSourceRange] {
        if self.label_count == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.label_ranges, self.label_count) }
    }
}

impl Default for BridgedResolvedLocView {
    fn default() -> Self {
        Self::new(&ResolvedLoc::default())
    }
}

/// Borrows a record behind a raw handle.
///
/// # Safety
///
/// `raw` must be a live record handle for the duration of the borrow.
pub(crate) unsafe fn borrow_resolved_loc<'a>(raw: *const c_void) -> &'a ResolvedLoc {
    unsafe { borrow_raw(raw) }
}

/// Borrows a vector behind a raw handle.
///
/// # Safety
///
/// `raw` must be a live vector handle for the duration of the borrow.
pub(crate) unsafe fn borrow_vector<'a>(raw: *const c_void) -> &'a ResolvedLocVector {
    unsafe { borrow_raw(raw) }
}

/// Parsed source file owned by a C caller.
#[derive(Debug)]
pub struct BridgedSourceFile(Owned<SourceFile>);

impl BridgedSourceFile {
    pub fn new(file: SourceFile) -> Self {
        Self(Owned::new(file))
    }

    pub fn get(&self) -> &SourceFile {
        self.0.get()
    }

    pub fn take_unbridged(self) -> SourceFile {
        self.0.into_inner()
    }

    pub fn into_raw(self) -> *mut c_void {
        self.0.into_raw()
    }

    /// # Safety
    ///
    /// `raw` must come from [`into_raw`](Self::into_raw) and not have been adopted since.
    pub unsafe fn from_raw(raw: *mut c_void) -> Self {
        Self(unsafe { Owned::from_raw(raw) })
    }
}

/// Borrows a source file behind a raw handle.
///
/// # Safety
///
/// `raw` must be a live source file handle for the duration of the borrow.
pub(crate) unsafe fn borrow_source_file<'a>(raw: *const c_void) -> &'a SourceFile {
    unsafe { borrow_raw(raw) }
}
