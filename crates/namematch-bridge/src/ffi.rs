//! `extern "C"` entry points.
//!
//! Handles are opaque `void*` values. Functions that take a handle by value in the
//! ownership sense (`*_append`, `*_release`, `*_take`, `resolved_loc_new`'s label
//! vector) end the caller's ownership of it; passing the same handle again is a
//! contract violation. Contract violations panic, and a panic cannot unwind out of an
//! `extern "C"` function, so the process aborts.

use std::ffi::c_void;
use std::slice;

use namematch_core::{LabelRangeType, ResolvedLocContext, SourceLoc};
use namematch_lib::{BuildConfiguration, SourceFile, run_name_matcher};

use crate::error::{BridgeError, Result};
use crate::string::BridgedStringRef;
use crate::types::{
    BridgedCharSourceRange, BridgedCharSourceRangeVector, BridgedResolvedLoc,
    BridgedResolvedLocArray, BridgedResolvedLocVector, BridgedResolvedLocView,
    BridgedSourceFile, BridgedSourceLoc, borrow_resolved_loc, borrow_source_file,
    borrow_vector,
};

/// Parses `source` under an optional JSON build configuration.
pub fn parse_source(
    name: &str,
    source: &[u8],
    configuration: Option<&[u8]>,
) -> Result<SourceFile> {
    let source = std::str::from_utf8(source)?;
    let configuration = match configuration {
        Some(json) => {
            let json = std::str::from_utf8(json).map_err(BridgeError::NonUtf8Configuration)?;
            BuildConfiguration::from_json(json)?
        }
        None => BuildConfiguration::default(),
    };
    let file = SourceFile::builder(source)
        .name(name)
        .build_configuration(configuration)
        .parse()?;
    Ok(file)
}

/// One record per position, in order, handed over as a bridged vector.
pub fn match_positions(
    file: &SourceFile,
    positions: &[BridgedSourceLoc],
) -> BridgedResolvedLocVector {
    let positions: Vec<SourceLoc> = positions.iter().copied().map(SourceLoc::from).collect();
    let resolved = run_name_matcher(file, &positions);
    log::debug!(
        "bridged {} resolved locations for {}",
        resolved.len(),
        file.name()
    );
    BridgedResolvedLocVector::from(resolved)
}

/// # Safety
///
/// `data` must point to `len` readable elements unless `len` is zero.
unsafe fn slice_or_empty<'a, T>(data: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        return &[];
    }
    assert!(!data.is_null(), "null buffer with length {len}");
    // SAFETY: non-null with `len` elements per the caller's contract.
    unsafe { slice::from_raw_parts(data, len) }
}

#[unsafe(no_mangle)]
pub extern "C" fn namematch_char_source_range_vector_new() -> *mut c_void {
    BridgedCharSourceRangeVector::new().into_raw()
}

/// # Safety
///
/// `vector` must be a live range-vector handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_char_source_range_vector_push(
    vector: *mut c_void,
    range: BridgedCharSourceRange,
) {
    let mut labels = unsafe { BridgedCharSourceRangeVector::from_raw(vector) };
    labels.push(range);
    labels.leak();
}

/// Frees a range vector that was never passed to `namematch_resolved_loc_new`.
///
/// # Safety
///
/// `vector` must be a live range-vector handle; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_char_source_range_vector_release(vector: *mut c_void) {
    drop(unsafe { BridgedCharSourceRangeVector::from_raw(vector) });
}

/// Builds a record. `label_ranges` is consumed; null means no labels.
///
/// # Safety
///
/// `label_ranges` must be null or a live range-vector handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_new(
    range: BridgedCharSourceRange,
    label_ranges: *mut c_void,
    first_trailing_label: u32,
    label_type: u8,
    is_active: bool,
    context: u8,
) -> *mut c_void {
    let labels = if label_ranges.is_null() {
        BridgedCharSourceRangeVector::new()
    } else {
        unsafe { BridgedCharSourceRangeVector::from_raw(label_ranges) }
    };
    let Some(label_type) = LabelRangeType::from_raw(label_type) else {
        panic!("invalid label range type {label_type}");
    };
    let Some(context) = ResolvedLocContext::from_raw(context) else {
        panic!("invalid resolved location context {context}");
    };
    BridgedResolvedLoc::new(
        range,
        labels,
        first_trailing_label,
        label_type,
        is_active,
        context,
    )
    .into_raw()
}

/// Writes a view of a record handle to `out`.
///
/// # Safety
///
/// `loc` must be a live record handle and `out` writable. The view borrows from the
/// record and dies with it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_get(
    loc: *const c_void,
    out: *mut BridgedResolvedLocView,
) {
    assert!(!out.is_null(), "null output view");
    let loc = unsafe { borrow_resolved_loc(loc) };
    // SAFETY: checked non-null; writability is the caller's contract.
    unsafe { out.write(BridgedResolvedLocView::new(loc)) };
}

/// Frees a record that was never appended, or one handed out by a drain.
///
/// # Safety
///
/// `loc` must be a live record handle; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_release(loc: *mut c_void) {
    drop(unsafe { BridgedResolvedLoc::from_raw(loc) });
}

#[unsafe(no_mangle)]
pub extern "C" fn namematch_resolved_loc_vector_new() -> *mut c_void {
    BridgedResolvedLocVector::new().opaque_value()
}

/// Moves `loc` into `vector`.
///
/// # Safety
///
/// Both must be live handles; `loc` is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_append(
    vector: *mut c_void,
    loc: *mut c_void,
) {
    let mut locs = unsafe { BridgedResolvedLocVector::from_opaque_value(vector) };
    locs.append(unsafe { BridgedResolvedLoc::from_raw(loc) });
    locs.leak();
}

/// The pointer-sized value that stands for `vector`. Checks the handle is live.
///
/// # Safety
///
/// `vector` must be a live vector handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_get_opaque_value(
    vector: *mut c_void,
) -> *mut c_void {
    unsafe { BridgedResolvedLocVector::from_opaque_value(vector) }.opaque_value()
}

/// Reifies a vector handle from an opaque value. Checks the handle is live.
///
/// # Safety
///
/// `opaque` must come from this library and not have been released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_from_opaque_value(
    opaque: *mut c_void,
) -> *mut c_void {
    unsafe { BridgedResolvedLocVector::from_opaque_value(opaque) }.opaque_value()
}

/// # Safety
///
/// `vector` must be a live vector handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_len(vector: *const c_void) -> usize {
    unsafe { borrow_vector(vector) }.len()
}

/// Writes a view of record `index` to `out`. Returns false when out of bounds.
///
/// # Safety
///
/// `vector` must be a live vector handle and `out` writable. The view borrows from
/// the vector and dies with it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_get(
    vector: *const c_void,
    index: usize,
    out: *mut BridgedResolvedLocView,
) -> bool {
    assert!(!out.is_null(), "null output view");
    let Some(loc) = unsafe { borrow_vector(vector) }.get(index) else {
        return false;
    };
    // SAFETY: checked non-null; writability is the caller's contract.
    unsafe { out.write(BridgedResolvedLocView::new(loc)) };
    true
}

/// Moves every record out as owned handles, in order. `vector` stays live and empty
/// and still has to be released.
///
/// # Safety
///
/// `vector` must be a live vector handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_drain(
    vector: *mut c_void,
) -> BridgedResolvedLocArray {
    let mut locs = unsafe { BridgedResolvedLocVector::from_opaque_value(vector) };
    let drained = BridgedResolvedLocArray::from_locs(locs.drain());
    locs.leak();
    drained
}

/// Drains and releases `vector` in one step.
///
/// # Safety
///
/// `vector` must be a live vector handle; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_take(
    vector: *mut c_void,
) -> BridgedResolvedLocArray {
    let locs = unsafe { BridgedResolvedLocVector::from_opaque_value(vector) };
    BridgedResolvedLocArray::from_locs(locs.take_unbridged().into_vec())
}

/// Frees the array returned by a drain or take. The records in it are not freed.
///
/// # Safety
///
/// `array` must come from this library and not have been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_array_free(array: BridgedResolvedLocArray) {
    unsafe { array.free() };
}

/// Frees a vector and every record still in it.
///
/// # Safety
///
/// `vector` must be a live vector handle; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_resolved_loc_vector_release(vector: *mut c_void) {
    unsafe { BridgedResolvedLocVector::from_opaque_value(vector) }.release();
}

/// Parses a UTF-8 buffer. `configuration` is optional JSON (null for defaults).
///
/// Returns null on failure and, when `error` is non-null, stores a message there
/// that must be freed with `namematch_free_bridged_string`.
///
/// # Safety
///
/// Each pointer must reference its stated number of readable bytes (or be null with
/// length zero), and `error` must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_source_file_parse(
    name: *const u8,
    name_len: usize,
    source: *const u8,
    source_len: usize,
    configuration: *const u8,
    configuration_len: usize,
    error: *mut BridgedStringRef,
) -> *mut c_void {
    let name = String::from_utf8_lossy(unsafe { slice_or_empty(name, name_len) });
    let name: &str = if name.is_empty() { "<input>" } else { &name };
    let source = unsafe { slice_or_empty(source, source_len) };
    let configuration = (!configuration.is_null())
        .then(|| unsafe { slice_or_empty(configuration, configuration_len) });

    match parse_source(name, source, configuration) {
        Ok(file) => BridgedSourceFile::new(file).into_raw(),
        Err(err) => {
            log::warn!("failed to parse {name}: {err}");
            if !error.is_null() {
                // SAFETY: checked non-null; writability is the caller's contract.
                unsafe { error.write(BridgedStringRef::from_string(err.to_string())) };
            }
            std::ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `file` must be a live source file handle; it is dead afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_source_file_release(file: *mut c_void) {
    drop(unsafe { BridgedSourceFile::from_raw(file) });
}

/// Renders the file's diagnostics. Empty when the file parsed cleanly.
///
/// # Safety
///
/// `file` must be a live source file handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_source_file_render_diagnostics(
    file: *const c_void,
    colored: bool,
) -> BridgedStringRef {
    let file = unsafe { borrow_source_file(file) };
    BridgedStringRef::from_string(file.render_diagnostics(colored))
}

/// # Safety
///
/// `string` must come from this library and not have been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_free_bridged_string(string: BridgedStringRef) {
    unsafe { string.free() };
}

/// Classifies `count` positions of `file`. The returned vector is owned by the
/// caller, holds exactly `count` records in input order, and must be released once.
///
/// # Safety
///
/// `file` must be a live source file handle and `positions` must point to `count`
/// readable positions (or be null with `count` zero).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namematch_run_name_matcher(
    file: *const c_void,
    positions: *const BridgedSourceLoc,
    count: usize,
) -> *mut c_void {
    let file = unsafe { borrow_source_file(file) };
    let positions = unsafe { slice_or_empty(positions, count) };
    match_positions(file, positions).opaque_value()
}
