use std::ptr;

/// Producer-allocated UTF-8 string handed to C.
///
/// The buffer holds `count` bytes followed by a NUL, so it can be read as a C
/// string. Every non-null string must be returned to
/// [`namematch_free_bridged_string`](crate::ffi::namematch_free_bridged_string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct BridgedStringRef {
    pub data: *const u8,
    pub count: usize,
}

impl BridgedStringRef {
    pub const fn null() -> Self {
        Self {
            data: ptr::null(),
            count: 0,
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    pub fn from_string(text: impl Into<String>) -> Self {
        let mut bytes = text.into().into_bytes();
        let count = bytes.len();
        bytes.push(0);
        let data = Box::into_raw(bytes.into_boxed_slice()).cast::<u8>().cast_const();
        Self { data, count }
    }

    /// Borrows the text without the trailing NUL.
    ///
    /// # Safety
    ///
    /// `self` must come from [`from_string`](Self::from_string) and not be freed yet.
    pub unsafe fn as_str(&self) -> &str {
        if self.data.is_null() {
            return "";
        }
        // SAFETY: built from a `String` of exactly `count` bytes.
        unsafe { std::str::from_utf8_unchecked(std::slice::from_raw_parts(self.data, self.count)) }
    }

    /// # Safety
    ///
    /// `self` must come from [`from_string`](Self::from_string) and is freed at most once.
    pub unsafe fn free(self) {
        if self.data.is_null() {
            return;
        }
        let slice = ptr::slice_from_raw_parts_mut(self.data.cast_mut(), self.count + 1);
        // SAFETY: reconstructs the boxed slice leaked in `from_string`.
        drop(unsafe { Box::from_raw(slice) });
    }
}

impl Default for BridgedStringRef {
    fn default() -> Self {
        Self::null()
    }
}
