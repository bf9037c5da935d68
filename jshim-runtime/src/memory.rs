//! Ownership helpers for objects handed across the C ABI.
//!
//! Every pointer the runtime returns is owned by the caller and must go back
//! through the matching `jshim_free_*` function exactly once.

use std::ffi::{CStr, CString, c_char};

use crate::Value;
use crate::result::ShimResult;

pub(crate) fn abort_with(msg: &str) -> ! {
    eprintln!("jshim runtime error: {}", msg);
    std::process::abort();
}

/// # Safety
/// `ptr` must be null or point to a live value from this runtime.
pub(crate) unsafe fn deref_value<'a>(ptr: *const Value, context: &str) -> &'a Value {
    if ptr.is_null() {
        abort_with(&format!("{} received null pointer", context));
    }
    unsafe { &*ptr }
}

/// Copies a C string argument. Invalid UTF-8 is replaced rather than
/// rejected, so it later fails to parse as digits.
///
/// # Safety
/// `ptr` must be null or point to a valid, null-terminated C string.
pub(crate) unsafe fn read_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Builds a C string for the caller, or null if `s` has an interior nul.
pub(crate) fn into_raw_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

/// `s` must be null or a pointer returned by a jshim-runtime string function.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe { drop(CString::from_raw(s)) };
    }
}

/// `value` must be null or a pointer returned by a jshim-runtime value function.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_free_value(value: *mut Value) {
    if !value.is_null() {
        unsafe { drop(Box::from_raw(value)) };
    }
}

/// `res` must be null or a pointer returned by a jshim-runtime result function.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_free_result(res: *mut ShimResult) {
    if !res.is_null() {
        unsafe { drop(Box::from_raw(res)) };
    }
}
