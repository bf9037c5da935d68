use std::ffi::c_char;
use std::fmt;

use crate::Value;
use crate::boxing::into_raw_value;
use crate::error::FormatError;
use crate::memory::{abort_with, into_raw_c_string};

/// Outcome of a fallible shim call made through the C ABI. The error side
/// holds the exception message translated code would have caught.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShimResult {
    Ok(Box<Value>),
    Err(String),
}

impl ShimResult {
    pub fn ok(val: Value) -> ShimResult {
        ShimResult::Ok(Box::new(val))
    }

    pub fn err(msg: String) -> ShimResult {
        ShimResult::Err(msg)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ShimResult::Ok(_))
    }
}

impl From<Result<Value, FormatError>> for ShimResult {
    fn from(res: Result<Value, FormatError>) -> Self {
        match res {
            Ok(v) => ShimResult::ok(v),
            Err(e) => ShimResult::err(e.to_string()),
        }
    }
}

impl fmt::Display for ShimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimResult::Ok(v) => write!(f, "Ok({})", v),
            ShimResult::Err(e) => write!(f, "Err({})", e),
        }
    }
}

/// # Safety
/// `res` must be null or point to a live result from this runtime.
unsafe fn deref_result<'a>(res: *const ShimResult, context: &str) -> &'a ShimResult {
    if res.is_null() {
        abort_with(&format!("{} received null pointer", context));
    }
    unsafe { &*res }
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_result_is_ok(res: *const ShimResult) -> bool {
    unsafe { deref_result(res, "result_is_ok") }.is_ok()
}

/// The int payload of a successful parse. Calling this on an error result
/// aborts; check `jshim_result_is_ok` first.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_result_int(res: *const ShimResult) -> i32 {
    match unsafe { deref_result(res, "result_int") } {
        ShimResult::Ok(v) => match **v {
            Value::Int(i) => i,
            Value::Integer(i) => i.int_value(),
            ref other => abort_with(&format!("expected int result, got {}", other.type_name())),
        },
        ShimResult::Err(e) => abort_with(&format!("expected Ok, got Err({})", e)),
    }
}

/// A fresh copy of the success payload, or null for an error result.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_result_value(res: *const ShimResult) -> *mut Value {
    match unsafe { deref_result(res, "result_value") } {
        ShimResult::Ok(v) => into_raw_value((**v).clone()),
        ShimResult::Err(_) => std::ptr::null_mut(),
    }
}

/// The error message, or null for a successful result.
#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[unsafe(no_mangle)]
pub extern "C" fn jshim_result_error_message(res: *const ShimResult) -> *mut c_char {
    match unsafe { deref_result(res, "result_error_message") } {
        ShimResult::Ok(_) => std::ptr::null_mut(),
        ShimResult::Err(e) => into_raw_c_string(e.clone()),
    }
}
