use std::ffi::c_char;

use crate::Value;
use crate::memory::read_c_str;

// Generated code passes everything typed `Object` as `*mut Value`, so
// primitives are boxed here before reaching `equals` and friends.

pub(crate) fn into_raw_value(value: Value) -> *mut Value {
    Box::into_raw(Box::new(value))
}

#[unsafe(no_mangle)]
pub extern "C" fn jshim_box_null() -> *mut Value {
    into_raw_value(Value::Null)
}

#[unsafe(no_mangle)]
pub extern "C" fn jshim_box_int(v: i32) -> *mut Value {
    into_raw_value(Value::Int(v))
}

#[unsafe(no_mangle)]
pub extern "C" fn jshim_box_bool(v: i32) -> *mut Value {
    into_raw_value(Value::Bool(v != 0))
}

/// A null `v` boxes to `Value::Null`.
///
/// # Safety
/// `v` must be null or point to a valid, null-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_box_str(v: *const c_char) -> *mut Value {
    match unsafe { read_c_str(v) } {
        Some(s) => into_raw_value(Value::Str(s)),
        None => into_raw_value(Value::Null),
    }
}
