use std::cmp::Ordering;
use std::ffi::c_char;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::Value;
use crate::boxing::into_raw_value;
use crate::error::FormatError;
use crate::memory::{abort_with, deref_value, into_raw_c_string, read_c_str};
use crate::result::ShimResult;

/// Stand-in for `java.lang.Integer`: an immutable boxed 32-bit signed int.
///
/// Equality, hashing and both renderings depend only on the stored value,
/// so two separately constructed instances holding the same int are
/// interchangeable, including as map keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(i32);

impl Integer {
    pub const MIN_VALUE: i32 = i32::MIN;
    pub const MAX_VALUE: i32 = i32::MAX;
    pub const MIN_RADIX: u32 = 2;
    pub const MAX_RADIX: u32 = 36;

    pub const fn new(value: i32) -> Self {
        Integer(value)
    }

    /// `Integer.parseInt(String)`.
    ///
    /// Accepts an optional leading `+` or `-` followed by decimal digits,
    /// nothing else. Returns the raw int rather than a boxed instance.
    pub fn parse_int(text: &str) -> Result<i32, FormatError> {
        Self::parse_int_radix(text, 10)
    }

    /// `Integer.parseInt(String, int)`. Letters stand for digits above 9
    /// in either case.
    pub fn parse_int_radix(text: &str, radix: u32) -> Result<i32, FormatError> {
        if !(Self::MIN_RADIX..=Self::MAX_RADIX).contains(&radix) {
            return Err(FormatError::InvalidRadix { radix });
        }
        i32::from_str_radix(text, radix).map_err(|e| match e.kind() {
            IntErrorKind::Empty => FormatError::Empty { radix },
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FormatError::OutOfRange {
                input: text.to_string(),
                radix,
            },
            _ => FormatError::InvalidDigit {
                input: text.to_string(),
                radix,
            },
        })
    }

    /// `Integer.valueOf(String)`: parse, then box.
    pub fn value_of(text: &str) -> Result<Integer, FormatError> {
        Self::parse_int(text).map(Integer)
    }

    pub fn int_value(&self) -> i32 {
        self.0
    }

    pub fn hash_code(&self) -> i32 {
        self.0
    }

    pub fn compare_to(&self, other: &Integer) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// `Integer.equals(Object)`.
    ///
    /// Only another boxed `Integer` with the same value is equal. An
    /// unboxed `int` is not, even when it holds the same number.
    pub fn equals(&self, other: &Value) -> bool {
        match other {
            Value::Integer(o) => o.0 == self.0,
            _ => false,
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// The debug rendering. Always identical to [`Integer::to_display_string`].
    pub fn to_display_repr(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Integer {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_of(s)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer(value)
    }
}

impl From<Integer> for i32 {
    fn from(i: Integer) -> Self {
        i.0
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn jshim_integer_new(v: i32) -> *mut Value {
    into_raw_value(Value::Integer(Integer::new(v)))
}

/// Parses `text` into an unboxed int result (`Value::Int` on success).
///
/// # Safety
/// `text` must be null or point to a valid, null-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_parse(text: *const c_char) -> *mut ShimResult {
    let parsed = match unsafe { read_c_str(text) } {
        Some(s) => Integer::parse_int(&s).map(Value::Int),
        None => Err(FormatError::Null),
    };
    Box::into_raw(Box::new(ShimResult::from(parsed)))
}

/// Parses `text` into a boxed `Integer` result.
///
/// # Safety
/// `text` must be null or point to a valid, null-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_value_of(text: *const c_char) -> *mut ShimResult {
    let parsed = match unsafe { read_c_str(text) } {
        Some(s) => Integer::value_of(&s).map(Value::Integer),
        None => Err(FormatError::Null),
    };
    Box::into_raw(Box::new(ShimResult::from(parsed)))
}

/// False unless `receiver` is a boxed `Integer` equal to `other`. Null
/// pointers on either side compare false.
///
/// # Safety
/// Both pointers must be null or point to live values from this runtime.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_equals(receiver: *const Value, other: *const Value) -> bool {
    if receiver.is_null() || other.is_null() {
        return false;
    }
    match unsafe { &*receiver }.as_integer() {
        Some(i) => i.equals(unsafe { &*other }),
        None => false,
    }
}

/// Returns null if `receiver` is null or not a boxed `Integer`.
///
/// # Safety
/// `receiver` must be null or point to a live value from this runtime.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_to_string(receiver: *const Value) -> *mut c_char {
    if receiver.is_null() {
        return std::ptr::null_mut();
    }
    match unsafe { &*receiver }.as_integer() {
        Some(i) => into_raw_c_string(i.to_display_string()),
        None => std::ptr::null_mut(),
    }
}

/// # Safety
/// `receiver` must point to a live `Value::Integer`; anything else aborts.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_int_value(receiver: *const Value) -> i32 {
    match unsafe { deref_value(receiver, "Integer.intValue") } {
        Value::Integer(i) => i.int_value(),
        other => abort_with(&format!(
            "Integer.intValue called on {}",
            other.type_name()
        )),
    }
}

/// # Safety
/// `receiver` must point to a live `Value::Integer`; anything else aborts.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn jshim_integer_hash_code(receiver: *const Value) -> i32 {
    match unsafe { deref_value(receiver, "Integer.hashCode") } {
        Value::Integer(i) => i.hash_code(),
        other => abort_with(&format!(
            "Integer.hashCode called on {}",
            other.type_name()
        )),
    }
}
