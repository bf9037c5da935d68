use std::fmt;

use crate::integer::Integer;

/// Values translated code can hand to a shim method expecting an `Object`.
///
/// The set is closed: every comparison first matches on the variant and
/// only then looks at the payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Bool(bool),
    /// An unboxed `int`.
    Int(i32),
    Str(String),
    Integer(Integer),
}

impl Value {
    /// Name of the source-platform type this value stands in for.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int",
            Value::Str(_) => "java.lang.String",
            Value::Integer(_) => "java.lang.Integer",
        }
    }

    /// `Object.equals` as seen by translated code.
    ///
    /// A null receiver equals nothing; callers null-check before calling.
    pub fn equals(&self, other: &Value) -> bool {
        match self {
            Value::Null => false,
            Value::Integer(i) => i.equals(other),
            _ => self == other,
        }
    }

    pub fn as_integer(&self) -> Option<Integer> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<Integer> for Value {
    fn from(i: Integer) -> Self {
        Value::Integer(i)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
        }
    }
}

pub mod boxing;
pub mod error;
pub mod integer;
pub mod memory;
pub mod result;

pub use error::FormatError;
pub use result::ShimResult;
