//! Parse failures raised by the numeric shims.
//!
//! Messages follow `java.lang.NumberFormatException` so translated code
//! that prints or compares them sees the text it was written against.

/// Textual input could not be read as an `int`.
///
/// The variants split the single source-platform exception by cause; the
/// host parser already tells these apart, and callers that only care that
/// parsing failed can treat every variant the same.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The input pointer handed across the C ABI was null.
    #[error("Cannot parse null string: null")]
    Null,

    /// The input was the empty string.
    #[error("For input string: \"\"{}", radix_suffix(.radix))]
    Empty { radix: u32 },

    /// A character other than a digit of the radix, outside the optional
    /// leading sign. A bare sign lands here too.
    #[error("For input string: \"{input}\"{}", radix_suffix(.radix))]
    InvalidDigit { input: String, radix: u32 },

    /// Well-formed digits whose value does not fit in an `i32`.
    #[error("For input string: \"{input}\"{}", radix_suffix(.radix))]
    OutOfRange { input: String, radix: u32 },

    /// The radix is outside `2..=36`.
    #[error("radix {radix} {}", radix_bound(.radix))]
    InvalidRadix { radix: u32 },
}

impl FormatError {
    /// The text that failed to parse, if there was any.
    pub fn input(&self) -> Option<&str> {
        match self {
            FormatError::Empty { .. } => Some(""),
            FormatError::InvalidDigit { input, .. } | FormatError::OutOfRange { input, .. } => {
                Some(input)
            }
            FormatError::Null | FormatError::InvalidRadix { .. } => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, FormatError::OutOfRange { .. })
    }
}

fn radix_suffix(radix: &u32) -> String {
    if *radix == 10 {
        String::new()
    } else {
        format!(" under radix {}", radix)
    }
}

fn radix_bound(radix: &u32) -> &'static str {
    if *radix < 2 {
        "less than Character.MIN_RADIX"
    } else {
        "greater than Character.MAX_RADIX"
    }
}
