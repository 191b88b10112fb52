//! Runtime value types for field access.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Search, sorting, filtering and default cell rendering all go through
//! it, so [`Value::to_text`] is the one place where values become text.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Runtime value of a record field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use tabview::{Value, Number};
///
/// struct Expense {
///     description: String,
///     amount: f64,
/// }
///
/// fn accessor<'a>(expense: &'a Expense, field: &str) -> Value<'a> {
///     match field {
///         "description" => Value::String(&expense.description),
///         "amount" => Value::Number(Number::F64(expense.amount)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts the value to its text form.
    ///
    /// Strings are returned as-is, numbers use their `Display` form (so a
    /// float `25.0` becomes `"25"`), timestamps become their millisecond
    /// count, booleans become `"true"`/`"false"` and `None` becomes the
    /// empty string.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Timestamp(t) => Cow::Owned(t.as_millis().to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::None => Cow::Borrowed(""),
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            (Number::F64(_), _) | (_, Number::F64(_)) => {
                self.to_f64().partial_cmp(&other.to_f64())
            }
            _ => Some(self.total_cmp(other)),
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Integers compare exactly, including signed against unsigned. As soon
    /// as a float is involved both sides are compared with [`f64::total_cmp`],
    /// which places NaN after positive infinity.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => {
                if a < 0 {
                    Ordering::Less
                } else {
                    (a as u64).cmp(&b)
                }
            }
            (Number::U64(a), Number::I64(b)) => {
                if b < 0 {
                    Ordering::Greater
                } else {
                    a.cmp(&(b as u64))
                }
            }
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

// Conversions from primitive types
impl From<i8> for Number {
    fn from(n: i8) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u8> for Number {
    fn from(n: u8) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u16> for Number {
    fn from(n: u16) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<isize> for Number {
    fn from(n: isize) -> Self {
        Number::I64(n as i64)
    }
}

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// ```
/// use tabview::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp::from_secs(2).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
