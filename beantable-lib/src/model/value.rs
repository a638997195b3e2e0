//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::error::FieldError;

/// A dynamic value read from or written to a table cell.
///
/// Cells are read through a record's registered accessor and written through
/// its mutator; both exchange `Value`s so the view can pattern-match instead
/// of casting.
///
/// # Type Mapping
///
/// | Field type | Rust Variant |
/// |------------|--------------|
/// | null | `Null` |
/// | bool | `Bool` |
/// | byte | `Byte` |
/// | short | `Short` |
/// | int | `Int` |
/// | long | `Long` |
/// | float | `Float` |
/// | double | `Double` |
/// | char | `Char` |
/// | text | `String` |
/// | date | `DateTime` |
///
/// `Unavailable` is never produced by a record. The binding returns it when
/// an accessor fails.
///
/// # Example
///
/// ```
/// use beantable_lib::model::Value;
///
/// let label = Value::from("a");
/// let id = Value::from(1i32);
/// let active = Value::from(false);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 8-bit integer.
    Byte(i8),
    /// 16-bit integer.
    Short(i16),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Single character.
    Char(char),
    /// Text value.
    String(String),
    /// Date and time.
    DateTime(DateTime<Utc>),
    /// The accessor failed; displayed as a placeholder.
    Unavailable,
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is the read-failure sentinel.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Value::Unavailable)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Byte(_) => "byte",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Char(_) => "char",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Unavailable => "unavailable",
        }
    }

    /// Numeric view used for cross-type ordering.
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Byte(v) => Some(f64::from(*v)),
            Value::Short(v) => Some(f64::from(*v)),
            Value::Int(v) => Some(f64::from(*v)),
            Value::Long(v) => Some(*v as f64),
            Value::Float(v) => Some(f64::from(*v)),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Total order used by row sorting.
    ///
    /// Nulls and unavailable cells sort first, numbers compare numerically
    /// across widths, and unrelated types fall back to their type name.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        let empty = |v: &Value| matches!(v, Value::Null | Value::Unavailable);
        match (empty(self), empty(other)) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a.total_cmp(&b);
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Char(a), Value::Char(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            _ => self.type_name().cmp(other.type_name()),
        }
    }

    fn mismatch(&self, expected: &'static str) -> FieldError {
        FieldError::type_mismatch(expected, self.type_name())
    }

    /// Converts into a `bool`.
    pub fn into_bool(self) -> Result<bool, FieldError> {
        match self {
            Value::Bool(v) => Ok(v),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Converts into an `i32`, accepting narrower integers.
    pub fn into_i32(self) -> Result<i32, FieldError> {
        match self {
            Value::Byte(v) => Ok(i32::from(v)),
            Value::Short(v) => Ok(i32::from(v)),
            Value::Int(v) => Ok(v),
            other => Err(other.mismatch("int")),
        }
    }

    /// Converts into an `i64`, accepting narrower integers.
    pub fn into_i64(self) -> Result<i64, FieldError> {
        match self {
            Value::Byte(v) => Ok(i64::from(v)),
            Value::Short(v) => Ok(i64::from(v)),
            Value::Int(v) => Ok(i64::from(v)),
            Value::Long(v) => Ok(v),
            other => Err(other.mismatch("long")),
        }
    }

    /// Converts into an `f64`, accepting any numeric value.
    pub fn into_f64(self) -> Result<f64, FieldError> {
        match self.as_f64() {
            Some(v) => Ok(v),
            None => Err(self.mismatch("double")),
        }
    }

    /// Converts into a `String`.
    pub fn into_string(self) -> Result<String, FieldError> {
        match self {
            Value::String(v) => Ok(v),
            Value::Char(c) => Ok(c.to_string()),
            other => Err(other.mismatch("string")),
        }
    }

    /// Converts into an optional `String`, mapping `Null` to `None`.
    pub fn into_opt_string(self) -> Result<Option<String>, FieldError> {
        match self {
            Value::Null => Ok(None),
            other => other.into_string().map(Some),
        }
    }

    /// Converts into a date.
    pub fn into_datetime(self) -> Result<DateTime<Utc>, FieldError> {
        match self {
            Value::DateTime(v) => Ok(v),
            other => Err(other.mismatch("datetime")),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Unavailable => f.write_str("N/A"),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
