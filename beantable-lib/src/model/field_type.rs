//! Declared field types and their widened column types

use std::fmt;

use super::Value;

/// Primitive-like scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

/// The declared type of a record field.
///
/// `Primitive` fields hold a plain scalar; `Boxed` fields hold the same
/// scalar behind an optional/nullable wrapper and are not editable in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Plain scalar.
    Primitive(Primitive),
    /// Nullable scalar.
    Boxed(Primitive),
    /// Text.
    Text,
    /// Date and time.
    Date,
    /// Anything else, named for diagnostics.
    Other(&'static str),
}

impl FieldType {
    pub const BOOL: FieldType = FieldType::Primitive(Primitive::Bool);
    pub const BYTE: FieldType = FieldType::Primitive(Primitive::Byte);
    pub const SHORT: FieldType = FieldType::Primitive(Primitive::Short);
    pub const INT: FieldType = FieldType::Primitive(Primitive::Int);
    pub const LONG: FieldType = FieldType::Primitive(Primitive::Long);
    pub const FLOAT: FieldType = FieldType::Primitive(Primitive::Float);
    pub const DOUBLE: FieldType = FieldType::Primitive(Primitive::Double);
    pub const CHAR: FieldType = FieldType::Primitive(Primitive::Char);

    /// Returns `true` for primitive-like scalars and text, the only types
    /// that can be edited in a cell.
    pub fn is_editable_kind(&self) -> bool {
        matches!(self, FieldType::Primitive(_) | FieldType::Text)
    }

    /// Widens the declared type to the column value type used for renderer
    /// and editor selection.
    pub fn widen(&self) -> ValueType {
        match self {
            FieldType::Primitive(p) | FieldType::Boxed(p) => match p {
                Primitive::Bool => ValueType::Boolean,
                Primitive::Byte => ValueType::Byte,
                Primitive::Short => ValueType::Short,
                Primitive::Int => ValueType::Integer,
                Primitive::Long => ValueType::Long,
                Primitive::Float => ValueType::Float,
                Primitive::Double => ValueType::Double,
                Primitive::Char => ValueType::Character,
            },
            FieldType::Text => ValueType::String,
            FieldType::Date => ValueType::Date,
            FieldType::Other(name) => ValueType::Object(name),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(p) => write!(f, "{p:?}"),
            FieldType::Boxed(p) => write!(f, "Option<{p:?}>"),
            FieldType::Text => f.write_str("Text"),
            FieldType::Date => f.write_str("Date"),
            FieldType::Other(name) => f.write_str(name),
        }
    }
}

/// Object-level column value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    String,
    Date,
    Object(&'static str),
}

impl ValueType {
    /// Canonical "zero" used when bulk-clearing cells.
    ///
    /// `false` for booleans, zero for numeric scalars, `Null` otherwise.
    pub fn zero_value(&self) -> Value {
        match self {
            ValueType::Boolean => Value::Bool(false),
            ValueType::Byte => Value::Byte(0),
            ValueType::Short => Value::Short(0),
            ValueType::Integer => Value::Int(0),
            ValueType::Long => Value::Long(0),
            ValueType::Float => Value::Float(0.0),
            ValueType::Double => Value::Double(0.0),
            _ => Value::Null,
        }
    }
}
