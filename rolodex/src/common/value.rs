use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

/// Compare two floats for equality with proper NaN handling.
#[inline]
fn num_eq_float(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        true
    } else {
        a == b
    }
}

/// Compare two floats with NaN treated as greater than all other values.
#[inline]
fn num_cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Represents a single field value inside a [`Record`](crate::record::Record).
///
/// # Purpose
/// Provides a unified representation for every value type a record field can
/// hold. The variant set covers what the contact data model and its query
/// layer need: absence, booleans, integers, floats, and text.
///
/// # Characteristics
/// - **Comparable**: implements `Ord` for sorting, with a fixed rank across
///   variants (null < bool < numbers < text) and cross-numeric comparison
/// - **Default**: defaults to `Null`
/// - **Serializable**: serde support behind the `serde` feature
///
/// # Usage
/// Values are usually created through `From` conversions:
/// ```text
/// let v1: Value = "Anna".into();
/// let v2: Value = Value::from(Some("Lee".to_string()));
/// assert!(Value::Null < v1);
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Represents the absence of a value.
    #[default]
    Null,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents a signed 64-bit integer value.
    I64(i64),
    /// Represents a 64-bit floating point value.
    F64(f64),
    /// Represents a text value.
    String(String),
}

impl Value {
    /// Returns `true` if this value is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value holds text.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns the text content if this value holds text.
    pub fn as_string(&self) -> Option<&String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean content if this value holds a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer content if this value holds an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float content if this value holds a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(f) => Some(*f),
            _ => None,
        }
    }

    /// Rank used to order values of different variants.
    #[inline]
    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::I64(_) | Value::F64(_) => 2,
            Value::String(_) => 3,
        }
    }

    /// Numeric view used for cross-type comparison of `I64` and `F64`.
    #[inline]
    fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::I64(i) => Some(*i as f64),
            Value::F64(f) => Some(*f),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => num_eq_float(*a, *b),
            // mixed numeric variants compare by value
            (Value::I64(a), Value::F64(b)) => num_eq_float(*a as f64, *b),
            (Value::F64(a), Value::I64(b)) => num_eq_float(*a, *b as f64),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::I64(a), Value::I64(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => num_cmp_float(a, b),
                _ => self.type_rank().cmp(&other.type_rank()),
            },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::I64(i) => write!(f, "{}", i),
            Value::F64(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::I64(i) => write!(f, "I64({})", i),
            Value::F64(v) => write!(f, "F64({})", v),
            Value::String(s) => write!(f, "String({:?})", s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// Absent optional text maps to `Null`, which is how the contact fields
/// round-trip through records.
impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => Value::String(s),
            None => Value::Null,
        }
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => Value::String(s.to_string()),
            None => Value::Null,
        }
    }
}
