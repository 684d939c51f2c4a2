//! Runtime values that can be turned into sort keys.
//!
//! This module provides the [`Value`] enum, the closed set of value kinds the
//! codec understands.
//!
//! # Example
//!
//! ```
//! use sortkey_core::Value;
//!
//! let name: Value = "ala".into();
//! let count: Value = 17i64.into();
//! let row = Value::tuple([name.clone(), count, Value::Int(99)]);
//!
//! assert_eq!(name.as_str(), Some("ala"));
//! assert_eq!(row.as_tuple().map(<[Value]>::len), Some(3));
//! ```

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::encoding::sortable::tags;

/// A typed runtime value.
///
/// | Variant | Rust Type | Ordering |
/// |---------|-----------|----------|
/// | `Null` | - | before everything |
/// | `Bool` | `bool` | false < true |
/// | `Int` | `i64` | numeric |
/// | `Float` | `f64` | IEEE total order, `-0.0 < +0.0` |
/// | `String` | `Vec<u8>` | byte-wise, prefix first |
/// | `Tuple` | `Vec<Value>` | element-wise, prefix first |
///
/// Equality is structural: floats compare by bit pattern, so `-0.0` and
/// `+0.0` are different values and a NaN equals an identical NaN. This is the
/// same relation the encoding induces on bytes, which makes
/// `decode(encode(v)) == v` meaningful for every value.
///
/// Values of different variants order by variant, in the table order above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Byte string; not required to be valid UTF-8
    String(Vec<u8>),
    /// Ordered composite of values
    Tuple(Vec<Value>),
}

impl Value {
    /// Creates a string value from any byte content.
    #[inline]
    #[must_use]
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Self::String(bytes.into())
    }

    /// Creates a tuple from anything convertible to values.
    #[must_use]
    pub fn tuple<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float if it is one.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the raw bytes of a string value.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(b) => Some(b),
            _ => None,
        }
    }

    /// Returns a string value as `&str` if its bytes are valid UTF-8.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Returns the elements of a tuple value.
    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Tuple(_) => "tuple",
        }
    }

    /// The tag byte that prefixes this value's encoding.
    ///
    /// Cross-variant ordering follows this byte.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Null => tags::NULL,
            Self::Bool(_) => tags::BOOL,
            Self::Int(_) => tags::INT,
            Self::Float(_) => tags::FLOAT,
            Self::String(_) => tags::STRING,
            Self::Tuple(_) => tags::TUPLE,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag().hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(i) => i.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::String(b) => b.hash(state),
            Self::Tuple(elements) => elements.hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Tuple(a), Self::Tuple(b)) => a.cmp(b),
            _ => self.tag().cmp(&other.tag()),
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s.into_bytes())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Value {
    #[inline]
    fn from(b: Vec<u8>) -> Self {
        Self::String(b)
    }
}

impl From<&[u8]> for Value {
    #[inline]
    fn from(b: &[u8]) -> Self {
        Self::String(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(elements: Vec<Value>) -> Self {
        Self::Tuple(elements)
    }
}
