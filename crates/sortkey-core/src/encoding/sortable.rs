//! Sort-order preserving encoding for values.
//!
//! This module provides a binary encoding for [`Value`] types that preserves
//! sort order when comparing the encoded bytes. Sorted key-value stores can
//! then range-scan, iterate and group on values without decoding them.
//!
//! # Encoding Design
//!
//! Every value is a tag byte followed by a payload:
//!
//! | Tag | Variant | Payload |
//! |-----|---------|---------|
//! | `0x01` | `Null` | none |
//! | `0x02` | `Bool` | `0x00` or `0x01` |
//! | `0x03` | `Int` | 8 bytes, sign bit flipped, big-endian |
//! | `0x04` | `Float` | 8 bytes, IEEE total-order transform, big-endian |
//! | `0x05` | `String` | bytes with `0x00` escaped as `0x00 0xFF`, then `0x00 0x00` |
//! | `0x06` | `Tuple` | element encodings, then `0x00` |
//!
//! `0x00` is never a value tag; it marks the end of a tuple.
//!
//! ## Type Ordering
//!
//! Within a variant, byte order equals value order. Values of different
//! variants sort by tag, so `Int(i64::MAX) < Float(-inf)`. Integers and floats
//! are not compared numerically with each other.
//!
//! # Example
//!
//! ```
//! use sortkey_core::encoding::sortable::{decode_sortable, encode_sortable};
//! use sortkey_core::Value;
//!
//! let values = vec![Value::Int(-10), Value::Int(0), Value::Int(10)];
//!
//! let mut encoded: Vec<_> = values.iter().map(|v| encode_sortable(v).unwrap()).collect();
//!
//! // Sorting encoded bytes gives the same order as sorting values
//! encoded.sort();
//!
//! let decoded: Vec<_> = encoded.iter().map(|e| decode_sortable(e).unwrap()).collect();
//!
//! assert_eq!(decoded, values);
//! ```

use tracing::{debug, trace};

use super::float::{decode_float, encode_float, FLOAT_WIDTH};
use super::int::{decode_int, encode_int, INT_WIDTH};
use super::string::{decode_string, encode_string, encoded_string_len};
use super::tuple::{decode_tuple_at_depth, encode_tuple_at_depth};
use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::types::Value;

/// Type tags for sortable encoding.
///
/// These tags define the sort order of different types.
pub mod tags {
    /// Closes a tuple; never starts a value.
    pub const END: u8 = 0x00;
    /// Null values sort first.
    pub const NULL: u8 = 0x01;
    /// Boolean values (payload false=0x00, true=0x01).
    pub const BOOL: u8 = 0x02;
    /// 64-bit signed integers.
    pub const INT: u8 = 0x03;
    /// 64-bit floating point numbers.
    pub const FLOAT: u8 = 0x04;
    /// Byte strings.
    pub const STRING: u8 = 0x05;
    /// Tuples of values.
    pub const TUPLE: u8 = 0x06;
}

/// Encode a value with the default configuration.
///
/// # Errors
///
/// Returns [`CodecError::InvalidFloatBits`] if the value contains a NaN, and
/// [`CodecError::DepthLimitExceeded`] for tuples nested deeper than 64.
///
/// # Example
///
/// ```
/// use sortkey_core::encoding::sortable::encode_sortable;
/// use sortkey_core::Value;
///
/// let encoded_neg = encode_sortable(&Value::Int(-5)).unwrap();
/// let encoded_pos = encode_sortable(&Value::Int(5)).unwrap();
///
/// // Negative numbers sort before positive numbers
/// assert!(encoded_neg < encoded_pos);
/// ```
pub fn encode_sortable(value: &Value) -> CodecResult<Vec<u8>> {
    encode_sortable_with(value, &CodecConfig::default())
}

/// Encode a value with an explicit configuration.
///
/// # Errors
///
/// See [`encode_sortable`]; NaN is accepted under
/// [`NanPolicy::Canonicalize`](crate::config::NanPolicy::Canonicalize).
pub fn encode_sortable_with(value: &Value, config: &CodecConfig) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::new();
    encode_sortable_into(value, config, &mut buf)?;
    trace!(kind = value.type_name(), len = buf.len(), "encoded sort key");
    Ok(buf)
}

/// Append the encoding of `value` to `buf`.
///
/// On error `buf` is restored to its original length.
///
/// # Errors
///
/// See [`encode_sortable_with`].
pub fn encode_sortable_into(
    value: &Value,
    config: &CodecConfig,
    buf: &mut Vec<u8>,
) -> CodecResult<()> {
    let start = buf.len();
    let result = encode_value_into(value, config, 0, buf);
    if result.is_err() {
        buf.truncate(start);
    }
    result
}

/// Decode a buffer holding exactly one encoded value.
///
/// # Errors
///
/// Returns a [`CodecError`] if the bytes are malformed or incomplete, or
/// [`CodecError::TrailingBytes`] if anything follows the value.
///
/// # Example
///
/// ```
/// use sortkey_core::encoding::sortable::{decode_sortable, encode_sortable};
/// use sortkey_core::Value;
///
/// let original = Value::Int(42);
/// let encoded = encode_sortable(&original).unwrap();
/// let decoded = decode_sortable(&encoded).unwrap();
///
/// assert_eq!(decoded, original);
/// ```
pub fn decode_sortable(bytes: &[u8]) -> CodecResult<Value> {
    decode_sortable_with(bytes, &CodecConfig::default())
}

/// Decode a buffer holding exactly one value, with an explicit configuration.
///
/// # Errors
///
/// See [`decode_sortable`].
pub fn decode_sortable_with(bytes: &[u8], config: &CodecConfig) -> CodecResult<Value> {
    let (value, consumed) = decode_sortable_prefix_with(bytes, config)?;
    if consumed != bytes.len() {
        let err = CodecError::TrailingBytes { consumed, len: bytes.len() };
        debug!(error = %err, "sort key decode failed");
        return Err(err);
    }
    Ok(value)
}

/// Decode one value from the front of `bytes` and return the number of bytes consumed.
///
/// This is useful when the encoded value is part of a larger key.
///
/// # Errors
///
/// Returns a [`CodecError`] if the bytes are malformed or incomplete.
pub fn decode_sortable_with_len(bytes: &[u8]) -> CodecResult<(Value, usize)> {
    decode_sortable_prefix_with(bytes, &CodecConfig::default())
}

/// Decode one value from the front of `bytes` with an explicit configuration.
///
/// # Errors
///
/// Returns a [`CodecError`] if the bytes are malformed or incomplete.
pub fn decode_sortable_prefix_with(
    bytes: &[u8],
    config: &CodecConfig,
) -> CodecResult<(Value, usize)> {
    decode_value_at(bytes, 0, config, 0).inspect_err(|err| {
        debug!(error = %err, len = bytes.len(), "sort key decode failed");
    })
}

/// Compute the exact size of a value's encoding.
///
/// Useful for pre-allocating buffers. The walk is iterative, so it is safe to
/// call on values nested deeper than any `max_depth`.
#[must_use]
pub fn sortable_encoded_size(value: &Value) -> usize {
    let mut size = 0;
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        size += 1 + match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => INT_WIDTH,
            Value::Float(_) => FLOAT_WIDTH,
            Value::String(b) => encoded_string_len(b),
            Value::Tuple(elements) => {
                pending.extend(elements);
                1
            }
        };
    }
    size
}

/// Encode one tagged value. `depth` is the number of enclosing tuples.
pub(super) fn encode_value_into(
    value: &Value,
    config: &CodecConfig,
    depth: usize,
    buf: &mut Vec<u8>,
) -> CodecResult<()> {
    buf.push(value.tag());
    match value {
        Value::Null => {}
        Value::Bool(b) => buf.push(u8::from(*b)),
        Value::Int(i) => encode_int(*i, buf),
        Value::Float(f) => encode_float(*f, config.nan_policy, buf)?,
        Value::String(b) => encode_string(b, buf),
        Value::Tuple(elements) => encode_tuple_at_depth(elements, config, depth + 1, buf)?,
    }
    Ok(())
}

/// Decode one tagged value at `offset`. `depth` is the number of enclosing tuples.
///
/// Returns the value and the bytes consumed, tag included.
pub(super) fn decode_value_at(
    data: &[u8],
    offset: usize,
    config: &CodecConfig,
    depth: usize,
) -> CodecResult<(Value, usize)> {
    let tag = *data.get(offset).ok_or(CodecError::truncated(offset, "type tag"))?;
    let payload = offset + 1;

    let (value, consumed) = match tag {
        tags::NULL => (Value::Null, 0),

        tags::BOOL => {
            let byte = *data.get(payload).ok_or(CodecError::truncated(payload, "bool payload"))?;
            let b = match byte {
                0x00 => false,
                0x01 => true,
                _ => return Err(CodecError::InvalidBool { offset: payload, byte }),
            };
            (Value::Bool(b), 1)
        }

        tags::INT => {
            let (i, used) = decode_int(data, payload)?;
            (Value::Int(i), used)
        }

        tags::FLOAT => {
            let (f, used) = decode_float(data, payload, config.nan_policy)?;
            (Value::Float(f), used)
        }

        tags::STRING => {
            let (b, used) = decode_string(data, payload)?;
            (Value::String(b), used)
        }

        tags::TUPLE => {
            let (elements, used) = decode_tuple_at_depth(data, payload, config, depth + 1)?;
            (Value::Tuple(elements), used)
        }

        _ => return Err(CodecError::UnrecognizedTag { tag, offset }),
    };

    Ok((value, 1 + consumed))
}
