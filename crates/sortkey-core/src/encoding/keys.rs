//! Prefix keys and range bounds for scans over encoded values.
//!
//! Range scans in a sorted key-value store take a half-open `[start, end)`
//! byte range. The helpers here build such ranges directly from values:
//!
//! - Tuple prefix scans: all tuples whose leading elements equal a prefix,
//!   e.g. every `("users", 42, ..)` row.
//! - String prefix scans: all strings starting with given bytes, the shape of
//!   a `LIKE 'prefix%'` predicate.
//!
//! A tuple encoding is `[TUPLE][e1]..[en][END]`. Dropping the end marker gives
//! bytes that every longer tuple with the same leading elements starts with,
//! and no other tuple does, because each element is self-delimiting.

use super::sortable::{encode_value_into, tags};
use super::string::encode_string_unterminated;
use super::tuple::check_depth;
use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::types::Value;

/// A half-open key range. `end == None` means unbounded above.
pub type KeyRange = (Vec<u8>, Option<Vec<u8>>);

/// Create an exclusive upper bound key by incrementing a prefix.
///
/// The returned key is the smallest key greater than all keys with the given
/// prefix. Returns `None` when the prefix is empty or all `0xFF`, in which case
/// no finite upper bound exists.
#[must_use]
pub fn increment_prefix(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < 0xFF {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}

/// Encode the bytes shared by every tuple that starts with `elements`.
///
/// The tuple equal to `elements` itself also starts with these bytes.
///
/// # Errors
///
/// Fails if an element cannot be encoded under `config`, or if the prefix
/// tuple itself would exceed `config.max_depth`.
pub fn encode_tuple_prefix(elements: &[Value], config: &CodecConfig) -> CodecResult<Vec<u8>> {
    check_depth(1, config)?;
    let mut buf = vec![tags::TUPLE];
    for element in elements {
        encode_value_into(element, config, 1, &mut buf)?;
    }
    Ok(buf)
}

/// Encode the bytes shared by every string value that starts with `prefix`.
#[must_use]
pub fn encode_string_prefix(prefix: &[u8]) -> Vec<u8> {
    let mut buf = vec![tags::STRING];
    encode_string_unterminated(prefix, &mut buf);
    buf
}

/// Range covering every tuple whose leading elements equal `elements`.
///
/// # Errors
///
/// Fails if an element cannot be encoded under `config`.
pub fn tuple_prefix_range(elements: &[Value], config: &CodecConfig) -> CodecResult<KeyRange> {
    let start = encode_tuple_prefix(elements, config)?;
    let end = increment_prefix(&start);
    Ok((start, end))
}

/// Range covering every string value that starts with `prefix`.
#[must_use]
pub fn string_prefix_range(prefix: &[u8]) -> KeyRange {
    let start = encode_string_prefix(prefix);
    let end = increment_prefix(&start);
    (start, end)
}

/// Returns `true` if `key` falls inside `range`.
#[must_use]
pub fn range_contains(range: &KeyRange, key: &[u8]) -> bool {
    let (start, end) = range;
    key >= start.as_slice() && end.as_ref().map_or(true, |end| key < end.as_slice())
}
