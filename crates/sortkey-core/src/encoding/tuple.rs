//! Tuple payload encoding.
//!
//! A tuple is the concatenation of its elements' full encodings (tag and
//! payload each), closed by the end marker `0x00`:
//!
//! ```text
//! [element 1][element 2]...[element n][0x00]
//! ```
//!
//! Every element is self-delimiting, so no length table is needed. The end
//! marker is lower than every value tag, so a tuple that is a strict prefix of
//! another sorts first, and a nested tuple ends exactly where its marker is.

use super::sortable::{decode_value_at, encode_value_into, tags};
use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::types::Value;

/// Byte closing a tuple payload.
pub const END_MARKER: u8 = tags::END;

/// Append the payload of a top-level tuple made of `elements`.
///
/// # Errors
///
/// Fails if an element cannot be encoded (NaN under the reject policy) or the
/// nesting exceeds `config.max_depth`.
pub fn encode_tuple(
    elements: &[Value],
    config: &CodecConfig,
    buf: &mut Vec<u8>,
) -> CodecResult<()> {
    encode_tuple_at_depth(elements, config, 1, buf)
}

/// Decode a top-level tuple payload starting at `offset`.
///
/// Returns the elements and the number of bytes consumed, end marker included.
///
/// # Errors
///
/// Fails on a malformed element, a missing end marker, or nesting deeper than
/// `config.max_depth`.
pub fn decode_tuple(
    data: &[u8],
    offset: usize,
    config: &CodecConfig,
) -> CodecResult<(Vec<Value>, usize)> {
    decode_tuple_at_depth(data, offset, config, 1)
}

pub(super) fn encode_tuple_at_depth(
    elements: &[Value],
    config: &CodecConfig,
    depth: usize,
    buf: &mut Vec<u8>,
) -> CodecResult<()> {
    check_depth(depth, config)?;
    for element in elements {
        encode_value_into(element, config, depth, buf)?;
    }
    buf.push(END_MARKER);
    Ok(())
}

pub(super) fn decode_tuple_at_depth(
    data: &[u8],
    offset: usize,
    config: &CodecConfig,
    depth: usize,
) -> CodecResult<(Vec<Value>, usize)> {
    check_depth(depth, config)?;
    let mut elements = Vec::new();
    let mut pos = offset;

    loop {
        match data.get(pos) {
            None => return Err(CodecError::truncated(pos, "tuple end marker")),
            Some(&END_MARKER) => return Ok((elements, pos + 1 - offset)),
            Some(_) => {
                let (element, consumed) = decode_value_at(data, pos, config, depth)?;
                elements.push(element);
                pos += consumed;
            }
        }
    }
}

pub(super) fn check_depth(depth: usize, config: &CodecConfig) -> CodecResult<()> {
    if depth > config.max_depth {
        return Err(CodecError::DepthLimitExceeded { limit: config.max_depth });
    }
    Ok(())
}
