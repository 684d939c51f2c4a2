//! Integer payload encoding.
//!
//! Integers use a "sign-flip" encoding:
//! - XOR with `0x8000_0000_0000_0000` flips the sign bit
//! - This moves negative numbers into the lower half of the unsigned range
//! - Result is stored in big-endian format
//!
//! `i64::MIN` becomes eight `0x00` bytes and `i64::MAX` eight `0xFF` bytes.

use crate::error::{CodecError, CodecResult};

/// Width of an encoded integer payload.
pub const INT_WIDTH: usize = 8;

/// Constant for flipping the sign bit of signed integers.
pub(crate) const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Map an integer to an unsigned word with the same ordering.
#[inline]
#[must_use]
pub const fn int_to_ordered(value: i64) -> u64 {
    (value as u64) ^ SIGN_BIT
}

/// Inverse of [`int_to_ordered`].
#[inline]
#[must_use]
pub const fn ordered_to_int(word: u64) -> i64 {
    (word ^ SIGN_BIT) as i64
}

/// Append the 8-byte payload for `value`.
#[inline]
pub fn encode_int(value: i64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&int_to_ordered(value).to_be_bytes());
}

/// Decode an integer payload starting at `offset`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedInput`] if fewer than 8 bytes remain.
#[inline]
pub fn decode_int(data: &[u8], offset: usize) -> CodecResult<(i64, usize)> {
    let word = read_word(data, offset, "integer payload")?;
    Ok((ordered_to_int(word), INT_WIDTH))
}

/// Read a big-endian `u64` at `offset`.
pub(crate) fn read_word(data: &[u8], offset: usize, context: &'static str) -> CodecResult<u64> {
    let bytes: [u8; INT_WIDTH] = data
        .get(offset..offset.saturating_add(INT_WIDTH))
        .and_then(|slice| slice.try_into().ok())
        .ok_or(CodecError::truncated(offset, context))?;
    Ok(u64::from_be_bytes(bytes))
}
