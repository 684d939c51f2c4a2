//! Float payload encoding.
//!
//! Floats use the IEEE 754 bit representation with transformations:
//! - Non-negative floats: set the sign bit (XOR with `0x8000_0000_0000_0000`)
//! - Negative floats: flip all bits
//!
//! Flipping only the sign bit of a negative number is not enough: larger
//! magnitudes have larger bit patterns, so negatives would sort backwards.
//! Inverting the whole word reverses them into the right order.
//!
//! The resulting order is the IEEE total order: `-inf`, negatives, `-0.0`,
//! `+0.0`, positives, `+inf`. NaN is governed by [`NanPolicy`].

use tracing::debug;

use super::int::{read_word, SIGN_BIT};
use crate::config::NanPolicy;
use crate::error::{CodecError, CodecResult};

/// Width of an encoded float payload.
pub const FLOAT_WIDTH: usize = 8;

/// Bit pattern of the canonical quiet NaN.
pub const CANONICAL_NAN_BITS: u64 = 0x7FF8_0000_0000_0000;

/// Encoded word of the canonical NaN. Sorts after `+inf`.
const CANONICAL_NAN_WORD: u64 = CANONICAL_NAN_BITS | SIGN_BIT;

/// Map IEEE bits to an unsigned word with the same total order.
#[inline]
#[must_use]
pub const fn float_bits_to_ordered(bits: u64) -> u64 {
    if bits & SIGN_BIT == 0 {
        bits | SIGN_BIT
    } else {
        !bits
    }
}

/// Inverse of [`float_bits_to_ordered`].
#[inline]
#[must_use]
pub const fn ordered_to_float_bits(word: u64) -> u64 {
    if word & SIGN_BIT == 0 {
        !word
    } else {
        word ^ SIGN_BIT
    }
}

/// Append the 8-byte payload for `value`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidFloatBits`] for NaN under [`NanPolicy::Reject`].
pub fn encode_float(value: f64, policy: NanPolicy, buf: &mut Vec<u8>) -> CodecResult<()> {
    let word = if value.is_nan() {
        match policy {
            NanPolicy::Reject => {
                debug!(bits = value.to_bits(), "rejecting NaN sort key");
                return Err(CodecError::InvalidFloatBits { bits: value.to_bits() });
            }
            NanPolicy::Canonicalize => {
                debug!(bits = value.to_bits(), "canonicalizing NaN sort key");
                CANONICAL_NAN_WORD
            }
        }
    } else {
        float_bits_to_ordered(value.to_bits())
    };
    buf.extend_from_slice(&word.to_be_bytes());
    Ok(())
}

/// Decode a float payload starting at `offset`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedInput`] if fewer than 8 bytes remain, and
/// [`CodecError::InvalidFloatBits`] for a NaN the policy does not accept.
pub fn decode_float(data: &[u8], offset: usize, policy: NanPolicy) -> CodecResult<(f64, usize)> {
    let word = read_word(data, offset, "float payload")?;
    let bits = ordered_to_float_bits(word);
    let value = f64::from_bits(bits);

    if value.is_nan() {
        let accepted = policy == NanPolicy::Canonicalize && word == CANONICAL_NAN_WORD;
        if !accepted {
            return Err(CodecError::InvalidFloatBits { bits });
        }
    }
    Ok((value, FLOAT_WIDTH))
}
