//! Encoding and decoding traits for sort keys.

use super::sortable::{decode_sortable, encode_sortable, encode_sortable_into};
use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::types::Value;

/// A trait for types that can be encoded to an order-preserving key.
pub trait Encoder: Sized {
    /// Encode this value to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no place in the key order (e.g. NaN).
    fn encode(&self) -> CodecResult<Vec<u8>>;

    /// Encode this value into a pre-allocated buffer.
    ///
    /// This method appends the encoded bytes to the provided buffer,
    /// which is cheaper when building composite keys.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    fn encode_to(&self, buf: &mut Vec<u8>) -> CodecResult<()>;
}

/// A trait for types that can be decoded from an order-preserving key.
pub trait Decoder: Sized {
    /// Decode a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails (e.g., unknown tag, truncated input).
    fn decode(bytes: &[u8]) -> CodecResult<Self>;
}

impl Encoder for Value {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        encode_sortable(self)
    }

    fn encode_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_sortable_into(self, &CodecConfig::default(), buf)
    }
}

impl Decoder for Value {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        decode_sortable(bytes)
    }
}
