//! Error types for the sort-key codec.

use thiserror::Error;

/// Result alias used throughout the codec.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding sort keys.
///
/// Offsets are absolute positions in the buffer handed to the top-level
/// decode call, so nested tuple failures point at the offending byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The leading tag byte does not match a known variant.
    #[error("unrecognized type tag {tag:#04x} at offset {offset}")]
    UnrecognizedTag {
        /// The tag byte that was read.
        tag: u8,
        /// Byte offset of the tag.
        offset: usize,
    },

    /// The buffer ended before a value was complete.
    #[error("truncated input at offset {offset}: {context}")]
    TruncatedInput {
        /// Byte offset where more data was expected.
        offset: usize,
        /// What was being read when the input ran out.
        context: &'static str,
    },

    /// A float bit pattern has no place in the total order (NaN).
    #[error("float bits {bits:#018x} have no defined sort order")]
    InvalidFloatBits {
        /// The raw IEEE-754 bit pattern.
        bits: u64,
    },

    /// A `0x00` inside a string was followed by something other than an
    /// escape or terminator byte.
    #[error("invalid escape sequence 0x00 {byte:#04x} at offset {offset}")]
    InvalidEscape {
        /// Byte offset of the `0x00` that opened the sequence.
        offset: usize,
        /// The byte that followed it.
        byte: u8,
    },

    /// A boolean payload was neither `0x00` nor `0x01`.
    #[error("invalid boolean payload {byte:#04x} at offset {offset}")]
    InvalidBool {
        /// Byte offset of the payload.
        offset: usize,
        /// The payload byte.
        byte: u8,
    },

    /// Tuples were nested deeper than the configured limit.
    #[error("tuple nesting exceeds depth limit of {limit}")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// A whole-buffer decode finished before the end of the buffer.
    #[error("trailing bytes after value: consumed {consumed} of {len}")]
    TrailingBytes {
        /// Bytes consumed by the decoded value.
        consumed: usize,
        /// Total buffer length.
        len: usize,
    },
}

impl CodecError {
    /// Creates a truncation error.
    #[must_use]
    pub const fn truncated(offset: usize, context: &'static str) -> Self {
        Self::TruncatedInput { offset, context }
    }

    /// Returns `true` if the error means more input could make the decode succeed.
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offsets() {
        let err = CodecError::UnrecognizedTag { tag: 0xAB, offset: 7 };
        assert_eq!(err.to_string(), "unrecognized type tag 0xab at offset 7");

        let err = CodecError::truncated(3, "integer payload");
        assert_eq!(err.to_string(), "truncated input at offset 3: integer payload");
    }

    #[test]
    fn float_bits_display_is_zero_padded() {
        let err = CodecError::InvalidFloatBits { bits: 0x7FF8_0000_0000_0000 };
        assert_eq!(err.to_string(), "float bits 0x7ff8000000000000 have no defined sort order");
    }

    #[test]
    fn truncation_is_detectable() {
        assert!(CodecError::truncated(0, "tag").is_truncation());
        assert!(!CodecError::DepthLimitExceeded { limit: 4 }.is_truncation());
    }
}
