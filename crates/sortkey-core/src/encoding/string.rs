//! Byte-string payload encoding.
//!
//! Strings use null-terminated encoding with escape sequences:
//! - `0x00` in the data is escaped to `0x00 0xFF`
//! - The sequence ends with `0x00 0x00`
//!
//! Any non-zero byte is copied as is. Where two strings first differ, the
//! escaped forms differ at the same position in the same direction, and the
//! terminator sorts below every continuation, so `"a" < "a\0" < "a\x01" < "b"`.

use crate::error::{CodecError, CodecResult};

/// Escape byte: a `0x00` followed by this byte is a literal `0x00`.
pub const ESCAPE_BYTE: u8 = 0xFF;
/// Terminator: a `0x00` followed by this byte ends the string.
pub const TERMINATOR: u8 = 0x00;

/// Append the escaped, terminated form of `data`.
pub fn encode_string(data: &[u8], buf: &mut Vec<u8>) {
    encode_string_unterminated(data, buf);
    buf.push(0x00);
    buf.push(TERMINATOR);
}

/// Append the escaped form of `data` without the terminator.
///
/// Every string that starts with `data` encodes to bytes starting with this output.
pub fn encode_string_unterminated(data: &[u8], buf: &mut Vec<u8>) {
    buf.reserve(data.len() + 2);
    for &byte in data {
        if byte == 0x00 {
            buf.push(0x00);
            buf.push(ESCAPE_BYTE);
        } else {
            buf.push(byte);
        }
    }
}

/// Exact length of the escaped, terminated form of `data`.
#[must_use]
pub fn encoded_string_len(data: &[u8]) -> usize {
    data.len() + data.iter().filter(|&&b| b == 0x00).count() + 2
}

/// Decode an escaped string starting at `offset`.
///
/// Returns the unescaped bytes and the number of input bytes consumed,
/// terminator included.
///
/// # Errors
///
/// Returns [`CodecError::TruncatedInput`] if the buffer ends before the
/// terminator and [`CodecError::InvalidEscape`] for a `0x00` followed by a
/// byte other than `0x00` or `0xFF`.
pub fn decode_string(data: &[u8], offset: usize) -> CodecResult<(Vec<u8>, usize)> {
    let input = data.get(offset..).ok_or(CodecError::truncated(offset, "string payload"))?;
    let mut result = Vec::new();
    let mut i = 0;

    while let Some(zero) = input[i..].iter().position(|&b| b == 0x00) {
        result.extend_from_slice(&input[i..i + zero]);
        i += zero;
        match input.get(i + 1) {
            Some(&TERMINATOR) => return Ok((result, i + 2)),
            Some(&ESCAPE_BYTE) => {
                result.push(0x00);
                i += 2;
            }
            Some(&byte) => return Err(CodecError::InvalidEscape { offset: offset + i, byte }),
            None => break,
        }
    }

    Err(CodecError::truncated(offset + input.len(), "string terminator"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn encoded(data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_string(data, &mut buf);
        buf
    }

    #[test]
    fn layout() {
        assert_eq!(encoded(b""), [0x00, 0x00]);
        assert_eq!(encoded(b"ab"), [b'a', b'b', 0x00, 0x00]);
        assert_eq!(encoded(&[0x00, 0x00]), [0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn roundtrip_arbitrary_bytes() {
        let inputs: [&[u8]; 5] = [
            b"",
            b"ala ma kota i psa",
            &[28, 192, 0, 123, 11, 99, 243, 172, 111, 3, 4, 5],
            &[0x00, 0x00, 0x00],
            &[0xFF, 0x00, 0xFF],
        ];
        for input in inputs {
            let buf = encoded(input);
            let (decoded, used) = decode_string(&buf, 0).unwrap();
            assert_eq!(decoded, input);
            assert_eq!(used, buf.len());
            assert_eq!(encoded_string_len(input), buf.len());
        }
    }

    #[test]
    fn prefix_and_trailing_byte_order() {
        let ordered: [&[u8]; 8] =
            [b"", &[0x00], &[0x00, 0x00], &[0x01], b"a", &[b'a', 0x00], b"ab", &[0xFF]];
        for pair in ordered.windows(2) {
            assert!(
                encoded(pair[0]) < encoded(pair[1]),
                "{:?} should sort before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn decode_reports_consumed_with_trailing_data() {
        let mut buf = encoded(b"ala");
        buf.extend_from_slice(b"rest");
        let (decoded, used) = decode_string(&buf, 0).unwrap();
        assert_eq!(decoded, b"ala");
        assert_eq!(&buf[used..], b"rest");
    }

    #[test]
    fn missing_terminator() {
        assert!(decode_string(b"hello", 0).unwrap_err().is_truncation());
        // Dangling 0x00 at the very end
        assert!(decode_string(b"hello\x00", 0).unwrap_err().is_truncation());
        assert!(decode_string(b"", 0).unwrap_err().is_truncation());
        assert!(decode_string(b"x", 5).unwrap_err().is_truncation());
    }

    #[test]
    fn invalid_escape() {
        let err = decode_string(&[b'x', b'a', 0x00, 0x07, 0x00, 0x00], 1).unwrap_err();
        assert_eq!(err, CodecError::InvalidEscape { offset: 2, byte: 0x07 });
    }
}
