//! Sort-key codec
//!
//! This crate converts typed runtime values into byte strings whose natural
//! byte-wise ordering is exactly the values' ordering, and converts them back
//! losslessly. The bytes serve as keys in sorted key-value stores, enabling
//! range scans, ordered iteration and grouping without decoding.
//!
//! # Overview
//!
//! - **Values**: [`Value`], a closed set of variants (null, bool, int, float,
//!   byte string, tuple)
//! - **Encoding**: [`encode_sortable`] / [`decode_sortable`] and the
//!   per-variant codecs under [`encoding`]
//! - **Comparison**: [`compare_keys`] and [`SortKey`], the ordering contract
//! - **Configuration**: [`CodecConfig`] for NaN handling and nesting limits
//!
//! # Example
//!
//! ```
//! use sortkey_core::{decode_sortable, encode_sortable, Value};
//!
//! let a = Value::tuple([Value::from("ala"), Value::Int(17)]);
//! let b = Value::tuple([Value::from("ala"), Value::Int(17), Value::Int(99)]);
//!
//! let ka = encode_sortable(&a).unwrap();
//! let kb = encode_sortable(&b).unwrap();
//!
//! // A tuple sorts before its extensions
//! assert!(ka < kb);
//! assert_eq!(decode_sortable(&kb).unwrap(), b);
//! ```
//!
//! # Modules
//!
//! - [`types`] - The [`Value`] model
//! - [`encoding`] - Sort-key encoding, comparison and key ranges
//! - [`config`] - Codec configuration ([`CodecConfig`], [`NanPolicy`])
//! - [`error`] - Error types ([`CodecError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{CodecConfig, NanPolicy};
pub use encoding::{
    compare_keys, decode_sortable, decode_sortable_with, decode_sortable_with_len,
    encode_sortable, encode_sortable_with, is_strictly_increasing, Decoder, Encoder, SortKey,
};
pub use error::{CodecError, CodecResult};
pub use types::Value;
