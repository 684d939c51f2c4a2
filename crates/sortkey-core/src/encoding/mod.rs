//! Order-preserving key encoding.
//!
//! This module turns [`Value`](crate::types::Value)s into byte strings whose
//! unsigned lexicographic order is the values' order, and back.
//!
//! # Encoding Traits
//!
//! - [`Encoder`] - Encode values to sort keys
//! - [`Decoder`] - Decode values from sort keys
//!
//! # Layout
//!
//! - [`sortable`] - Tag dispatch and the top-level encode/decode functions
//! - [`int`], [`float`], [`string`], [`tuple`] - Per-variant payload codecs
//! - [`compare`] - The byte comparator the ordering guarantee is stated against
//! - [`keys`] - Prefix keys and range bounds for scans
//!
//! # Example
//!
//! ```
//! use sortkey_core::encoding::{Decoder, Encoder};
//! use sortkey_core::Value;
//!
//! let row = Value::tuple([Value::from("ala"), Value::Int(17), Value::Int(99)]);
//!
//! let bytes = row.encode().unwrap();
//! let decoded = Value::decode(&bytes).unwrap();
//! assert_eq!(decoded, row);
//! ```

pub mod compare;
pub mod float;
pub mod int;
pub mod keys;
pub mod sortable;
pub mod string;
mod traits;
pub mod tuple;

#[cfg(test)]
mod proptest_tests;

pub use compare::{compare_keys, is_strictly_increasing, SortKey};
pub use sortable::{
    decode_sortable, decode_sortable_with, decode_sortable_with_len, encode_sortable,
    encode_sortable_with,
};
pub use traits::{Decoder, Encoder};
