//! Raw key comparison.
//!
//! Storage engines order keys by unsigned byte-wise comparison where a strict
//! prefix sorts before any longer key. Everything in this crate is built to
//! make that comparison agree with [`Value`]'s ordering; the helpers here
//! state the contract and check it.

use std::cmp::Ordering;
use std::fmt;

use super::sortable::{decode_sortable_with, encode_sortable_with};
use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::types::Value;

/// Compare two encoded keys: unsigned byte-wise, shorter prefix first.
#[must_use]
pub fn compare_keys(a: &[u8], b: &[u8]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => {}
            non_eq => return non_eq,
        }
    }
    a.len().cmp(&b.len())
}

/// Returns `true` if each key sorts strictly before the next.
#[must_use]
pub fn is_strictly_increasing<K: AsRef<[u8]>>(keys: &[K]) -> bool {
    first_ordering_violation(keys).is_none()
}

/// Index `i` of the first pair where `keys[i]` does not sort strictly before `keys[i + 1]`.
#[must_use]
pub fn first_ordering_violation<K: AsRef<[u8]>>(keys: &[K]) -> Option<usize> {
    keys.windows(2)
        .position(|pair| compare_keys(pair[0].as_ref(), pair[1].as_ref()) != Ordering::Less)
}

/// An encoded sort key.
///
/// Ordering is [`compare_keys`], so a `BTreeMap<SortKey, _>` iterates in
/// value order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SortKey(Vec<u8>);

impl SortKey {
    /// Encode `value` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`encode_sortable`](super::sortable::encode_sortable).
    pub fn encode(value: &Value) -> CodecResult<Self> {
        Self::encode_with(value, &CodecConfig::default())
    }

    /// Encode `value` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// See [`encode_sortable_with`].
    pub fn encode_with(value: &Value, config: &CodecConfig) -> CodecResult<Self> {
        encode_sortable_with(value, config).map(Self)
    }

    /// Wrap already encoded bytes without validating them.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Decode the key back into a value.
    ///
    /// # Errors
    ///
    /// Fails if the bytes are not exactly one well-formed value.
    pub fn decode(&self) -> CodecResult<Value> {
        decode_sortable_with(&self.0, &CodecConfig::default())
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_keys(&self.0, &other.0)
    }
}

impl AsRef<[u8]> for SortKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<SortKey> for Vec<u8> {
    fn from(key: SortKey) -> Self {
        key.0
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SortKey(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
