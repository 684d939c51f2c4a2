//! Codec configuration.
//!
//! The configuration never changes the byte layout of ordinary values. It only
//! decides what happens to NaN floats and how deep tuples may nest.

use serde::{Deserialize, Serialize};

/// Default maximum tuple nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How NaN floats are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// Refuse to encode NaN and refuse to decode any NaN bit pattern.
    #[default]
    Reject,
    /// Encode every NaN as the canonical quiet NaN, sorting after `+inf`.
    Canonicalize,
}

/// Configuration for encoding and decoding sort keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// NaN handling (default: reject)
    pub nan_policy: NanPolicy,

    /// Maximum tuple nesting depth, counting the outermost tuple as 1 (default: 64)
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { nan_policy: NanPolicy::Reject, max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl CodecConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the NaN policy.
    #[must_use]
    pub const fn with_nan_policy(mut self, policy: NanPolicy) -> Self {
        self.nan_policy = policy;
        self
    }

    /// Sets the maximum tuple nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
