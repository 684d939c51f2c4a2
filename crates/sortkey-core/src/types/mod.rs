//! Core data types for the codec.
//!
//! This module defines the value model that the sort-key encoding operates on.

mod value;

pub use value::Value;
