//! Raw randomness access.
//!
//! This module provides a trait-based abstraction over the operating
//! system's randomness source, allowing deterministic implementations
//! to be substituted in tests. Everything above this layer is pure
//! computation over the bytes produced here.

mod os;
mod sys;
#[cfg(test)]
pub(crate) mod testing;

pub use os::{ByteSource, OsByteSource};
pub use sys::available_entropy;
