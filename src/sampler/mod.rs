//! Unbiased sampling primitives.
//!
//! Builds the small set of draws everything else needs (bounded
//! integers, element choice, coin flips, hex digits) on top of a raw
//! [`ByteSource`](crate::source::ByteSource). Bounded draws use
//! rejection sampling, never modulo reduction, so no value in a range
//! is ever more likely than another.

mod uniform;

pub use uniform::UniformSampler;
