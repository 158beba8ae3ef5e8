//! Uniform draws over a byte source.

use crate::error::{Error, Result};
use crate::source::ByteSource;

/// Uniform sampler wrapping a byte source.
///
/// All draws are exact: bounded values come from rejection sampling
/// over the smallest sufficient bit width, so the distribution is
/// uniform regardless of the bound.
#[derive(Debug)]
pub struct UniformSampler<S> {
    source: S,
}

impl<S: ByteSource> UniformSampler<S> {
    /// Creates a sampler over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a uniform integer in `[0, bound)`.
    ///
    /// Draws `bit_length(bound)` bits and retries until the candidate
    /// falls below the bound. A bound of one is answered without
    /// consuming any randomness.
    pub fn below(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 {
            return Err(Error::invalid("bound must be positive"));
        }
        if bound == 1 {
            return Ok(0);
        }
        let bits = 64 - bound.leading_zeros();
        loop {
            let candidate = self.source.bits(bits)?;
            if candidate < bound {
                return Ok(candidate);
            }
        }
    }

    /// Returns a uniform integer in `[lower, upper]`, bounds included.
    pub fn between(&mut self, lower: u64, upper: u64) -> Result<u64> {
        if upper < lower {
            return Err(Error::invalid(format!(
                "range {}..={} is inverted",
                lower, upper
            )));
        }
        match (upper - lower).checked_add(1) {
            Some(span) => Ok(lower + self.below(span)?),
            // span covers the whole u64 domain
            None => self.source.bits(64),
        }
    }

    /// Returns a uniformly chosen element of `items`.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptyInput("collection"));
        }
        let index = self.below(items.len() as u64)? as usize;
        Ok(&items[index])
    }

    /// Returns a fair boolean from one byte of randomness.
    pub fn boolean(&mut self) -> Result<bool> {
        Ok(self.source.bits(8)? > 127)
    }

    /// Returns `digits` random lowercase hexadecimal digits.
    ///
    /// Draws whole bytes and truncates the encoding when an odd number
    /// of digits is requested.
    pub fn hex(&mut self, digits: usize) -> Result<String> {
        if digits == 0 {
            return Err(Error::invalid("digit count must be positive"));
        }
        let bytes = self.source.bytes((digits + 1) / 2)?;
        let mut encoded: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        encoded.truncate(digits);
        Ok(encoded)
    }
}
