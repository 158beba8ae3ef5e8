//! Byte source abstraction over OS randomness.
//!
//! All randomness in this crate flows through [`ByteSource`]. The
//! production implementation reads the operating system CSPRNG via
//! `rand_core::OsRng`; tests substitute seeded or scripted sources.

use crate::error::{Error, Result};
use rand_core::RngCore;

/// Trait for sources of cryptographically secure random bytes.
///
/// Implementors only provide [`try_fill`](ByteSource::try_fill); the
/// derived `bytes` and `bits` accessors are shared by all sources.
pub trait ByteSource {
    /// Fills `dest` entirely with random bytes.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Returns `n` random bytes.
    ///
    /// Requesting zero bytes is rejected rather than answered with an
    /// empty buffer, so accidental zero-length draws surface early.
    fn bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Err(Error::invalid("byte count must be positive"));
        }
        let mut buf = vec![0u8; n];
        self.try_fill(&mut buf)?;
        Ok(buf)
    }

    /// Returns a uniform integer with exactly `bits` random bits,
    /// for `bits` in `1..=64`.
    ///
    /// Whole bytes are drawn and interpreted big-endian; the excess
    /// low-order bits of the final partial byte are shifted away, so
    /// the leading bits of the stream are the ones kept.
    fn bits(&mut self, bits: u32) -> Result<u64> {
        if bits == 0 || bits > 64 {
            return Err(Error::invalid(format!(
                "bit count must be in 1..=64, got {}",
                bits
            )));
        }
        let nbytes = ((bits + 7) / 8) as usize;
        let mut buf = [0u8; 8];
        self.try_fill(&mut buf[..nbytes])?;

        let mut value = 0u64;
        for &b in &buf[..nbytes] {
            value = (value << 8) | u64::from(b);
        }
        Ok(value >> (nbytes as u32 * 8 - bits))
    }
}

/// Byte source backed by the operating system CSPRNG.
///
/// Every call reads fresh bytes from the OS; no state is kept in the
/// process, so there is nothing to seed or zeroize.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsByteSource;

impl OsByteSource {
    /// Creates a new OS-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for OsByteSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        rand_core::OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::Source(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::ConstSource;

    #[test]
    fn test_bytes_length() {
        let mut source = OsByteSource::new();
        let buf = source.bytes(16).unwrap();
        assert_eq!(buf.len(), 16);
    }

    #[test]
    fn test_zero_bytes_rejected() {
        let mut source = OsByteSource::new();
        assert!(matches!(source.bytes(0), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_bits_bounds() {
        let mut source = OsByteSource::new();
        assert!(matches!(source.bits(0), Err(Error::InvalidValue(_))));
        assert!(matches!(source.bits(65), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_bits_within_range() {
        let mut source = OsByteSource::new();
        for bits in [1, 7, 8, 9, 31, 33] {
            let value = source.bits(bits).unwrap();
            assert!(value < 1u64 << bits);
        }
        // 64 bits cannot overflow the shift above; any value is valid
        source.bits(64).unwrap();
    }

    #[test]
    fn test_bits_keeps_high_bits() {
        // A source of all ones must produce the maximum for every width,
        // which holds only if the excess bits are dropped from the low end.
        let mut ones = ConstSource(0xFF);
        for bits in 1..=63 {
            assert_eq!(ones.bits(bits).unwrap(), (1u64 << bits) - 1);
        }
        assert_eq!(ones.bits(64).unwrap(), u64::MAX);
    }

    #[test]
    fn test_single_bit_is_leading_bit() {
        // 0x80 has only its leading bit set, 0x7F only trailing bits
        assert_eq!(ConstSource(0x80).bits(1).unwrap(), 1);
        assert_eq!(ConstSource(0x7F).bits(1).unwrap(), 0);
    }

    #[test]
    fn test_os_draws_differ() {
        let mut source = OsByteSource::new();
        let a = source.bytes(32).unwrap();
        let b = source.bytes(32).unwrap();
        assert_ne!(a, b);
    }
}
