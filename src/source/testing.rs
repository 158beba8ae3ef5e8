//! Deterministic byte sources for tests.

use super::ByteSource;
use crate::error::{Error, Result};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::collections::VecDeque;

/// Seeded ChaCha20 stream. Statistically well-behaved and fully
/// reproducible, which makes distribution tests hermetic.
pub(crate) struct SeededSource(ChaCha20Rng);

impl SeededSource {
    pub(crate) fn new(seed: u64) -> Self {
        Self(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl ByteSource for SeededSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

/// Source that yields the same byte forever.
pub(crate) struct ConstSource(pub(crate) u8);

impl ByteSource for ConstSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Source that replays a fixed byte script, then fails.
pub(crate) struct ScriptedSource(VecDeque<u8>);

impl ScriptedSource {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().collect())
    }
}

impl ByteSource for ScriptedSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self
                .0
                .pop_front()
                .ok_or_else(|| Error::Source("byte script exhausted".into()))?;
        }
        Ok(())
    }
}
