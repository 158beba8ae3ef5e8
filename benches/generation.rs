//! Generation benchmarks.
//!
//! A seeded ChaCha source stands in for the OS so the numbers measure
//! sampling and assembly cost, not kernel entropy calls.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use passphrase::{ByteSource, Generator, GeneratorConfig, Result, UniformSampler, WordList};

struct BenchSource(ChaCha20Rng);

impl BenchSource {
    fn new() -> Self {
        Self(ChaCha20Rng::seed_from_u64(7))
    }
}

impl ByteSource for BenchSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

fn bench_below(c: &mut Criterion) {
    let mut sampler = UniformSampler::new(BenchSource::new());
    c.bench_function("below_7776", |b| {
        b.iter(|| black_box(sampler.below(black_box(7776)).unwrap()))
    });
}

fn bench_passphrase(c: &mut Criterion) {
    let config = GeneratorConfig::default();
    let mut generator =
        Generator::with_source(config, Some(WordList::builtin()), BenchSource::new()).unwrap();
    c.bench_function("default_passphrase", |b| {
        b.iter(|| black_box(generator.generate().unwrap()))
    });
}

fn bench_password(c: &mut Criterion) {
    let mut config = GeneratorConfig::default();
    config.password_length = 20;
    let mut generator = Generator::with_source(config, None, BenchSource::new()).unwrap();
    c.bench_function("password_20_chars", |b| {
        b.iter(|| black_box(generator.generate_password().unwrap()))
    });
}

criterion_group!(benches, bench_below, bench_passphrase, bench_password);
criterion_main!(benches);
