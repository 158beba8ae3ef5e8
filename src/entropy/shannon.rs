//! Shannon entropy of samples and integer ranges.

use std::collections::HashMap;
use std::hash::Hash;

/// Bits of entropy carried by the sample itself.
///
/// Computes `-sum(p * log2(p))` over the empirical symbol
/// frequencies, so repeated symbols reduce the result. A sample of
/// length one or less, or with a single distinct symbol, carries
/// zero bits.
pub fn sample_bits<T: Hash + Eq>(symbols: &[T]) -> f64 {
    let n = symbols.len();
    if n <= 1 {
        return 0.0;
    }

    let mut counts: HashMap<&T, usize> = HashMap::new();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    if counts.len() <= 1 {
        return 0.0;
    }

    let n = n as f64;
    counts
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Approximate bits of entropy of a uniform integer in `[min, max]`.
///
/// Uses the digit count approximation `log10(d) * log2(10)` over the
/// range size `d`. A zero-width range carries zero bits.
pub fn range_bits(min: u64, max: u64) -> f64 {
    let d = max.abs_diff(min);
    if d == 0 {
        return 0.0;
    }
    (d as f64).log10() * core::f64::consts::LOG2_10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {} within 0.01 of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_sample_bits_distinct_words() {
        let words = [
            "vivacious",
            "frigidly",
            "condiment",
            "passive",
            "reverse",
            "brunt",
        ];
        // 6 distinct equally frequent symbols: log2(6)
        assert_close(sample_bits(&words), 2.58);
    }

    #[test]
    fn test_sample_bits_two_symbols() {
        assert_close(sample_bits(&[1, 2]), 1.0);
    }

    #[test]
    fn test_sample_bits_degenerate() {
        let empty: [u32; 0] = [];
        assert_eq!(sample_bits(&empty), 0.0);
        assert_eq!(sample_bits(&[7]), 0.0);
        assert_eq!(sample_bits(&['a'; 100]), 0.0);
    }

    #[test]
    fn test_sample_bits_skew_reduces_entropy() {
        let skewed = ['a', 'a', 'a', 'b'];
        let balanced = ['a', 'a', 'b', 'b'];
        assert!(sample_bits(&skewed) < sample_bits(&balanced));
    }

    #[test]
    fn test_sample_bits_full_charset() {
        let charset: Vec<char> = ('!'..='~').collect();
        assert_eq!(charset.len(), 94);
        assert_close(sample_bits(&charset), 6.55);
    }

    #[test]
    fn test_range_bits_known_values() {
        assert_close(range_bits(0, 9), 3.17);
        assert_close(range_bits(9, 0), 3.17);
        assert_close(range_bits(1, 99), 6.61);
        assert_close(range_bits(1, 9_999_999_999), 33.22);
        assert_close(range_bits(100_000, 999_999), 19.78);
    }

    #[test]
    fn test_range_bits_zero_width() {
        assert_eq!(range_bits(1, 1), 0.0);
        assert_eq!(range_bits(0, 0), 0.0);
    }
}
