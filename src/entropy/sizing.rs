//! Sizing calculations: how much material reaches an entropy target.

use crate::entropy::shannon::sample_bits;
use crate::error::{Error, Result};

/// Password length needed to reach `target_bits` over `charset`.
///
/// Rounds up, so the result always meets or exceeds the target.
pub fn password_length_needed(target_bits: f64, charset: &[char]) -> Result<usize> {
    if target_bits < 0.0 {
        return Err(Error::invalid("entropy target must be non-negative"));
    }
    let per_char = sample_bits(charset);
    if per_char <= 0.0 {
        return Err(Error::invalid(
            "charset must contain at least two distinct characters",
        ));
    }
    Ok((target_bits / per_char).ceil() as usize)
}

/// Words needed to reach `target_bits` alongside `numbers` numeric
/// tokens of `bits_per_number` each.
///
/// When the numbers alone already cover the target by a full word's
/// worth, no words are needed.
pub fn words_needed(
    target_bits: f64,
    bits_per_word: f64,
    bits_per_number: f64,
    numbers: usize,
) -> Result<usize> {
    if target_bits < 0.0 {
        return Err(Error::invalid("entropy target must be non-negative"));
    }
    if bits_per_word <= 0.0 {
        return Err(Error::invalid("bits per word must be positive"));
    }
    if bits_per_number < 0.0 {
        return Err(Error::invalid("bits per number must be non-negative"));
    }

    let words = (target_bits - bits_per_number * numbers as f64) / bits_per_word;
    if words > -1.0 {
        Ok(words.abs().ceil() as usize)
    } else {
        Ok(0)
    }
}

/// Entropy of a password of `length` characters drawn from `charset`.
pub fn password_bits(length: usize, charset: &[char]) -> Result<f64> {
    if charset.is_empty() {
        return Err(Error::invalid("charset must not be empty"));
    }
    if length == 0 {
        return Ok(0.0);
    }
    Ok(length as f64 * sample_bits(charset))
}

/// Entropy of a passphrase of `words` words and `numbers` numbers.
pub fn passphrase_bits(
    words: usize,
    bits_per_word: f64,
    bits_per_number: f64,
    numbers: usize,
) -> Result<f64> {
    if bits_per_word < 0.0 || bits_per_number < 0.0 {
        return Err(Error::invalid("per-token entropy must be non-negative"));
    }
    Ok(words as f64 * bits_per_word + numbers as f64 * bits_per_number)
}
