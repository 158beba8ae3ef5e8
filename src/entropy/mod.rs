//! Entropy accounting for generated secrets.
//!
//! Everything here is pure arithmetic over sample frequencies and
//! ranges. Reported figures are a guessing-resistance proxy, not a
//! proof of randomness quality.

mod shannon;
mod sizing;

pub use shannon::{range_bits, sample_bits};
pub use sizing::{passphrase_bits, password_bits, password_length_needed, words_needed};
