//! Word lists: the built-in list and imported files.

mod builtin;
mod import;

pub use builtin::{builtin_words, BUILTIN_WORDLIST_SIZE};
pub use import::{load_words, parse_diceware, parse_words};

use crate::entropy;
use crate::error::{Error, Result};

/// Validated ordered word list with its per-word entropy.
///
/// The entropy is the Shannon entropy of the list entries, so a list
/// with duplicates yields less than `log2(len)` bits per draw.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    bits_per_word: f64,
}

impl WordList {
    /// Builds a word list from imported entries.
    ///
    /// The list must be non-empty and free of empty entries. Order
    /// and duplicates are preserved.
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::invalid("word list must not be empty"));
        }
        if words.iter().any(|w| w.is_empty()) {
            return Err(Error::invalid("word list entries must not be empty"));
        }
        let bits_per_word = entropy::sample_bits(&words);
        Ok(Self {
            words,
            bits_per_word,
        })
    }

    /// Returns the built-in word list.
    pub fn builtin() -> Self {
        let words: Vec<String> = builtin_words().iter().map(|w| (*w).to_string()).collect();
        let bits_per_word = entropy::sample_bits(&words);
        Self {
            words,
            bits_per_word,
        }
    }

    /// The list entries, in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Entropy in bits carried by one uniform draw from this list.
    pub fn bits_per_word(&self) -> f64 {
        self.bits_per_word
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(WordList::new(Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_empty_entry() {
        let words = vec!["brunt".to_string(), String::new()];
        assert!(WordList::new(words).is_err());
    }

    #[test]
    fn test_distinct_entries_give_log2_bits() {
        let words: Vec<String> = (0..64).map(|i| format!("word{}", i)).collect();
        let list = WordList::new(words).unwrap();
        assert!((list.bits_per_word() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicates_lower_bits_per_word() {
        let distinct: Vec<String> = (0..8).map(|i| format!("w{}", i)).collect();
        let mut duplicated = distinct.clone();
        duplicated.extend(std::iter::repeat("w0".to_string()).take(8));
        let a = WordList::new(distinct).unwrap();
        let b = WordList::new(duplicated).unwrap();
        assert!(b.bits_per_word() < a.bits_per_word());
    }

    #[test]
    fn test_builtin_size_and_entropy() {
        let list = WordList::builtin();
        assert_eq!(list.len(), BUILTIN_WORDLIST_SIZE);
        // 7776 distinct words: log2(7776)
        assert!((list.bits_per_word() - 12.925).abs() < 0.001);
    }
}
