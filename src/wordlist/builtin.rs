//! The embedded word list.
//!
//! A 7776-word list is compiled in via `include_str!` and parsed once
//! on first access. 7776 equally likely words give
//! `log2(7776) = 12.925` bits per draw, the same figure as a
//! five-dice diceware roll.

use std::sync::OnceLock;

/// Number of words in the built-in list.
pub const BUILTIN_WORDLIST_SIZE: usize = 7776;

const BUILTIN_RAW: &str = include_str!("builtin_wordlist.txt");

static BUILTIN_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the built-in word list, parsed lazily and cached for the
/// lifetime of the process.
///
/// # Panics
///
/// Panics if the embedded data does not hold exactly
/// [`BUILTIN_WORDLIST_SIZE`] words.
pub fn builtin_words() -> &'static [&'static str] {
    BUILTIN_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = BUILTIN_RAW.lines().collect();
        assert!(
            words.len() == BUILTIN_WORDLIST_SIZE,
            "built-in word list must contain exactly {} words, got {}",
            BUILTIN_WORDLIST_SIZE,
            words.len()
        );
        words.into_boxed_slice()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_expected_size() {
        assert_eq!(builtin_words().len(), BUILTIN_WORDLIST_SIZE);
    }

    #[test]
    fn test_builtin_entries_lowercase_ascii() {
        for word in builtin_words() {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "unexpected entry: {}",
                word
            );
        }
    }

    #[test]
    fn test_builtin_entries_distinct() {
        let unique: HashSet<&str> = builtin_words().iter().copied().collect();
        assert_eq!(unique.len(), BUILTIN_WORDLIST_SIZE);
    }

    #[test]
    fn test_builtin_sorted() {
        let words = builtin_words();
        assert!(words.windows(2).all(|w| w[0] < w[1]));
    }
}
