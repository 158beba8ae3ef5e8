//! Importing word lists from files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::wordlist::WordList;

/// Parses a plain word list: whitespace-separated tokens.
///
/// A single-column file gives one word per line; blank lines are
/// skipped.
pub fn parse_words(text: &str) -> Result<WordList> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    WordList::new(words)
}

/// Parses a diceware word list: dice code, then the word.
///
/// Takes the second column of every non-blank line. A line without a
/// second column is rejected.
pub fn parse_diceware(text: &str) -> Result<WordList> {
    let mut words = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_whitespace().nth(1) {
            Some(word) => words.push(word.to_string()),
            None => {
                return Err(Error::invalid(format!(
                    "diceware line {} has no word column",
                    lineno + 1
                )));
            }
        }
    }
    WordList::new(words)
}

/// Reads a word list file, in plain or diceware format.
pub fn load_words(path: &Path, diceware: bool) -> Result<WordList> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Resource(format!("cannot read {}: {}", path.display(), e)))?;
    let list = if diceware {
        parse_diceware(&text)?
    } else {
        parse_words(&text)?
    };

    tracing::debug!(
        words = list.len(),
        bits_per_word = list.bits_per_word(),
        "Imported word list"
    );

    Ok(list)
}
