//! Phrase tokens.

use std::fmt;

/// One element of a generated phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word drawn from a word list, or a coin face.
    Word(String),
    /// A numeric token, rendered in decimal.
    Number(u64),
    /// A single password character.
    Symbol(char),
    /// A nested collection of tokens.
    Group(Vec<Token>),
}

impl Token {
    fn count_chars(&self, pred: fn(char) -> bool) -> usize {
        match self {
            Token::Word(w) => w.chars().filter(|&c| pred(c)).count(),
            Token::Number(_) => 0,
            Token::Symbol(c) => usize::from(pred(*c)),
            Token::Group(children) => children.iter().map(|t| t.count_chars(pred)).sum(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(w) => f.write_str(w),
            Token::Number(n) => write!(f, "{}", n),
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Group(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

/// Uppercase characters across all tokens, groups included.
pub fn uppercase_count(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| t.count_chars(char::is_uppercase)).sum()
}

/// Lowercase characters across all tokens, groups included.
pub fn lowercase_count(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| t.count_chars(char::is_lowercase)).sum()
}

/// Alphabetic characters across all tokens, groups included.
pub fn alpha_count(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| t.count_chars(char::is_alphabetic)).sum()
}
