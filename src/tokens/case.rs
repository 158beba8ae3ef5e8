//! Case transforms over token sequences.
//!
//! Whole-sequence transforms are plain recursion. Partial transforms
//! redistribute case randomly: pick a token, try to flip one
//! character in it, retry on picks that change nothing, stop once the
//! requested number of characters has flipped.

use crate::error::Result;
use crate::sampler::UniformSampler;
use crate::source::ByteSource;
use crate::tokens::Token;

#[derive(Debug, Clone, Copy)]
enum Case {
    Upper,
    Lower,
}

impl Case {
    /// Single-character case flip, `None` when the character is
    /// already in the target case or has no one-to-one mapping.
    fn flip(self, c: char) -> Option<char> {
        fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
            match (mapped.next(), mapped.next()) {
                (Some(flipped), None) => Some(flipped),
                _ => None,
            }
        }

        match self {
            Case::Upper if c.is_lowercase() => single(c.to_uppercase()),
            Case::Lower if c.is_uppercase() => single(c.to_lowercase()),
            _ => None,
        }
    }

    fn apply_all(self, token: &mut Token) {
        match token {
            Token::Word(w) => {
                *w = match self {
                    Case::Upper => w.to_uppercase(),
                    Case::Lower => w.to_lowercase(),
                };
            }
            Token::Number(_) => {}
            Token::Symbol(c) => {
                if let Some(flipped) = self.flip(*c) {
                    *c = flipped;
                }
            }
            Token::Group(children) => {
                for child in children {
                    self.apply_all(child);
                }
            }
        }
    }

    /// Characters a partial transform could still flip.
    fn flippable(self, token: &Token) -> usize {
        match token {
            Token::Word(w) => w.chars().filter(|&c| self.flip(c).is_some()).count(),
            Token::Number(_) => 0,
            Token::Symbol(c) => usize::from(self.flip(*c).is_some()),
            Token::Group(children) => children.iter().map(|t| self.flippable(t)).sum(),
        }
    }

    /// Attempts one flip at a random position inside `token`.
    ///
    /// Returns whether a character changed. A pick that lands on a
    /// token with nothing left to flip changes nothing; the caller
    /// retries with a fresh token pick.
    fn try_flip<S: ByteSource>(
        self,
        token: &mut Token,
        sampler: &mut UniformSampler<S>,
    ) -> Result<bool> {
        match token {
            Token::Word(w) => {
                let mut chars: Vec<char> = w.chars().collect();
                if !chars.iter().any(|&c| self.flip(c).is_some()) {
                    return Ok(false);
                }
                // a flippable character exists, so this pick loop ends
                loop {
                    let i = sampler.below(chars.len() as u64)? as usize;
                    if let Some(flipped) = self.flip(chars[i]) {
                        chars[i] = flipped;
                        *w = chars.into_iter().collect();
                        return Ok(true);
                    }
                }
            }
            Token::Number(_) => Ok(false),
            Token::Symbol(c) => match self.flip(*c) {
                Some(flipped) => {
                    *c = flipped;
                    Ok(true)
                }
                None => Ok(false),
            },
            Token::Group(children) => {
                if children.is_empty() {
                    return Ok(false);
                }
                let i = sampler.below(children.len() as u64)? as usize;
                self.try_flip(&mut children[i], sampler)
            }
        }
    }
}

/// Uppercases every character in every token.
pub fn make_all_uppercase(tokens: &mut [Token]) {
    for token in tokens {
        Case::Upper.apply_all(token);
    }
}

/// Lowercases every character in every token.
pub fn make_all_lowercase(tokens: &mut [Token]) {
    for token in tokens {
        Case::Lower.apply_all(token);
    }
}

fn make_chars<S: ByteSource>(
    tokens: &mut [Token],
    count: usize,
    sampler: &mut UniformSampler<S>,
    case: Case,
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let flippable: usize = tokens.iter().map(|t| case.flippable(t)).sum();
    if flippable == 0 {
        return Ok(());
    }
    if count >= flippable {
        for token in tokens {
            case.apply_all(token);
        }
        return Ok(());
    }

    let mut flipped = 0;
    while flipped < count {
        let i = sampler.below(tokens.len() as u64)? as usize;
        if case.try_flip(&mut tokens[i], sampler)? {
            flipped += 1;
        }
    }
    Ok(())
}

/// Flips exactly `count` randomly chosen characters to uppercase.
///
/// Requesting zero, or more flips than lowercase characters exist,
/// degenerates to a no-op or to [`make_all_uppercase`] respectively.
pub fn make_chars_uppercase<S: ByteSource>(
    tokens: &mut [Token],
    count: usize,
    sampler: &mut UniformSampler<S>,
) -> Result<()> {
    make_chars(tokens, count, sampler, Case::Upper)
}

/// Flips exactly `count` randomly chosen characters to lowercase.
pub fn make_chars_lowercase<S: ByteSource>(
    tokens: &mut [Token],
    count: usize,
    sampler: &mut UniformSampler<S>,
) -> Result<()> {
    make_chars(tokens, count, sampler, Case::Lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::{ScriptedSource, SeededSource};
    use crate::tokens::{lowercase_count, uppercase_count};
    use proptest::prelude::*;

    fn words(entries: &[&str]) -> Vec<Token> {
        entries.iter().map(|w| Token::Word((*w).into())).collect()
    }

    fn sampler(seed: u64) -> UniformSampler<SeededSource> {
        UniformSampler::new(SeededSource::new(seed))
    }

    #[test]
    fn test_make_all_uppercase() {
        let mut tokens = vec![
            Token::Word("brunt".into()),
            Token::Number(123_456),
            Token::Symbol('x'),
            Token::Group(vec![Token::Word("passive".into())]),
        ];
        make_all_uppercase(&mut tokens);
        assert_eq!(tokens[0], Token::Word("BRUNT".into()));
        assert_eq!(tokens[1], Token::Number(123_456));
        assert_eq!(tokens[2], Token::Symbol('X'));
        assert_eq!(tokens[3], Token::Group(vec![Token::Word("PASSIVE".into())]));
    }

    #[test]
    fn test_make_all_lowercase() {
        let mut tokens = vec![Token::Word("BRunt".into()), Token::Symbol('X')];
        make_all_lowercase(&mut tokens);
        assert_eq!(tokens[0], Token::Word("brunt".into()));
        assert_eq!(tokens[1], Token::Symbol('x'));
    }

    #[test]
    fn test_zero_count_is_identity() {
        let mut tokens = words(&["reverse", "condiment"]);
        let before = tokens.clone();
        let mut s = UniformSampler::new(ScriptedSource::new(&[]));
        make_chars_uppercase(&mut tokens, 0, &mut s).unwrap();
        assert_eq!(tokens, before);
    }

    #[test]
    fn test_no_lowercase_is_identity() {
        let mut tokens = vec![Token::Word("BRUNT".into()), Token::Number(42)];
        let before = tokens.clone();
        let mut s = UniformSampler::new(ScriptedSource::new(&[]));
        make_chars_uppercase(&mut tokens, 3, &mut s).unwrap();
        assert_eq!(tokens, before);
    }

    #[test]
    fn test_saturation_uppercases_everything() {
        let mut tokens = words(&["vivacious", "frigidly"]);
        let mut s = UniformSampler::new(ScriptedSource::new(&[]));
        make_chars_uppercase(&mut tokens, 100, &mut s).unwrap();
        assert_eq!(tokens[0], Token::Word("VIVACIOUS".into()));
        assert_eq!(tokens[1], Token::Word("FRIGIDLY".into()));
    }

    #[test]
    fn test_exact_count_scripted() {
        // Single token, no draw for the pick; one bit selects the
        // second character of "ab".
        let mut tokens = words(&["ab"]);
        let mut s = UniformSampler::new(ScriptedSource::new(&[0x80]));
        make_chars_uppercase(&mut tokens, 1, &mut s).unwrap();
        assert_eq!(tokens[0], Token::Word("aB".into()));
    }

    #[test]
    fn test_char_pick_retries_inside_word() {
        // First char pick hits the already-uppercase 'A' and retries;
        // the second byte lands on 'b'.
        let mut tokens = words(&["Abc"]);
        let mut s = UniformSampler::new(ScriptedSource::new(&[0x00, 0x40]));
        make_chars_uppercase(&mut tokens, 1, &mut s).unwrap();
        assert_eq!(tokens[0], Token::Word("ABc".into()));
    }

    #[test]
    fn test_number_picks_are_skipped() {
        // First pick lands on the number and changes nothing, second
        // pick reaches the word, third byte picks the character.
        let mut tokens = vec![Token::Number(42), Token::Word("ab".into())];
        let mut s = UniformSampler::new(ScriptedSource::new(&[0x00, 0x80, 0x80]));
        make_chars_uppercase(&mut tokens, 1, &mut s).unwrap();
        assert_eq!(tokens[0], Token::Number(42));
        assert_eq!(tokens[1], Token::Word("aB".into()));
    }

    #[test]
    fn test_group_flip_recurses() {
        let mut tokens = vec![Token::Group(vec![
            Token::Word("xy".into()),
            Token::Word("zw".into()),
        ])];
        // child pick 0, then char pick 1 inside "xy"
        let mut s = UniformSampler::new(ScriptedSource::new(&[0x00, 0x80]));
        make_chars_uppercase(&mut tokens, 1, &mut s).unwrap();
        assert_eq!(
            tokens[0],
            Token::Group(vec![Token::Word("xY".into()), Token::Word("zw".into())])
        );
    }

    #[test]
    fn test_exact_count_many_random_flips() {
        let mut tokens = words(&["correct", "horse", "battery", "staple"]);
        let total = lowercase_count(&tokens);
        let mut s = sampler(31);
        make_chars_uppercase(&mut tokens, 7, &mut s).unwrap();
        assert_eq!(uppercase_count(&tokens), 7);
        assert_eq!(lowercase_count(&tokens), total - 7);
    }

    #[test]
    fn test_lowercase_mirror() {
        let mut tokens = words(&["CORRECT", "HORSE"]);
        let mut s = sampler(5);
        make_chars_lowercase(&mut tokens, 4, &mut s).unwrap();
        assert_eq!(lowercase_count(&tokens), 4);
        assert_eq!(uppercase_count(&tokens), 12 - 4);
    }

    #[test]
    fn test_empty_tokens_no_op() {
        let mut tokens: Vec<Token> = Vec::new();
        let mut s = UniformSampler::new(ScriptedSource::new(&[]));
        make_chars_uppercase(&mut tokens, 5, &mut s).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_count_equal_to_available_saturates() {
        let mut tokens = words(&["abc"]);
        let mut s = UniformSampler::new(ScriptedSource::new(&[]));
        make_chars_uppercase(&mut tokens, 3, &mut s).unwrap();
        assert_eq!(tokens[0], Token::Word("ABC".into()));
    }

    proptest! {
        #[test]
        fn prop_case_count_conservation(
            seed in any::<u64>(),
            raw in prop::collection::vec(
                prop::collection::vec(prop::char::range('a', 'z'), 1..8),
                1..6,
            ),
            count in 0usize..40,
        ) {
            let mut tokens: Vec<Token> = raw
                .iter()
                .map(|chars| Token::Word(chars.iter().collect()))
                .collect();
            let total = lowercase_count(&tokens);
            let mut s = sampler(seed);
            make_chars_uppercase(&mut tokens, count, &mut s).unwrap();
            prop_assert_eq!(uppercase_count(&tokens), count.min(total));
            prop_assert_eq!(lowercase_count(&tokens), total - count.min(total));
        }
    }
}
