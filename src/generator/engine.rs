//! The generation engine.
//!
//! A [`Generator`] holds a validated configuration, an optional word
//! list and a sampler over a byte source. Every generation call draws
//! fresh randomness and returns an immutable [`Phrase`]; nothing about
//! a previous result is retained.

use std::fmt;

use crate::entropy;
use crate::error::{Error, Result};
use crate::generator::config::{CaseStyle, GeneratorConfig};
use crate::sampler::UniformSampler;
use crate::source::{ByteSource, OsByteSource};
use crate::tokens::{
    make_all_lowercase, make_all_uppercase, make_chars_lowercase, make_chars_uppercase, Token,
};
use crate::wordlist::WordList;

/// Nominal entropy of a version-4 UUID: 30 free hex digits.
const UUID4_ENTROPY_BITS: f64 = 120.0;

/// A generated result: tokens, the separator to join them with, and
/// the entropy accounted to the draw.
#[derive(Debug, Clone)]
pub struct Phrase {
    tokens: Vec<Token>,
    separator: String,
    entropy_bits: f64,
}

impl Phrase {
    fn new(tokens: Vec<Token>, separator: impl Into<String>, entropy_bits: f64) -> Self {
        Self {
            tokens,
            separator: separator.into(),
            entropy_bits,
        }
    }

    /// The tokens in draw order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The separator used when rendering.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Entropy in bits accounted to this result.
    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the phrase holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Passphrase, password, UUID and coin generator.
#[derive(Debug)]
pub struct Generator<S: ByteSource = OsByteSource> {
    config: GeneratorConfig,
    wordlist: Option<WordList>,
    sampler: UniformSampler<S>,
}

impl Generator<OsByteSource> {
    /// Generator over the OS randomness source, without a word list.
    ///
    /// Passphrase generation with a non-zero word count needs a word
    /// list; everything else works without one.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_source(config, None, OsByteSource::new())
    }

    /// Generator with the built-in word list.
    pub fn with_builtin_wordlist(config: GeneratorConfig) -> Result<Self> {
        Self::with_source(config, Some(WordList::builtin()), OsByteSource::new())
    }

    /// Generator with an imported word list.
    pub fn with_wordlist(config: GeneratorConfig, wordlist: WordList) -> Result<Self> {
        Self::with_source(config, Some(wordlist), OsByteSource::new())
    }
}

impl<S: ByteSource> Generator<S> {
    /// Generator over an explicit byte source.
    pub fn with_source(
        config: GeneratorConfig,
        wordlist: Option<WordList>,
        source: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            wordlist,
            sampler: UniformSampler::new(source),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The loaded word list, if any.
    pub fn wordlist(&self) -> Option<&WordList> {
        self.wordlist.as_ref()
    }

    /// Generates a passphrase.
    ///
    /// Words are drawn first (independent picks, repetition allowed),
    /// then numbers, then the configured case treatment is applied.
    pub fn generate(&mut self) -> Result<Phrase> {
        let words = self.config.words;
        let numbers = self.config.numbers;

        let bits_per_word = match (&self.wordlist, words) {
            (Some(list), _) => list.bits_per_word(),
            (None, 0) => 0.0,
            (None, _) => {
                return Err(Error::invalid(
                    "passphrase generation requires a word list",
                ));
            }
        };

        let mut tokens = Vec::with_capacity(words + numbers);
        if words > 0 {
            // checked above: words > 0 implies a loaded list
            if let Some(list) = &self.wordlist {
                for _ in 0..words {
                    let word = self.sampler.choice(list.words())?;
                    tokens.push(Token::Word(word.clone()));
                }
            }
        }
        for _ in 0..numbers {
            let n = self
                .sampler
                .between(self.config.min_number, self.config.max_number)?;
            tokens.push(Token::Number(n));
        }

        match self.config.case {
            CaseStyle::Natural => {}
            CaseStyle::AllUpper => make_all_uppercase(&mut tokens),
            CaseStyle::AllLower => make_all_lowercase(&mut tokens),
            CaseStyle::UpperChars(n) => make_chars_uppercase(&mut tokens, n, &mut self.sampler)?,
            CaseStyle::LowerChars(n) => {
                make_all_uppercase(&mut tokens);
                make_chars_lowercase(&mut tokens, n, &mut self.sampler)?;
            }
        }

        let entropy_bits = entropy::passphrase_bits(
            words,
            bits_per_word,
            entropy::range_bits(self.config.min_number, self.config.max_number),
            numbers,
        )?;

        tracing::debug!(
            words = words,
            numbers = numbers,
            entropy_bits = entropy_bits,
            "Generated passphrase"
        );

        Ok(Phrase::new(tokens, self.config.separator.clone(), entropy_bits))
    }

    /// Generates a password of `config.password_length` characters.
    pub fn generate_password(&mut self) -> Result<Phrase> {
        if !self.config.classes.any_enabled() {
            return Err(Error::invalid(
                "at least one character class must be enabled",
            ));
        }
        let charset = self.config.classes.chars();
        let length = self.config.password_length;

        let mut tokens = Vec::with_capacity(length);
        for _ in 0..length {
            tokens.push(Token::Symbol(*self.sampler.choice(&charset)?));
        }

        let entropy_bits = entropy::password_bits(length, &charset)?;

        tracing::debug!(
            length = length,
            charset_size = charset.len(),
            entropy_bits = entropy_bits,
            "Generated password"
        );

        Ok(Phrase::new(tokens, "", entropy_bits))
    }

    /// Generates a version-4 UUID as five dash-separated groups.
    ///
    /// The version nibble is fixed to `4` and the variant nibble is
    /// drawn from `{8, 9, a, b}`; every other nibble is uniform.
    pub fn generate_uuid4(&mut self) -> Result<Phrase> {
        const VARIANTS: [char; 4] = ['8', '9', 'a', 'b'];

        let time_low = self.sampler.hex(8)?;
        let time_mid = self.sampler.hex(4)?;
        let time_high = format!("4{}", self.sampler.hex(3)?);
        let variant = self.sampler.choice(&VARIANTS)?;
        let clock_seq = format!("{}{}", variant, self.sampler.hex(3)?);
        let node = self.sampler.hex(12)?;

        let tokens = vec![
            Token::Word(time_low),
            Token::Word(time_mid),
            Token::Word(time_high),
            Token::Word(clock_seq),
            Token::Word(node),
        ];
        Ok(Phrase::new(tokens, "-", UUID4_ENTROPY_BITS))
    }

    /// Flips a coin.
    pub fn generate_coin(&mut self) -> Result<Phrase> {
        let face = if self.sampler.boolean()? {
            "Heads"
        } else {
            "Tails"
        };
        Ok(Phrase::new(vec![Token::Word(face.to_string())], "", 1.0))
    }

    /// Words needed to reach the configured entropy target, given the
    /// loaded word list and the configured number count.
    pub fn words_needed(&self) -> Result<usize> {
        let list = self
            .wordlist
            .as_ref()
            .ok_or_else(|| Error::invalid("word count sizing requires a word list"))?;
        entropy::words_needed(
            self.config.entropy_bits,
            list.bits_per_word(),
            entropy::range_bits(self.config.min_number, self.config.max_number),
            self.config.numbers,
        )
    }

    /// Password length needed to reach the configured entropy target
    /// over the enabled character classes.
    pub fn password_length_needed(&self) -> Result<usize> {
        entropy::password_length_needed(self.config.entropy_bits, &self.config.classes.chars())
    }
}
