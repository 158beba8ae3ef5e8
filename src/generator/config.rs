//! Generation configuration.
//!
//! The configuration is validated wholesale before a generator is
//! built, so a constructed generator never carries an inconsistent
//! setup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::generator::charset::CharClasses;

/// Case treatment applied to a generated passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    /// Words keep the form they have in the word list.
    Natural,
    /// Uppercase everything.
    AllUpper,
    /// Lowercase everything.
    AllLower,
    /// Exactly this many characters uppercase, the rest untouched.
    UpperChars(usize),
    /// Uppercase everything, then exactly this many characters back
    /// to lowercase.
    LowerChars(usize),
}

impl Default for CaseStyle {
    fn default() -> Self {
        CaseStyle::Natural
    }
}

/// Configuration for passphrase and password generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Entropy target in bits for derived word counts and lengths.
    pub entropy_bits: f64,
    /// Words per passphrase.
    pub words: usize,
    /// Numeric tokens per passphrase.
    pub numbers: usize,
    /// Smallest value a numeric token can take.
    pub min_number: u64,
    /// Largest value a numeric token can take.
    pub max_number: u64,
    /// Separator between passphrase tokens.
    pub separator: String,
    /// Password length in characters.
    pub password_length: usize,
    /// Character classes for password generation.
    pub classes: CharClasses,
    /// Case treatment for passphrases.
    pub case: CaseStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            entropy_bits: 77.0,
            words: 6,
            numbers: 0,
            min_number: 100_000,
            max_number: 999_999,
            separator: " ".to_string(),
            password_length: 0,
            classes: CharClasses::default(),
            case: CaseStyle::Natural,
        }
    }
}

impl GeneratorConfig {
    /// Validates the configuration as a whole.
    pub fn validate(&self) -> Result<()> {
        if !self.entropy_bits.is_finite() || self.entropy_bits <= 0.0 {
            return Err(Error::invalid("entropy target must be a positive number"));
        }
        if self.max_number < self.min_number {
            return Err(Error::invalid(format!(
                "number range {}..={} is inverted",
                self.min_number, self.max_number
            )));
        }
        Ok(())
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    /// Generation settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::Resource(format!("failed to read config file: {}", e)))?;
        let config: FileConfig = toml::from_str(&content)
            .map_err(|e| Error::invalid(format!("failed to parse config file: {}", e)))?;
        config.generator.validate()?;
        Ok(config)
    }
}
