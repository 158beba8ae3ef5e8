//! Password character classes.

use serde::{Deserialize, Serialize};

/// Uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Decimal digits.
pub const DIGITS: &str = "0123456789";
/// Printable ASCII punctuation.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes participate in password generation.
///
/// The full set of 94 printable characters yields about 6.55 bits per
/// drawn character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharClasses {
    /// Include uppercase letters.
    pub use_uppercase: bool,
    /// Include lowercase letters.
    pub use_lowercase: bool,
    /// Include decimal digits.
    pub use_digits: bool,
    /// Include punctuation.
    pub use_punctuation: bool,
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_punctuation: true,
        }
    }
}

impl CharClasses {
    /// All four classes.
    pub fn all() -> Self {
        Self::default()
    }

    /// No classes. Useless for generation until some are enabled.
    pub fn none() -> Self {
        Self {
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_punctuation: false,
        }
    }

    /// Letters and digits, no punctuation.
    pub fn alphanumeric() -> Self {
        Self {
            use_punctuation: false,
            ..Self::default()
        }
    }

    /// True when at least one class is enabled.
    pub fn any_enabled(&self) -> bool {
        self.use_uppercase || self.use_lowercase || self.use_digits || self.use_punctuation
    }

    /// The active character set.
    ///
    /// Classes are concatenated in a fixed order: uppercase,
    /// lowercase, digits, punctuation.
    pub fn chars(&self) -> Vec<char> {
        let mut chars = Vec::new();
        if self.use_uppercase {
            chars.extend(UPPERCASE.chars());
        }
        if self.use_lowercase {
            chars.extend(LOWERCASE.chars());
        }
        if self.use_digits {
            chars.extend(DIGITS.chars());
        }
        if self.use_punctuation {
            chars.extend(PUNCTUATION.chars());
        }
        chars
    }
}
