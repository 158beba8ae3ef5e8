//! Passphrase and Password Generation Library
//!
//! Generates cryptographically secure passphrases, passwords, UUIDs
//! and coin flips from the operating system randomness source, and
//! accounts the Shannon entropy of every result.
//!
//! # Architecture
//!
//! The system follows an explicit data flow:
//!
//! ```text
//! source → sampler → generator
//!              ↓         ↓
//!       wordlist/tokens  entropy (accounting)
//! ```
//!
//! # Design Principles
//!
//! - **Exact uniformity**: Bounded draws use rejection sampling, never
//!   modulo reduction
//! - **OS randomness only**: No userspace PRNG state to seed or leak
//! - **Fail-fast validation**: Configurations are checked wholesale
//!   before any randomness is drawn
//! - **Honest accounting**: Reported entropy comes from the actual
//!   draw spaces, not from nominal figures (UUIDs and coins carry
//!   fixed labels)
//!
//! # Example
//!
//! ```no_run
//! use passphrase::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::default();
//! let mut generator = Generator::with_builtin_wordlist(config).unwrap();
//!
//! let phrase = generator.generate().unwrap();
//! println!("{}", phrase);
//! println!("entropy: {:.2} bits", phrase.entropy_bits());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod entropy;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod source;
pub mod tokens;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use generator::{CaseStyle, CharClasses, FileConfig, Generator, GeneratorConfig, Phrase};
pub use sampler::UniformSampler;
pub use source::{ByteSource, OsByteSource};
pub use tokens::Token;
pub use wordlist::WordList;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
