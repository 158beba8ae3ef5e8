//! Generation: configuration, character classes, and the engine.

mod charset;
mod config;
mod engine;

pub use charset::{CharClasses, DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
pub use config::{CaseStyle, FileConfig, GeneratorConfig};
pub use engine::{Generator, Phrase};
