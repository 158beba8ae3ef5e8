//! Token model for generated phrases.
//!
//! A phrase is an ordered sequence of tokens. Case transforms walk
//! the tokens recursively, so nested groups keep their shape while
//! individual characters change case.

mod case;
mod token;

pub use case::{
    make_all_lowercase, make_all_uppercase, make_chars_lowercase, make_chars_uppercase,
};
pub use token::{alpha_count, lowercase_count, uppercase_count, Token};
